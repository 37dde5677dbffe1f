//! Aggregate query rows

use sqlx::FromRow;

/// One `GROUP BY` bucket
#[derive(Debug, Clone, FromRow)]
pub struct LabelCountModel {
    pub label: String,
    pub count: i64,
}

impl From<LabelCountModel> for (String, i64) {
    fn from(model: LabelCountModel) -> Self {
        (model.label, model.count)
    }
}
