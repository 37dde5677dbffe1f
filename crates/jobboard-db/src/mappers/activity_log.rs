//! Activity log entity <-> model mapper

use jobboard_core::entities::ActivityLog;

use crate::models::ActivityLogModel;

impl From<ActivityLogModel> for ActivityLog {
    fn from(model: ActivityLogModel) -> Self {
        ActivityLog {
            id: model.id,
            user_id: model.user_id,
            action: model.action,
            target_model: model.target_model,
            target_id: model.target_id,
            details: model.details,
            ip_address: model.ip_address,
            created_at: model.created_at,
        }
    }
}
