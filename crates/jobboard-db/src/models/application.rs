//! Application database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ApplicationModel {
    pub id: i64,
    pub job_id: i64,
    pub user_id: i64,
    pub resume_path: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
