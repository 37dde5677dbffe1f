//! Activity log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the activity_logs table
#[derive(Debug, Clone, FromRow)]
pub struct ActivityLogModel {
    pub id: i64,
    pub user_id: Option<i64>,
    pub action: String,
    pub target_model: Option<String>,
    pub target_id: Option<i64>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}
