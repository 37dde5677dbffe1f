//! Activity log entity - append-only audit trail of admin actions

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    pub id: i64,
    /// Acting user; cleared when that account is removed
    pub user_id: Option<i64>,
    pub action: String,
    pub target_model: Option<String>,
    pub target_id: Option<i64>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivityLog {
    pub user_id: Option<i64>,
    pub action: String,
    pub target_model: Option<String>,
    pub target_id: Option<i64>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
}
