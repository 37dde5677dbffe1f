//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table (password hash excluded)
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub portfolio_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub skills: Option<String>,
    pub department: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub resume_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
