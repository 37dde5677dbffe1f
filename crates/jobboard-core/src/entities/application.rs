//! Application entity - a seeker's application to a job

use chrono::{DateTime, Utc};

use crate::value_objects::ApplicationStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    pub user_id: i64,
    pub resume_path: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Application {
    #[inline]
    pub fn is_applicant(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub job_id: i64,
    pub user_id: i64,
    pub resume_path: String,
}
