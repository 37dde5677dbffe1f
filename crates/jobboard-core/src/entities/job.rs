//! Job entity - a posting that belongs to one company

use chrono::{DateTime, NaiveDate, Utc};

use super::assign;
use crate::value_objects::JobStatus;

/// Job posting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: i64,
    pub company_id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Option<String>,
    pub job_type: String,
    pub category: Option<String>,
    pub requirements: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Check if the deadline has passed on the given day
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.deadline.is_some_and(|deadline| deadline < today)
    }

    /// Apply the supplied fields; status is never touched here
    pub fn apply_changes(&mut self, changes: JobChanges) {
        assign(&mut self.company_id, changes.company_id);
        assign(&mut self.title, changes.title);
        assign(&mut self.description, changes.description);
        assign(&mut self.location, changes.location);
        assign(&mut self.salary, changes.salary);
        assign(&mut self.job_type, changes.job_type);
        assign(&mut self.category, changes.category);
        assign(&mut self.requirements, changes.requirements);
        assign(&mut self.deadline, changes.deadline);
        self.updated_at = Utc::now();
    }

    pub fn set_status(&mut self, status: JobStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

/// Data needed to insert a job; status always starts as pending
#[derive(Debug, Clone)]
pub struct NewJob {
    pub company_id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Option<String>,
    pub job_type: String,
    pub category: Option<String>,
    pub requirements: Option<String>,
    pub deadline: Option<NaiveDate>,
}

/// Partial job edit. `None` leaves a field alone, `Some(None)` clears a
/// nullable one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobChanges {
    pub company_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub salary: Option<Option<String>>,
    pub job_type: Option<String>,
    pub category: Option<Option<String>>,
    pub requirements: Option<Option<String>>,
    pub deadline: Option<Option<NaiveDate>>,
}

/// Listing filters; text filters are case-insensitive substrings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub search: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub category: Option<String>,
}

impl JobFilter {
    /// Drop blank values so they do not filter anything
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        Self {
            search: clean(self.search),
            location: clean(self.location),
            job_type: clean(self.job_type),
            category: clean(self.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(deadline: Option<NaiveDate>) -> Job {
        let now = Utc::now();
        Job {
            id: 1,
            company_id: 1,
            title: "Backend Engineer".to_string(),
            description: "Build APIs".to_string(),
            location: "Remote".to_string(),
            salary: None,
            job_type: "full-time".to_string(),
            category: None,
            requirements: None,
            deadline,
            status: JobStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_deadline() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        assert!(!job(None).is_expired_on(today));
        assert!(!job(Some(today)).is_expired_on(today));
        assert!(job(NaiveDate::from_ymd_opt(2024, 5, 9)).is_expired_on(today));
    }

    #[test]
    fn test_partial_changes() {
        let mut posting = job(NaiveDate::from_ymd_opt(2030, 1, 1));
        posting.salary = Some("100k".to_string());

        posting.apply_changes(JobChanges {
            title: Some("Staff Engineer".to_string()),
            category: Some(Some("Engineering".to_string())),
            deadline: Some(None),
            ..Default::default()
        });

        assert_eq!(posting.title, "Staff Engineer");
        assert_eq!(posting.description, "Build APIs");
        assert_eq!(posting.salary.as_deref(), Some("100k"));
        assert_eq!(posting.category.as_deref(), Some("Engineering"));
        assert!(posting.deadline.is_none());
        assert_eq!(posting.status, JobStatus::Pending);
    }

    #[test]
    fn test_filter_normalization() {
        let filter = JobFilter {
            search: Some("  rust ".to_string()),
            location: Some("   ".to_string()),
            job_type: None,
            category: Some(String::new()),
        }
        .normalized();
        assert_eq!(filter.search.as_deref(), Some("rust"));
        assert!(filter.location.is_none());
        assert!(filter.category.is_none());
    }
}
