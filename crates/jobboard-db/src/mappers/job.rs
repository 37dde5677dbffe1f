//! Job entity <-> model mapper

use jobboard_core::entities::Job;
use jobboard_core::error::DomainError;

use crate::models::JobModel;

impl TryFrom<JobModel> for Job {
    type Error = DomainError;

    fn try_from(model: JobModel) -> Result<Self, Self::Error> {
        Ok(Job {
            id: model.id,
            company_id: model.company_id,
            title: model.title,
            description: model.description,
            location: model.location,
            salary: model.salary,
            job_type: model.job_type,
            category: model.category,
            requirements: model.requirements,
            deadline: model.deadline,
            status: model.status.parse()?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use jobboard_core::value_objects::JobStatus;

    #[test]
    fn test_model_to_entity() {
        let model = JobModel {
            id: 3,
            company_id: 1,
            title: "Backend Developer".to_string(),
            description: "Build APIs".to_string(),
            location: "Remote".to_string(),
            salary: None,
            job_type: "full-time".to_string(),
            category: Some("Engineering".to_string()),
            requirements: None,
            deadline: NaiveDate::from_ymd_opt(2030, 1, 31),
            status: "active".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let job = Job::try_from(model).unwrap();
        assert_eq!(job.status, JobStatus::Active);
        assert_eq!(job.job_type, "full-time");
        assert_eq!(job.deadline, NaiveDate::from_ymd_opt(2030, 1, 31));
    }
}
