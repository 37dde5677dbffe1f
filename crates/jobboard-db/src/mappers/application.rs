//! Application entity <-> model mapper

use jobboard_core::entities::Application;
use jobboard_core::error::DomainError;

use crate::models::ApplicationModel;

impl TryFrom<ApplicationModel> for Application {
    type Error = DomainError;

    fn try_from(model: ApplicationModel) -> Result<Self, Self::Error> {
        Ok(Application {
            id: model.id,
            job_id: model.job_id,
            user_id: model.user_id,
            resume_path: model.resume_path,
            status: model.status.parse()?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jobboard_core::value_objects::ApplicationStatus;

    fn model(status: &str) -> ApplicationModel {
        ApplicationModel {
            id: 1,
            job_id: 2,
            user_id: 3,
            resume_path: "resumes/cv.pdf".to_string(),
            status: status.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_model_to_entity() {
        let application = Application::try_from(model("interview_scheduled")).unwrap();
        assert_eq!(application.status, ApplicationStatus::InterviewScheduled);
    }

    #[test]
    fn test_legacy_pending_reads_as_applied() {
        let application = Application::try_from(model("pending")).unwrap();
        assert_eq!(application.status, ApplicationStatus::Applied);
    }
}
