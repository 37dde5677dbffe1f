//! Admin events - every successful moderation action becomes an audit entry

use serde::Serialize;

use crate::entities::NewActivityLog;
use crate::value_objects::{JobStatus, MaintenanceMode};

/// Moderation actions that are written to the activity log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminEvent {
    UserDeleted { user_id: i64, email: String },
    JobDeleted { job_id: i64, title: String },
    JobStatusChanged { job_id: i64, status: JobStatus },
    CompanyDeleted { company_id: i64, name: String },
    ApplicationDeleted { application_id: i64 },
    MaintenanceToggled { mode: MaintenanceMode },
}

impl AdminEvent {
    /// Action name stored in the log
    pub fn action(&self) -> String {
        match self {
            Self::UserDeleted { .. } => "delete_user".to_string(),
            Self::JobDeleted { .. } => "delete_job".to_string(),
            Self::JobStatusChanged { status, .. } => format!("update_job_status_{status}"),
            Self::CompanyDeleted { .. } => "delete_company".to_string(),
            Self::ApplicationDeleted { .. } => "delete_application".to_string(),
            Self::MaintenanceToggled { .. } => "toggle_maintenance".to_string(),
        }
    }

    pub fn target_model(&self) -> &'static str {
        match self {
            Self::UserDeleted { .. } => "User",
            Self::JobDeleted { .. } | Self::JobStatusChanged { .. } => "Job",
            Self::CompanyDeleted { .. } => "Company",
            Self::ApplicationDeleted { .. } => "Application",
            Self::MaintenanceToggled { .. } => "Setting",
        }
    }

    pub fn target_id(&self) -> Option<i64> {
        match self {
            Self::UserDeleted { user_id, .. } => Some(*user_id),
            Self::JobDeleted { job_id, .. } | Self::JobStatusChanged { job_id, .. } => {
                Some(*job_id)
            }
            Self::CompanyDeleted { company_id, .. } => Some(*company_id),
            Self::ApplicationDeleted { application_id } => Some(*application_id),
            Self::MaintenanceToggled { .. } => None,
        }
    }

    /// Human readable summary
    pub fn details(&self) -> String {
        match self {
            Self::UserDeleted { email, .. } => format!("Deleted user: {email}"),
            Self::JobDeleted { title, .. } => format!("Deleted job: {title}"),
            Self::JobStatusChanged { status, .. } => format!("Changed job status to {status}"),
            Self::CompanyDeleted { name, .. } => format!("Deleted company: {name}"),
            Self::ApplicationDeleted { application_id } => {
                format!("Deleted application ID: {application_id}")
            }
            Self::MaintenanceToggled { mode } => format!("Maintenance mode set to {mode}"),
        }
    }

    /// Build the log row for this event
    pub fn into_log(self, actor_id: i64, ip_address: Option<String>) -> NewActivityLog {
        NewActivityLog {
            user_id: Some(actor_id),
            action: self.action(),
            target_model: Some(self.target_model().to_string()),
            target_id: self.target_id(),
            details: Some(self.details()),
            ip_address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_status_action_carries_status() {
        let event = AdminEvent::JobStatusChanged {
            job_id: 7,
            status: JobStatus::Active,
        };
        assert_eq!(event.action(), "update_job_status_active");
        assert_eq!(event.details(), "Changed job status to active");
        assert_eq!(event.target_model(), "Job");
        assert_eq!(event.target_id(), Some(7));
    }

    #[test]
    fn test_maintenance_has_no_target_id() {
        let log = AdminEvent::MaintenanceToggled {
            mode: MaintenanceMode::On,
        }
        .into_log(1, Some("127.0.0.1".to_string()));
        assert_eq!(log.action, "toggle_maintenance");
        assert_eq!(log.target_model.as_deref(), Some("Setting"));
        assert_eq!(log.target_id, None);
        assert_eq!(log.details.as_deref(), Some("Maintenance mode set to on"));
        assert_eq!(log.ip_address.as_deref(), Some("127.0.0.1"));
    }

    #[test]
    fn test_delete_details() {
        let event = AdminEvent::UserDeleted {
            user_id: 3,
            email: "bob@example.com".to_string(),
        };
        assert_eq!(event.details(), "Deleted user: bob@example.com");
        let event = AdminEvent::ApplicationDeleted { application_id: 42 };
        assert_eq!(event.details(), "Deleted application ID: 42");
    }

    #[test]
    fn test_serialize_tag() {
        let json = serde_json::to_value(AdminEvent::CompanyDeleted {
            company_id: 1,
            name: "Acme".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "COMPANY_DELETED");
    }
}
