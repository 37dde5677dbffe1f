//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::policy::DenyReason;
use crate::value_objects::ApplicationStatus;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found")]
    UserNotFound(i64),

    #[error("Company not found")]
    CompanyNotFound(i64),

    #[error("Job not found")]
    JobNotFound(i64),

    #[error("Application not found")]
    ApplicationNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{message}")]
    ValidationError { field: &'static str, message: String },

    #[error("The selected role is invalid: {0}")]
    InvalidRole(String),

    #[error("The selected status is invalid: {0}")]
    InvalidStatus(String),

    #[error("Cannot change application status from {from} to {to}.")]
    InvalidTransition {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },

    #[error("Please upload a resume to your profile before applying.")]
    ResumeRequired,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("{0}")]
    Forbidden(DenyReason),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("The email has already been taken.")]
    EmailAlreadyExists,

    #[error("You have already applied for this job.")]
    AlreadyApplied,

    // =========================================================================
    // Availability
    // =========================================================================
    #[error("System is currently under maintenance. Please try again later.")]
    UnderMaintenance,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field,
            message: message.into(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CompanyNotFound(_) => "UNKNOWN_COMPANY",
            Self::JobNotFound(_) => "UNKNOWN_JOB",
            Self::ApplicationNotFound(_) => "UNKNOWN_APPLICATION",

            // Validation
            Self::ValidationError { .. } => "VALIDATION_ERROR",
            Self::InvalidRole(_) => "INVALID_ROLE",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::InvalidTransition { .. } => "INVALID_STATUS_TRANSITION",
            Self::ResumeRequired => "RESUME_REQUIRED",

            // Authorization
            Self::Forbidden(DenyReason::ProtectedAdmin) => "CANNOT_DELETE_ADMIN",
            Self::Forbidden(_) => "FORBIDDEN",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::AlreadyApplied => "ALREADY_APPLIED",

            Self::UnderMaintenance => "MAINTENANCE_MODE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Field the error belongs to, for field-keyed validation responses
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::ValidationError { field, .. } => Some(*field),
            Self::InvalidRole(_) => Some("role"),
            Self::InvalidStatus(_) | Self::InvalidTransition { .. } => Some("status"),
            Self::ResumeRequired => Some("resume"),
            Self::EmailAlreadyExists => Some("email"),
            Self::AlreadyApplied => Some("job_id"),
            _ => None,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::CompanyNotFound(_)
                | Self::JobNotFound(_)
                | Self::ApplicationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError { .. }
                | Self::InvalidRole(_)
                | Self::InvalidStatus(_)
                | Self::InvalidTransition { .. }
                | Self::ResumeRequired
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::AlreadyApplied)
    }

    /// Check if the platform is refusing work
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::UnderMaintenance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::JobNotFound(5).code(), "UNKNOWN_JOB");
        assert_eq!(
            DomainError::Forbidden(DenyReason::ProtectedAdmin).code(),
            "CANNOT_DELETE_ADMIN"
        );
        assert_eq!(
            DomainError::Forbidden(DenyReason::NotCompanyOwner).code(),
            "FORBIDDEN"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::CompanyNotFound(1).is_not_found());
        assert!(DomainError::ApplicationNotFound(1).is_not_found());
        assert!(!DomainError::AlreadyApplied.is_not_found());
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::ResumeRequired.is_validation());
        assert!(DomainError::AlreadyApplied.is_conflict());
        assert!(DomainError::Forbidden(DenyReason::AdminOnly).is_authorization());
        assert!(DomainError::UnderMaintenance.is_unavailable());
        assert!(!DomainError::DatabaseError("boom".into()).is_validation());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::JobNotFound(9).to_string(), "Job not found");
        assert_eq!(
            DomainError::Forbidden(DenyReason::ProtectedAdmin).to_string(),
            "Cannot delete admin user."
        );
        assert_eq!(
            DomainError::ResumeRequired.to_string(),
            "Please upload a resume to your profile before applying."
        );
    }

    #[test]
    fn test_fields() {
        assert_eq!(DomainError::AlreadyApplied.field(), Some("job_id"));
        assert_eq!(DomainError::validation("company_id", "bad").field(), Some("company_id"));
        assert_eq!(DomainError::JobNotFound(1).field(), None);
    }
}
