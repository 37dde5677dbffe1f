//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use jobboard_common::AppError;
use jobboard_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation
    Domain(DomainError),

    /// Application error (auth, validation, etc.)
    App(AppError),

    /// Input rejected for one field
    Validation { field: String, message: String },

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::Validation { message, .. } => f.write_str(message),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a field validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => AppError::domain_status_code(e),
            Self::App(e) => e.status_code(),
            Self::Validation { .. } => 422,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The offending field, for `{errors: {field: [message]}}` bodies
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Domain(e) => e.field(),
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Whether this error reports maintenance mode
    pub fn is_maintenance(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_unavailable(),
            Self::App(e) => e.is_maintenance(),
            _ => false,
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Domain(e) => Self::Domain(e),
            other => Self::App(other),
        }
    }
}

impl From<jobboard_cache::RedisPoolError> for ServiceError {
    fn from(err: jobboard_cache::RedisPoolError) -> Self {
        Self::App(AppError::Cache(err.to_string()))
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Validation { message, .. } => AppError::Validation(message),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::DenyReason;

    #[test]
    fn test_validation_error() {
        let err = ServiceError::validation("resume", "The resume must be a file of type: pdf, doc, docx.");
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.field(), Some("resume"));
    }

    #[test]
    fn test_domain_errors_keep_their_status() {
        assert_eq!(ServiceError::from(DomainError::JobNotFound(1)).status_code(), 404);
        assert_eq!(
            ServiceError::from(DomainError::Forbidden(DenyReason::NotJobOwner)).status_code(),
            403
        );
        assert_eq!(ServiceError::from(DomainError::AlreadyApplied).status_code(), 422);
        assert!(ServiceError::from(DomainError::UnderMaintenance).is_maintenance());
    }

    #[test]
    fn test_app_domain_errors_are_unwrapped() {
        let err = ServiceError::from(AppError::Domain(DomainError::ResumeRequired));
        assert!(matches!(err, ServiceError::Domain(DomainError::ResumeRequired)));
    }

    #[test]
    fn test_convert_to_app_error() {
        let app_err: AppError = ServiceError::from(AppError::InvalidCredentials).into();
        assert_eq!(app_err.status_code(), 401);
    }
}
