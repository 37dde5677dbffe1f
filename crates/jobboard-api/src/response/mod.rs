//! Response types and error handling for API endpoints
//!
//! Every error renders as `{message, code, errors?, maintenance?}` where
//! `errors` maps field names to their messages.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jobboard_common::{AppError, SERVER_ERROR_MESSAGE};
use jobboard_core::DomainError;
use jobboard_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{}", first_message(.0).unwrap_or_else(|| "The given data was invalid.".to_string()))]
    Validation(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("{0}")]
    InvalidBody(String),

    #[error("Unauthenticated.")]
    MissingAuth,

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Domain(e) => AppError::domain_status_code(e),
            Self::Validation(_) | Self::InvalidBody(_) => 422,
            Self::InvalidPath(_) | Self::InvalidQuery(_) => 400,
            Self::MissingAuth => 401,
            Self::Internal(_) => 500,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::MissingAuth => "UNAUTHENTICATED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the platform refused the request because of maintenance
    #[must_use]
    pub fn is_maintenance(&self) -> bool {
        match self {
            Self::App(e) => e.is_maintenance(),
            Self::Service(e) => e.is_maintenance(),
            Self::Domain(e) => e.is_unavailable(),
            _ => false,
        }
    }

    /// Field-keyed messages for validation failures
    #[must_use]
    pub fn field_errors(&self) -> Option<BTreeMap<String, Vec<String>>> {
        let single = |field: &str, message: String| {
            Some(BTreeMap::from([(field.to_string(), vec![message])]))
        };
        match self {
            Self::Validation(errors) => Some(collect_field_errors(errors)),
            Self::Service(e) => e.field().and_then(|field| single(field, e.to_string())),
            Self::Domain(e) => e.field().and_then(|field| single(field, e.to_string())),
            Self::App(AppError::Domain(e)) => {
                e.field().and_then(|field| single(field, e.to_string()))
            }
            _ => None,
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }
}

fn collect_field_errors(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map_or_else(|| format!("The {field} field is invalid."), ToString::to_string)
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

fn first_message(errors: &ValidationErrors) -> Option<String> {
    collect_field_errors(errors)
        .into_values()
        .next()
        .and_then(|messages| messages.into_iter().next())
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub maintenance: bool,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() && !self.is_maintenance() {
            error!(error = ?self, "Server error occurred");
            SERVER_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        let body = ErrorBody {
            message,
            code: self.error_code(),
            errors: self.field_errors(),
            maintenance: self.is_maintenance(),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::DenyReason;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "The name field is required."))]
        name: String,
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(ApiError::MissingAuth.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::from(DomainError::Forbidden(DenyReason::ProtectedAdmin)).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from(DomainError::AlreadyApplied).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(DomainError::UnderMaintenance).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_validation_errors_are_field_keyed() {
        let errors = Probe { name: String::new() }.validate().unwrap_err();
        let err = ApiError::from(errors);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "The name field is required.");
        let fields = err.field_errors().unwrap();
        assert_eq!(fields["name"], vec!["The name field is required.".to_string()]);
    }

    #[test]
    fn test_domain_conflict_carries_field() {
        let err = ApiError::from(ServiceError::from(DomainError::AlreadyApplied));
        let fields = err.field_errors().unwrap();
        assert_eq!(
            fields["job_id"],
            vec!["You have already applied for this job.".to_string()]
        );
    }

    #[test]
    fn test_maintenance_flag() {
        let err = ApiError::from(ServiceError::from(DomainError::UnderMaintenance));
        assert!(err.is_maintenance());
        assert!(!ApiError::MissingAuth.is_maintenance());
    }

    #[tokio::test]
    async fn test_server_errors_hide_details() {
        let response = ApiError::internal(anyhow::anyhow!("db password leaked")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Server Error");
        assert!(body.get("maintenance").is_none());
    }
}
