//! Application error types
//!
//! Unified error handling for the entire application.

use jobboard_core::DomainError;

/// Message returned for every 5xx so internals never reach the client
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid login details")]
    InvalidCredentials,

    #[error("Unauthenticated.")]
    InvalidToken,

    #[error("Unauthenticated.")]
    TokenExpired,

    // Validation errors
    #[error("{0}")]
    Validation(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Redis errors
    #[error("Cache error: {0}")]
    Cache(String),

    // File storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 401 Unauthorized
            Self::InvalidCredentials | Self::InvalidToken | Self::TokenExpired => 401,

            // 422 Unprocessable Entity
            Self::Validation(_) => 422,

            // 500 Internal Server Error
            Self::Database(_)
            | Self::Cache(_)
            | Self::Storage(_)
            | Self::Internal(_)
            | Self::Config(_) => 500,

            Self::Domain(e) => Self::domain_status_code(e),
        }
    }

    /// HTTP status code for a domain error
    #[must_use]
    pub fn domain_status_code(e: &DomainError) -> u16 {
        if e.is_not_found() {
            404
        } else if e.is_authorization() {
            403
        } else if e.is_validation() || e.is_conflict() {
            422
        } else if e.is_unavailable() {
            503
        } else {
            500
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a server error (5xx other than maintenance)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        let status = self.status_code();
        (500..600).contains(&status) && status != 503
    }

    /// Whether this error reports maintenance mode
    #[must_use]
    pub fn is_maintenance(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_unavailable())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
