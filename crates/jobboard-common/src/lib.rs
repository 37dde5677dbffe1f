//! # jobboard-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_password, Claims, IssuedToken, JwtService, PasswordService};
pub use config::{
    AppConfig, AppSettings, BootstrapConfig, ConfigError, CorsConfig, DatabaseConfig,
    Environment, JwtConfig, RateLimitConfig, RedisConfig, ServerConfig, StorageConfig,
    WorkflowConfig,
};
pub use error::{AppError, AppResult, SERVER_ERROR_MESSAGE};
pub use telemetry::{
    try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError,
};
