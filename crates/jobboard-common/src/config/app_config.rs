//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
    pub workflow: WorkflowConfig,
    pub bootstrap: BootstrapConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations at start-up
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
}

/// Access token configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Token and session lifetime in seconds
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Uploaded file storage
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
    /// URL prefix the upload directory is served under
    #[serde(default = "default_public_path")]
    pub public_path: String,
    #[serde(default = "default_max_resume_kb")]
    pub max_resume_kb: u64,
}

impl StorageConfig {
    #[must_use]
    pub fn max_resume_bytes(&self) -> usize {
        (self.max_resume_kb * 1024) as usize
    }
}

/// Application workflow rules
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowConfig {
    /// Reject status changes outside the transition table
    #[serde(default = "default_true")]
    pub strict_transitions: bool,
}

/// Admin account ensured at start-up
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BootstrapConfig {
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
    #[serde(default = "default_admin_name")]
    pub admin_name: String,
}

impl BootstrapConfig {
    /// Credentials when both email and password are configured
    #[must_use]
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        match (&self.admin_email, &self.admin_password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some((email.as_str(), password.as_str()))
            }
            _ => None,
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "jobboard".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_access_token_expiry() -> i64 {
    604_800 // 7 days
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("./storage")
}

fn default_public_path() -> String {
    "/storage".to_string()
}

fn default_max_resume_kb() -> u64 {
    2048
}

fn default_admin_name() -> String {
    "Admin".to_string()
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

fn parse_flag(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .and_then(|s| match s.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: parse_var("API_PORT").ok_or(ConfigError::MissingVar("API_PORT"))?,
                request_timeout_secs: parse_var("API_REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(default_request_timeout),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")
                    .unwrap_or_else(default_min_connections),
                run_migrations: parse_flag("DATABASE_RUN_MIGRATIONS").unwrap_or_else(default_true),
            },
            redis: RedisConfig {
                url: env::var("REDIS_URL").map_err(|_| ConfigError::MissingVar("REDIS_URL"))?,
                max_connections: parse_var("REDIS_MAX_CONNECTIONS")
                    .unwrap_or_else(default_redis_max_connections),
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?,
                access_token_expiry: parse_var("JWT_ACCESS_TOKEN_EXPIRY")
                    .unwrap_or_else(default_access_token_expiry),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var("RATE_LIMIT_REQUESTS_PER_SECOND")
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_var("RATE_LIMIT_BURST").unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
            storage: StorageConfig {
                upload_dir: env::var("STORAGE_UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_upload_dir()),
                public_path: env::var("STORAGE_PUBLIC_PATH")
                    .unwrap_or_else(|_| default_public_path()),
                max_resume_kb: parse_var("STORAGE_MAX_RESUME_KB")
                    .unwrap_or_else(default_max_resume_kb),
            },
            workflow: WorkflowConfig {
                strict_transitions: parse_flag("WORKFLOW_STRICT_TRANSITIONS")
                    .unwrap_or_else(default_true),
            },
            bootstrap: BootstrapConfig {
                admin_email: env::var("ADMIN_EMAIL").ok(),
                admin_password: env::var("ADMIN_PASSWORD").ok(),
                admin_name: env::var("ADMIN_NAME").unwrap_or_else(|_| default_admin_name()),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 30,
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_app_name(), "jobboard");
        assert_eq!(default_host(), "127.0.0.1");
        assert_eq!(default_max_connections(), 20);
        assert_eq!(default_access_token_expiry(), 604_800);
        assert_eq!(default_max_resume_kb(), 2048);
        assert!(default_true());
    }

    #[test]
    fn test_max_resume_bytes() {
        let storage = StorageConfig {
            upload_dir: default_upload_dir(),
            public_path: default_public_path(),
            max_resume_kb: 2048,
        };
        assert_eq!(storage.max_resume_bytes(), 2_097_152);
    }

    #[test]
    fn test_admin_credentials_need_both_values() {
        let mut bootstrap = BootstrapConfig {
            admin_email: Some("admin@example.com".to_string()),
            ..Default::default()
        };
        assert!(bootstrap.admin_credentials().is_none());

        bootstrap.admin_password = Some(String::new());
        assert!(bootstrap.admin_credentials().is_none());

        bootstrap.admin_password = Some("password".to_string());
        assert_eq!(
            bootstrap.admin_credentials(),
            Some(("admin@example.com", "password"))
        );
    }
}
