//! # jobboard-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `jobboard-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jobboard_db::{create_pool, run_migrations, DatabaseConfig, PgJobRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(std::env::var("DATABASE_URL")?).with_pool_size(20, 2);
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let jobs = PgJobRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgActivityLogRepository, PgApplicationRepository, PgCompanyRepository, PgJobRepository,
    PgReportingRepository, PgSettingRepository, PgUserRepository,
};
