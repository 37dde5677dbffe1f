//! Schema migrations
//!
//! Migrations are read from disk at runtime so the crate does not need the
//! SQLx macros feature.

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

/// Directory holding the `.sql` migration files
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Apply all pending migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = Migrator::new(Path::new(MIGRATIONS_DIR)).await?;
    info!(count = migrator.iter().count(), "Applying database migrations");
    migrator.run(pool).await
}
