//! Job-board database pool and embedded migrations

mod migrate;
mod postgres;

pub use migrate::{run_migrations, MIGRATIONS_DIR};
pub use postgres::{create_pool, DatabaseConfig};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
