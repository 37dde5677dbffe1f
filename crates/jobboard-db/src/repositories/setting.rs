//! PostgreSQL implementation of SettingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use jobboard_core::traits::{RepoResult, SettingRepository};

use super::error::map_db_error;

/// PostgreSQL implementation of SettingRepository
#[derive(Clone)]
pub struct PgSettingRepository {
    pool: PgPool,
}

impl PgSettingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingRepository for PgSettingRepository {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM settings WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(value)
    }

    #[instrument(skip(self))]
    async fn put(&self, key: &str, value: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO settings (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE
            SET value = EXCLUDED.value,
                version = settings.version + 1,
                updated_at = NOW()
            ",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
