//! PostgreSQL implementation of ActivityLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use jobboard_core::entities::{ActivityLog, NewActivityLog};
use jobboard_core::traits::{ActivityLogRepository, RepoResult};
use jobboard_core::value_objects::{Page, PageRequest};

use super::error::map_db_error;
use crate::models::ActivityLogModel;

/// PostgreSQL implementation of ActivityLogRepository (append-only)
#[derive(Clone)]
pub struct PgActivityLogRepository {
    pool: PgPool,
}

impl PgActivityLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityLogRepository for PgActivityLogRepository {
    #[instrument(skip(self, entry), fields(action = %entry.action))]
    async fn append(&self, entry: &NewActivityLog) -> RepoResult<ActivityLog> {
        let model = sqlx::query_as::<_, ActivityLogModel>(
            r"
            INSERT INTO activity_logs (user_id, action, target_model, target_id, details, ip_address)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, action, target_model, target_id, details, ip_address, created_at
            ",
        )
        .bind(entry.user_id)
        .bind(&entry.action)
        .bind(&entry.target_model)
        .bind(entry.target_id)
        .bind(&entry.details)
        .bind(&entry.ip_address)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ActivityLog::from(model))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> RepoResult<Page<ActivityLog>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activity_logs")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, ActivityLogModel>(
            r"
            SELECT id, user_id, action, target_model, target_id, details, ip_address, created_at
            FROM activity_logs
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(ActivityLog::from).collect(),
            total,
            page,
        ))
    }
}
