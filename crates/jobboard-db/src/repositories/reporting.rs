//! PostgreSQL implementation of ReportingRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use jobboard_core::reporting::Tracked;
use jobboard_core::traits::{ReportingRepository, RepoResult};
use jobboard_core::value_objects::{JobStatus, Role};

use super::error::map_db_error;
use crate::models::LabelCountModel;

/// PostgreSQL implementation of ReportingRepository
#[derive(Clone)]
pub struct PgReportingRepository {
    pool: PgPool,
}

impl PgReportingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportingRepository for PgReportingRepository {
    #[instrument(skip(self))]
    async fn count_users(&self, role: Option<Role>) -> RepoResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE ($1::TEXT IS NULL OR role = $1)")
                .bind(role.map(Role::as_str))
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_jobs(&self, status: Option<JobStatus>) -> RepoResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE ($1::TEXT IS NULL OR status = $1)")
                .bind(status.map(JobStatus::as_str))
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_companies(&self) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_created_between(
        &self,
        tracked: Tracked,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepoResult<i64> {
        let sql = match tracked {
            Tracked::Users => {
                "SELECT COUNT(*) FROM users WHERE created_at >= $1 AND created_at < $2"
            }
            Tracked::Jobs => "SELECT COUNT(*) FROM jobs WHERE created_at >= $1 AND created_at < $2",
            Tracked::Companies => {
                "SELECT COUNT(*) FROM companies WHERE created_at >= $1 AND created_at < $2"
            }
        };

        let count: i64 = sqlx::query_scalar(sql)
            .bind(start)
            .bind(end)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn application_status_distribution(&self) -> RepoResult<Vec<(String, i64)>> {
        let rows = sqlx::query_as::<_, LabelCountModel>(
            r"
            SELECT status AS label, COUNT(*) AS count
            FROM applications
            GROUP BY status
            ORDER BY count DESC, status
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn top_categories(&self, limit: i64) -> RepoResult<Vec<(String, i64)>> {
        let rows = sqlx::query_as::<_, LabelCountModel>(
            r"
            SELECT category AS label, COUNT(*) AS count
            FROM jobs
            WHERE category IS NOT NULL AND category <> ''
            GROUP BY category
            ORDER BY count DESC, category
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn count_jobs_owned_by(&self, owner_id: i64) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r"
            SELECT COUNT(*)
            FROM jobs j
            JOIN companies c ON c.id = j.company_id
            WHERE c.user_id = $1
            ",
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_companies_owned_by(&self, owner_id: i64) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies WHERE user_id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }
}
