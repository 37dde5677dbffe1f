//! PostgreSQL implementation of ApplicationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use jobboard_core::entities::{Application, NewApplication};
use jobboard_core::error::DomainError;
use jobboard_core::policy::ApplicationScope;
use jobboard_core::traits::{ApplicationRepository, RepoResult};
use jobboard_core::value_objects::{ApplicationStatus, Page, PageRequest};

use super::error::{application_not_found, map_db_error, map_rows, map_unique_violation};
use crate::models::ApplicationModel;

/// Split a scope into the `(owner_id, applicant_id)` query parameters.
/// Every scoped query uses the same two-parameter `WHERE` clause.
fn scope_params(scope: ApplicationScope) -> (Option<i64>, Option<i64>) {
    match scope {
        ApplicationScope::All => (None, None),
        ApplicationScope::OwnedCompanies(owner_id) => (Some(owner_id), None),
        ApplicationScope::Applicant(user_id) => (None, Some(user_id)),
    }
}

/// PostgreSQL implementation of ApplicationRepository
#[derive(Clone)]
pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Application>> {
        let result = sqlx::query_as::<_, ApplicationModel>(
            r"
            SELECT id, job_id, user_id, resume_path, status, created_at, updated_at
            FROM applications
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Application::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn exists_for(&self, user_id: i64, job_id: i64) -> RepoResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM applications WHERE user_id = $1 AND job_id = $2)",
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, application), fields(job_id = application.job_id, user_id = application.user_id))]
    async fn create(&self, application: &NewApplication) -> RepoResult<Application> {
        let model = sqlx::query_as::<_, ApplicationModel>(
            r"
            INSERT INTO applications (job_id, user_id, resume_path, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, job_id, user_id, resume_path, status, created_at, updated_at
            ",
        )
        .bind(application.job_id)
        .bind(application.user_id)
        .bind(&application.resume_path)
        .bind(ApplicationStatus::default().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyApplied))?;

        Application::try_from(model)
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: i64, status: ApplicationStatus) -> RepoResult<()> {
        let result =
            sqlx::query("UPDATE applications SET status = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(status.as_str())
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(application_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(application_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        scope: ApplicationScope,
        page: PageRequest,
    ) -> RepoResult<Page<Application>> {
        let total = self.count(scope, None).await?;
        let (owner_id, applicant_id) = scope_params(scope);

        let rows = sqlx::query_as::<_, ApplicationModel>(
            r"
            SELECT a.id, a.job_id, a.user_id, a.resume_path, a.status, a.created_at, a.updated_at
            FROM applications a
            WHERE ($1::BIGINT IS NULL OR a.job_id IN (
                      SELECT j.id FROM jobs j
                      JOIN companies c ON c.id = j.company_id
                      WHERE c.user_id = $1))
              AND ($2::BIGINT IS NULL OR a.user_id = $2)
            ORDER BY a.created_at DESC, a.id DESC
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(owner_id)
        .bind(applicant_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(map_rows(rows)?, total, page))
    }

    #[instrument(skip(self))]
    async fn recent(&self, scope: ApplicationScope, limit: i64) -> RepoResult<Vec<Application>> {
        let (owner_id, applicant_id) = scope_params(scope);

        let rows = sqlx::query_as::<_, ApplicationModel>(
            r"
            SELECT a.id, a.job_id, a.user_id, a.resume_path, a.status, a.created_at, a.updated_at
            FROM applications a
            WHERE ($1::BIGINT IS NULL OR a.job_id IN (
                      SELECT j.id FROM jobs j
                      JOIN companies c ON c.id = j.company_id
                      WHERE c.user_id = $1))
              AND ($2::BIGINT IS NULL OR a.user_id = $2)
            ORDER BY a.created_at DESC, a.id DESC
            LIMIT $3
            ",
        )
        .bind(owner_id)
        .bind(applicant_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_rows(rows)
    }

    #[instrument(skip(self))]
    async fn count(
        &self,
        scope: ApplicationScope,
        status: Option<ApplicationStatus>,
    ) -> RepoResult<i64> {
        let (owner_id, applicant_id) = scope_params(scope);

        let count: i64 = sqlx::query_scalar(
            r"
            SELECT COUNT(*)
            FROM applications a
            WHERE ($1::BIGINT IS NULL OR a.job_id IN (
                      SELECT j.id FROM jobs j
                      JOIN companies c ON c.id = j.company_id
                      WHERE c.user_id = $1))
              AND ($2::BIGINT IS NULL OR a.user_id = $2)
              AND ($3::TEXT IS NULL OR a.status = $3)
            ",
        )
        .bind(owner_id)
        .bind(applicant_id)
        .bind(status.map(ApplicationStatus::as_str))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_for_job(&self, job_id: i64) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE job_id = $1")
            .bind(job_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }
}
