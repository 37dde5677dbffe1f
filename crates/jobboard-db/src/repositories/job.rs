//! PostgreSQL implementation of JobRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use jobboard_core::entities::{Job, JobFilter, NewJob};
use jobboard_core::traits::{JobRepository, RepoResult};
use jobboard_core::value_objects::{JobStatus, Page, PageRequest};

use super::error::{contains_pattern, job_not_found, map_db_error, map_rows};
use crate::models::JobModel;

/// PostgreSQL implementation of JobRepository
#[derive(Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Job>> {
        let result = sqlx::query_as::<_, JobModel>(
            r"
            SELECT id, company_id, title, description, location, salary, job_type, category,
                   requirements, deadline, status, created_at, updated_at
            FROM jobs
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Job::try_from).transpose()
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<Job>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, JobModel>(
            r"
            SELECT id, company_id, title, description, location, salary, job_type, category,
                   requirements, deadline, status, created_at, updated_at
            FROM jobs
            WHERE id = ANY($1)
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_rows(rows)
    }

    #[instrument(skip(self))]
    async fn search(&self, filter: &JobFilter, page: PageRequest) -> RepoResult<Page<Job>> {
        let search = filter.search.as_deref().map(contains_pattern);
        let location = filter.location.as_deref().map(contains_pattern);
        let category = filter.category.as_deref().map(contains_pattern);

        let total: i64 = sqlx::query_scalar(
            r"
            SELECT COUNT(*)
            FROM jobs
            WHERE ($1::TEXT IS NULL OR title ILIKE $1)
              AND ($2::TEXT IS NULL OR location ILIKE $2)
              AND ($3::TEXT IS NULL OR job_type = $3)
              AND ($4::TEXT IS NULL OR category ILIKE $4)
            ",
        )
        .bind(&search)
        .bind(&location)
        .bind(&filter.job_type)
        .bind(&category)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, JobModel>(
            r"
            SELECT id, company_id, title, description, location, salary, job_type, category,
                   requirements, deadline, status, created_at, updated_at
            FROM jobs
            WHERE ($1::TEXT IS NULL OR title ILIKE $1)
              AND ($2::TEXT IS NULL OR location ILIKE $2)
              AND ($3::TEXT IS NULL OR job_type = $3)
              AND ($4::TEXT IS NULL OR category ILIKE $4)
            ORDER BY created_at DESC, id DESC
            LIMIT $5 OFFSET $6
            ",
        )
        .bind(&search)
        .bind(&location)
        .bind(&filter.job_type)
        .bind(&category)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(map_rows(rows)?, total, page))
    }

    #[instrument(skip(self))]
    async fn list_by_company(&self, company_id: i64) -> RepoResult<Vec<Job>> {
        let rows = sqlx::query_as::<_, JobModel>(
            r"
            SELECT id, company_id, title, description, location, salary, job_type, category,
                   requirements, deadline, status, created_at, updated_at
            FROM jobs
            WHERE company_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_rows(rows)
    }

    #[instrument(skip(self, job), fields(company_id = job.company_id))]
    async fn create(&self, job: &NewJob) -> RepoResult<Job> {
        let model = sqlx::query_as::<_, JobModel>(
            r"
            INSERT INTO jobs (company_id, title, description, location, salary, job_type,
                              category, requirements, deadline, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, company_id, title, description, location, salary, job_type, category,
                      requirements, deadline, status, created_at, updated_at
            ",
        )
        .bind(job.company_id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.location)
        .bind(&job.salary)
        .bind(&job.job_type)
        .bind(&job.category)
        .bind(&job.requirements)
        .bind(job.deadline)
        .bind(JobStatus::default().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Job::try_from(model)
    }

    #[instrument(skip(self, job), fields(job_id = job.id))]
    async fn update(&self, job: &Job) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE jobs
            SET title = $2, description = $3, location = $4, salary = $5, job_type = $6,
                category = $7, requirements = $8, deadline = $9, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.location)
        .bind(&job.salary)
        .bind(&job.job_type)
        .bind(&job.category)
        .bind(&job.requirements)
        .bind(job.deadline)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(job_not_found(job.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: i64, status: JobStatus) -> RepoResult<()> {
        let result =
            sqlx::query("UPDATE jobs SET status = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(status.as_str())
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(job_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM applications WHERE job_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(job_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: i64) -> RepoResult<Vec<Job>> {
        let rows = sqlx::query_as::<_, JobModel>(
            r"
            SELECT id, company_id, title, description, location, salary, job_type, category,
                   requirements, deadline, status, created_at, updated_at
            FROM jobs
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_rows(rows)
    }
}
