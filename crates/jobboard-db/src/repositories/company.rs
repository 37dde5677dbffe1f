//! PostgreSQL implementation of CompanyRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use jobboard_core::entities::{Company, NewCompany};
use jobboard_core::traits::{CompanyRepository, RepoResult};
use jobboard_core::value_objects::{Page, PageRequest};

use super::error::{company_not_found, map_db_error};
use crate::models::CompanyModel;

/// PostgreSQL implementation of CompanyRepository
#[derive(Clone)]
pub struct PgCompanyRepository {
    pool: PgPool,
}

impl PgCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Company>> {
        let result = sqlx::query_as::<_, CompanyModel>(
            r"
            SELECT id, user_id, name, description, website, logo, created_at, updated_at
            FROM companies
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Company::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<Company>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, CompanyModel>(
            r"
            SELECT id, user_id, name, description, website, logo, created_at, updated_at
            FROM companies
            WHERE id = ANY($1)
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Company::from).collect())
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> RepoResult<Page<Company>> {
        self.list_by_owner_filter(None, page).await
    }

    #[instrument(skip(self))]
    async fn list_by_owner(&self, owner_id: i64, page: PageRequest) -> RepoResult<Page<Company>> {
        self.list_by_owner_filter(Some(owner_id), page).await
    }

    #[instrument(skip(self, company), fields(owner_id = company.user_id))]
    async fn create(&self, company: &NewCompany) -> RepoResult<Company> {
        let model = sqlx::query_as::<_, CompanyModel>(
            r"
            INSERT INTO companies (user_id, name, description, website, logo)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, name, description, website, logo, created_at, updated_at
            ",
        )
        .bind(company.user_id)
        .bind(&company.name)
        .bind(&company.description)
        .bind(&company.website)
        .bind(&company.logo)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Company::from(model))
    }

    #[instrument(skip(self, company), fields(company_id = company.id))]
    async fn update(&self, company: &Company) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE companies
            SET name = $2, description = $3, website = $4, logo = $5, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(company.id)
        .bind(&company.name)
        .bind(&company.description)
        .bind(&company.website)
        .bind(&company.logo)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(company_not_found(company.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM applications
            WHERE job_id IN (SELECT id FROM jobs WHERE company_id = $1)
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("DELETE FROM jobs WHERE company_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(company_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self, company_ids), fields(count = company_ids.len()))]
    async fn job_counts(&self, company_ids: &[i64]) -> RepoResult<HashMap<i64, i64>> {
        if company_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i64, i64)> = sqlx::query_as(
            r"
            SELECT company_id, COUNT(*)
            FROM jobs
            WHERE company_id = ANY($1)
            GROUP BY company_id
            ",
        )
        .bind(company_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().collect())
    }
}

impl PgCompanyRepository {
    async fn list_by_owner_filter(
        &self,
        owner_id: Option<i64>,
        page: PageRequest,
    ) -> RepoResult<Page<Company>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM companies WHERE ($1::BIGINT IS NULL OR user_id = $1)",
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, CompanyModel>(
            r"
            SELECT id, user_id, name, description, website, logo, created_at, updated_at
            FROM companies
            WHERE ($1::BIGINT IS NULL OR user_id = $1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(owner_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(Company::from).collect(),
            total,
            page,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCompanyRepository>();
    }
}
