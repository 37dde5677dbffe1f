//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use jobboard_core::entities::{NewUser, User};
use jobboard_core::error::DomainError;
use jobboard_core::traits::{RepoResult, UserRepository};
use jobboard_core::value_objects::{Page, PageRequest};

use super::error::{map_db_error, map_rows, map_unique_violation, user_not_found};
use crate::models::UserModel;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, role, phone, title, bio, portfolio_url, github_url,
                   linkedin_url, skills, department, education, experience, resume_path,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, role, phone, title, bio, portfolio_url, github_url,
                   linkedin_url, skills, department, education, experience, resume_path,
                   created_at, updated_at
            FROM users
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
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, role, phone, title, bio, portfolio_url, github_url,
                   linkedin_url, skills, department, education, experience, resume_path,
                   created_at, updated_at
            FROM users
            WHERE LOWER(email) = LOWER($1)
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str, except_id: Option<i64>) -> RepoResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE LOWER(email) = LOWER($1)
                  AND ($2::BIGINT IS NULL OR id <> $2)
            )
            ",
        )
        .bind(email)
        .bind(except_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, user), fields(email = %user.email, role = %user.role))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, role, phone, title, bio, portfolio_url, github_url,
                      linkedin_url, skills, department, education, experience, resume_path,
                      created_at, updated_at
            ",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        User::try_from(model)
    }

    #[instrument(skip(self, user), fields(user_id = user.id))]
    async fn update_profile(&self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET name = $2, email = $3, phone = $4, title = $5, bio = $6,
                portfolio_url = $7, github_url = $8, linkedin_url = $9, skills = $10,
                department = $11, education = $12, experience = $13, resume_path = $14,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.title)
        .bind(&user.bio)
        .bind(&user.portfolio_url)
        .bind(&user.github_url)
        .bind(&user.linkedin_url)
        .bind(&user.skills)
        .bind(&user.department)
        .bind(&user.education)
        .bind(&user.experience)
        .bind(&user.resume_path)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Applications by the user, and applications to jobs the user posted
        sqlx::query(
            r"
            DELETE FROM applications
            WHERE user_id = $1
               OR job_id IN (
                   SELECT j.id FROM jobs j
                   JOIN companies c ON c.id = j.company_id
                   WHERE c.user_id = $1
               )
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM jobs
            WHERE company_id IN (SELECT id FROM companies WHERE user_id = $1)
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("DELETE FROM companies WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        let result: Option<String> =
            sqlx::query_scalar("SELECT password_hash FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> RepoResult<Page<User>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, role, phone, title, bio, portfolio_url, github_url,
                   linkedin_url, skills, department, education, experience, resume_path,
                   created_at, updated_at
            FROM users
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(map_rows(rows)?, total, page))
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: i64) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, role, phone, title, bio, portfolio_url, github_url,
                   linkedin_url, skills, department, education, experience, resume_path,
                   created_at, updated_at
            FROM users
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}
