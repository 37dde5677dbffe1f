//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. IDs are assigned by the store on insert.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    ActivityLog, Application, Company, Job, JobFilter, NewActivityLog, NewApplication,
    NewCompany, NewJob, NewUser, User,
};
use crate::error::DomainError;
use crate::policy::ApplicationScope;
use crate::reporting::Tracked;
use crate::value_objects::{ApplicationStatus, JobStatus, Page, PageRequest, Role};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find several users at once (order not guaranteed)
    async fn find_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<User>>;

    /// Find user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if an email is taken, optionally ignoring one account
    async fn email_exists(&self, email: &str, except_id: Option<i64>) -> RepoResult<bool>;

    /// Insert a new user
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Persist profile fields of an existing user
    async fn update_profile(&self, user: &User) -> RepoResult<()>;

    /// Delete a user together with owned companies, jobs, and applications
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// All users, newest first
    async fn list(&self, page: PageRequest) -> RepoResult<Page<User>>;

    /// Most recently registered users
    async fn recent(&self, limit: i64) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Company Repository
// ============================================================================

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Company>>;

    async fn find_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<Company>>;

    /// All companies, newest first
    async fn list(&self, page: PageRequest) -> RepoResult<Page<Company>>;

    /// Companies owned by one user, newest first
    async fn list_by_owner(&self, owner_id: i64, page: PageRequest) -> RepoResult<Page<Company>>;

    async fn create(&self, company: &NewCompany) -> RepoResult<Company>;

    async fn update(&self, company: &Company) -> RepoResult<()>;

    /// Delete a company, its jobs, and their applications
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Number of jobs per company for the given companies
    async fn job_counts(&self, company_ids: &[i64]) -> RepoResult<HashMap<i64, i64>>;
}

// ============================================================================
// Job Repository
// ============================================================================

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Job>>;

    async fn find_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<Job>>;

    /// Filtered listing, newest first
    async fn search(&self, filter: &JobFilter, page: PageRequest) -> RepoResult<Page<Job>>;

    /// All jobs of one company, newest first
    async fn list_by_company(&self, company_id: i64) -> RepoResult<Vec<Job>>;

    async fn create(&self, job: &NewJob) -> RepoResult<Job>;

    /// Persist editable fields; status is not touched
    async fn update(&self, job: &Job) -> RepoResult<()>;

    async fn update_status(&self, id: i64, status: JobStatus) -> RepoResult<()>;

    /// Delete a job and its applications
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Most recently posted jobs
    async fn recent(&self, limit: i64) -> RepoResult<Vec<Job>>;
}

// ============================================================================
// Application Repository
// ============================================================================

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Application>>;

    /// Check whether a user already applied to a job
    async fn exists_for(&self, user_id: i64, job_id: i64) -> RepoResult<bool>;

    /// Insert an application; a duplicate (user, job) pair is `AlreadyApplied`
    async fn create(&self, application: &NewApplication) -> RepoResult<Application>;

    async fn update_status(&self, id: i64, status: ApplicationStatus) -> RepoResult<()>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Applications visible in a scope, newest first
    async fn list(
        &self,
        scope: ApplicationScope,
        page: PageRequest,
    ) -> RepoResult<Page<Application>>;

    /// Latest applications visible in a scope
    async fn recent(&self, scope: ApplicationScope, limit: i64) -> RepoResult<Vec<Application>>;

    /// Count applications in a scope, optionally restricted to one status
    async fn count(
        &self,
        scope: ApplicationScope,
        status: Option<ApplicationStatus>,
    ) -> RepoResult<i64>;

    async fn count_for_job(&self, job_id: i64) -> RepoResult<i64>;
}

// ============================================================================
// Setting Repository
// ============================================================================

#[async_trait]
pub trait SettingRepository: Send + Sync {
    /// Read a setting; `None` when the row does not exist
    async fn get(&self, key: &str) -> RepoResult<Option<String>>;

    /// Insert or overwrite a setting
    async fn put(&self, key: &str, value: &str) -> RepoResult<()>;
}

// ============================================================================
// Activity Log Repository
// ============================================================================

#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    async fn append(&self, entry: &NewActivityLog) -> RepoResult<ActivityLog>;

    /// Newest first
    async fn list(&self, page: PageRequest) -> RepoResult<Page<ActivityLog>>;
}

// ============================================================================
// Reporting Repository
// ============================================================================

/// Read-only counting queries behind the statistics endpoints
#[async_trait]
pub trait ReportingRepository: Send + Sync {
    /// Count users, optionally of one role
    async fn count_users(&self, role: Option<Role>) -> RepoResult<i64>;

    /// Count jobs, optionally of one status
    async fn count_jobs(&self, status: Option<JobStatus>) -> RepoResult<i64>;

    async fn count_companies(&self) -> RepoResult<i64>;

    /// Count records of a type created in `[start, end)`
    async fn count_created_between(
        &self,
        tracked: Tracked,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepoResult<i64>;

    /// Application count per stored status, most frequent first
    async fn application_status_distribution(&self) -> RepoResult<Vec<(String, i64)>>;

    /// Most frequent non-null job categories
    async fn top_categories(&self, limit: i64) -> RepoResult<Vec<(String, i64)>>;

    /// Jobs across all companies owned by a user
    async fn count_jobs_owned_by(&self, owner_id: i64) -> RepoResult<i64>;

    async fn count_companies_owned_by(&self, owner_id: i64) -> RepoResult<i64>;
}
