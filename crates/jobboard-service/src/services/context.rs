//! Service context - dependency container for services
//!
//! Holds all repositories, the session store, and the settings services
//! need at request time.

use std::sync::Arc;
use std::time::Instant;

use jobboard_cache::{SessionStore, SharedRedisPool};
use jobboard_common::auth::{JwtService, PasswordService};
use jobboard_common::StorageConfig;
use jobboard_core::traits::{
    ActivityLogRepository, ApplicationRepository, CompanyRepository, JobRepository,
    ReportingRepository, SettingRepository, UserRepository,
};
use jobboard_core::value_objects::TransitionPolicy;
use jobboard_db::{
    PgActivityLogRepository, PgApplicationRepository, PgCompanyRepository, PgJobRepository,
    PgPool, PgReportingRepository, PgSettingRepository, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Pools
    pool: PgPool,
    redis_pool: SharedRedisPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    company_repo: Arc<dyn CompanyRepository>,
    job_repo: Arc<dyn JobRepository>,
    application_repo: Arc<dyn ApplicationRepository>,
    setting_repo: Arc<dyn SettingRepository>,
    activity_repo: Arc<dyn ActivityLogRepository>,
    reporting_repo: Arc<dyn ReportingRepository>,

    // Cache stores
    session_store: SessionStore,

    // Services and settings
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
    transition_policy: TransitionPolicy,
    storage: StorageConfig,
    started_at: Instant,
}

impl ServiceContext {
    /// Start a builder
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Pools ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn company_repo(&self) -> &dyn CompanyRepository {
        self.company_repo.as_ref()
    }

    pub fn job_repo(&self) -> &dyn JobRepository {
        self.job_repo.as_ref()
    }

    pub fn application_repo(&self) -> &dyn ApplicationRepository {
        self.application_repo.as_ref()
    }

    pub fn setting_repo(&self) -> &dyn SettingRepository {
        self.setting_repo.as_ref()
    }

    pub fn activity_repo(&self) -> &dyn ActivityLogRepository {
        self.activity_repo.as_ref()
    }

    pub fn reporting_repo(&self) -> &dyn ReportingRepository {
        self.reporting_repo.as_ref()
    }

    // === Cache Stores ===

    pub fn session_store(&self) -> &SessionStore {
        &self.session_store
    }

    // === Services ===

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// How application status changes are checked
    pub fn transition_policy(&self) -> TransitionPolicy {
        self.transition_policy
    }

    /// Where uploaded files go
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    /// When this context was built (process start)
    pub fn started_at(&self) -> Instant {
        self.started_at
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"SharedRedisPool")
            .field("repositories", &"...")
            .field("transition_policy", &self.transition_policy)
            .field("storage", &self.storage)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// Repositories default to the PostgreSQL implementations over `pool`;
/// any of them can be swapped before `build`.
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    company_repo: Option<Arc<dyn CompanyRepository>>,
    job_repo: Option<Arc<dyn JobRepository>>,
    application_repo: Option<Arc<dyn ApplicationRepository>>,
    setting_repo: Option<Arc<dyn SettingRepository>>,
    activity_repo: Option<Arc<dyn ActivityLogRepository>>,
    reporting_repo: Option<Arc<dyn ReportingRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    transition_policy: TransitionPolicy,
    storage: Option<StorageConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            redis_pool: None,
            user_repo: None,
            company_repo: None,
            job_repo: None,
            application_repo: None,
            setting_repo: None,
            activity_repo: None,
            reporting_repo: None,
            jwt_service: None,
            transition_policy: TransitionPolicy::default(),
            storage: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn company_repo(mut self, repo: Arc<dyn CompanyRepository>) -> Self {
        self.company_repo = Some(repo);
        self
    }

    pub fn job_repo(mut self, repo: Arc<dyn JobRepository>) -> Self {
        self.job_repo = Some(repo);
        self
    }

    pub fn application_repo(mut self, repo: Arc<dyn ApplicationRepository>) -> Self {
        self.application_repo = Some(repo);
        self
    }

    pub fn setting_repo(mut self, repo: Arc<dyn SettingRepository>) -> Self {
        self.setting_repo = Some(repo);
        self
    }

    pub fn activity_repo(mut self, repo: Arc<dyn ActivityLogRepository>) -> Self {
        self.activity_repo = Some(repo);
        self
    }

    pub fn reporting_repo(mut self, repo: Arc<dyn ReportingRepository>) -> Self {
        self.reporting_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn transition_policy(mut self, policy: TransitionPolicy) -> Self {
        self.transition_policy = policy;
        self
    }

    pub fn storage(mut self, storage: StorageConfig) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if a required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self
            .pool
            .ok_or_else(|| ServiceError::internal("pool is required"))?;
        let redis_pool = self
            .redis_pool
            .ok_or_else(|| ServiceError::internal("redis_pool is required"))?;
        let jwt_service = self
            .jwt_service
            .ok_or_else(|| ServiceError::internal("jwt_service is required"))?;
        let storage = self
            .storage
            .ok_or_else(|| ServiceError::internal("storage is required"))?;

        // Sessions live exactly as long as the tokens that reference them
        let session_ttl = u64::try_from(jwt_service.access_token_expiry()).unwrap_or(0);
        let session_store = SessionStore::with_ttl((*redis_pool).clone(), session_ttl);

        Ok(ServiceContext {
            user_repo: self
                .user_repo
                .unwrap_or_else(|| Arc::new(PgUserRepository::new(pool.clone()))),
            company_repo: self
                .company_repo
                .unwrap_or_else(|| Arc::new(PgCompanyRepository::new(pool.clone()))),
            job_repo: self
                .job_repo
                .unwrap_or_else(|| Arc::new(PgJobRepository::new(pool.clone()))),
            application_repo: self
                .application_repo
                .unwrap_or_else(|| Arc::new(PgApplicationRepository::new(pool.clone()))),
            setting_repo: self
                .setting_repo
                .unwrap_or_else(|| Arc::new(PgSettingRepository::new(pool.clone()))),
            activity_repo: self
                .activity_repo
                .unwrap_or_else(|| Arc::new(PgActivityLogRepository::new(pool.clone()))),
            reporting_repo: self
                .reporting_repo
                .unwrap_or_else(|| Arc::new(PgReportingRepository::new(pool.clone()))),
            pool,
            redis_pool,
            session_store,
            jwt_service,
            password_service: PasswordService::new(),
            transition_policy: self.transition_policy,
            storage,
            started_at: Instant::now(),
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
