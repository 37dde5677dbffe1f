//! Response DTOs for API endpoints
//!
//! Relations are optional and omitted from the JSON when not loaded.

use chrono::{DateTime, NaiveDate, Utc};
use jobboard_core::{ApplicationStatus, JobStatus, MaintenanceMode, Page, Role};
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

/// Full user profile; never carries the password hash
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub portfolio_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub skills: Option<String>,
    pub department: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub resume_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Short user reference embedded in other records
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

// ============================================================================
// Company / Job / Application Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CompanyResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<JobResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobResponse {
    pub id: i64,
    pub company_id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: Option<String>,
    #[serde(rename = "type")]
    pub job_type: String,
    pub category: Option<String>,
    pub requirements: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Box<CompanyResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationResponse {
    pub id: i64,
    pub job_id: i64,
    pub user_id: i64,
    pub resume_path: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<JobResponse>,
    /// The applicant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityLogResponse {
    pub id: i64,
    pub user_id: Option<i64>,
    pub action: String,
    pub target_model: Option<String>,
    pub target_id: Option<i64>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}

// ============================================================================
// Envelopes
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceResponse {
    pub message: &'static str,
    pub status: bool,
}

/// Paginated listing
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub per_page: u32,
    pub total: i64,
    pub last_page: u32,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        let last_page = page.last_page();
        Self {
            data: page.items,
            current_page: page.page,
            per_page: page.per_page,
            total: page.total,
            last_page,
        }
    }
}

// ============================================================================
// Reporting
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LandingStatsResponse {
    pub stats: LandingCounts,
    pub categories: Vec<CategoryCount>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingCounts {
    pub active_jobs: i64,
    pub companies: i64,
    pub candidates: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelValue {
    pub label: &'static str,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub role: Role,
    pub stats: Vec<LabelValue>,
    pub recent_activity: Vec<ApplicationResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminStatsResponse {
    pub total_users: i64,
    pub total_jobs: i64,
    pub total_applications: i64,
    pub total_companies: i64,
    pub pending_jobs: i64,
    pub pending_applications: i64,
    pub new_users_today: i64,
    pub seekers: i64,
    pub employers: i64,
    pub recent_users: Vec<UserResponse>,
    pub recent_jobs: Vec<JobResponse>,
    pub maintenance_mode: MaintenanceMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedValue {
    pub name: &'static str,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsResponse {
    pub labels: Vec<&'static str>,
    pub user_growth: Vec<i64>,
    pub job_growth: Vec<i64>,
    pub company_growth: Vec<i64>,
    pub role_distribution: Vec<NamedValue>,
    pub app_status_distribution: Vec<StatusCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatabaseMetrics {
    pub driver: &'static str,
    pub pool_size: u32,
    pub idle_connections: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CacheMetrics {
    pub healthy: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceResponse {
    pub app_version: &'static str,
    pub rust_target_os: &'static str,
    pub uptime_seconds: u64,
    pub database: DatabaseMetrics,
    pub cache: CacheMetrics,
    pub server_time: DateTime<Utc>,
}

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: bool,
    pub cache: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: HealthChecks,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl ReadinessResponse {
    pub fn new(database: bool, cache: bool) -> Self {
        Self {
            status: if database && cache { "ready" } else { "degraded" },
            checks: HealthChecks { database, cache },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.checks.database && self.checks.cache
    }
}
