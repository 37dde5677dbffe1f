//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    ApplyRequest, CompanyRequest, JobListQuery, JobRequest, JobStatusRequest, LoginRequest,
    MaintenanceRequest, ProfileForm, RegisterRequest, ResumeUpload, UpdateApplicationRequest,
    UpdateCompanyRequest, UpdateJobRequest,
};

pub use responses::{
    ActivityLogResponse, AdminStatsResponse, AnalyticsResponse, ApplicationResponse,
    AuthResponse, CacheMetrics, CategoryCount, CompanyResponse, DashboardResponse,
    DatabaseMetrics, HealthChecks, HealthResponse, JobResponse, LabelValue, LandingCounts,
    LandingStatsResponse, MaintenanceResponse, MessageResponse, NamedValue, PageResponse,
    PerformanceResponse, ProfileResponse, ReadinessResponse, StatusCount, UserResponse,
    UserSummary,
};
