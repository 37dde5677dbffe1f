//! # jobboard-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services borrow a [`ServiceContext`] and are created per call:
//!
//! ```rust,ignore
//! let jobs = JobService::new(&ctx).list(filter, page).await?;
//! ```

pub mod dto;
pub mod services;

pub use services::{
    AdminService, ApplicationService, AuthService, Authenticated, CompanyService,
    DashboardService, JobService, MaintenanceService, ProfileService, ServiceContext,
    ResumeStorage, ServiceContextBuilder, ServiceError, ServiceResult, StatsService,
};
