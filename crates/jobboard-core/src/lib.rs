//! # jobboard-core
//!
//! Domain layer containing entities, value objects, the access policy,
//! workflow rules, reporting calendar math, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod policy;
pub mod reporting;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ActivityLog, Application, Company, CompanyChanges, Job, JobChanges, JobFilter,
    NewActivityLog, NewApplication, NewCompany, NewJob, NewUser, ProfileUpdate, User,
};
pub use error::DomainError;
pub use events::AdminEvent;
pub use policy::{authorize, Action, Actor, ApplicationScope, Decision, DenyReason, Target};
pub use reporting::{day_bounds, trailing_months, MonthWindow, Tracked};
pub use traits::{
    ActivityLogRepository, ApplicationRepository, CompanyRepository, JobRepository,
    ReportingRepository, RepoResult, SettingRepository, UserRepository,
};
pub use value_objects::{
    ApplicationStatus, Capabilities, JobStatus, MaintenanceMode, Page, PageRequest, Role,
    TransitionPolicy, MAINTENANCE_SETTING_KEY,
};
