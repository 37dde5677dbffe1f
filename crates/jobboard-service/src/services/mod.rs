//! Business logic services
//!
//! Each service borrows the [`ServiceContext`], checks the caller with the
//! ownership resolver, and talks to the repositories.

pub mod admin;
pub mod application;
pub mod auth;
pub mod company;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod job;
pub mod maintenance;
pub mod profile;
pub mod stats;
pub mod storage;

mod relations;

use jobboard_core::{Actor, Capabilities, DenyReason, DomainError};

// Re-export all services for convenience
pub use admin::AdminService;
pub use application::ApplicationService;
pub use auth::{AuthService, Authenticated};
pub use company::CompanyService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dashboard::DashboardService;
pub use error::{ServiceError, ServiceResult};
pub use job::JobService;
pub use maintenance::MaintenanceService;
pub use profile::ProfileService;
pub use stats::StatsService;
pub use storage::ResumeStorage;

/// Role gate for endpoints reserved to one kind of account
pub(crate) fn require_capability(actor: &Actor, capability: Capabilities) -> ServiceResult<()> {
    if actor.capabilities().has(capability) {
        Ok(())
    } else {
        Err(DomainError::Forbidden(DenyReason::InsufficientRole).into())
    }
}

/// Admin-only gate
pub(crate) fn require_admin(actor: &Actor) -> ServiceResult<()> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(DomainError::Forbidden(DenyReason::AdminOnly).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::Role;

    #[test]
    fn test_capability_gates() {
        let employer = Actor::new(1, Role::Employer);
        let seeker = Actor::new(2, Role::Seeker);
        let admin = Actor::new(3, Role::Admin);

        assert!(require_capability(&employer, Capabilities::MANAGE_COMPANIES).is_ok());
        let err = require_capability(&seeker, Capabilities::MANAGE_COMPANIES).unwrap_err();
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.to_string(), "Unauthorized. Insufficient role.");

        assert!(require_admin(&admin).is_ok());
        assert_eq!(
            require_admin(&employer).unwrap_err().to_string(),
            "Unauthorized. Admin access required."
        );
    }
}
