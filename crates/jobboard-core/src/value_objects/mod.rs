//! Value objects - immutable types that represent domain concepts

mod application_status;
mod capabilities;
mod job_status;
mod maintenance;
mod paging;
mod role;

pub use application_status::{ApplicationStatus, TransitionPolicy};
pub use capabilities::Capabilities;
pub use job_status::JobStatus;
pub use maintenance::{MaintenanceMode, MAINTENANCE_SETTING_KEY};
pub use paging::{Page, PageRequest};
pub use role::Role;
