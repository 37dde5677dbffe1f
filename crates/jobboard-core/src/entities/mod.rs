//! Domain entities - core business objects

mod activity_log;
mod application;
mod company;
mod job;
mod user;

pub use activity_log::{ActivityLog, NewActivityLog};
pub use application::{Application, NewApplication};
pub use company::{Company, CompanyChanges, NewCompany};
pub use job::{Job, JobChanges, JobFilter, NewJob};
pub use user::{NewUser, ProfileUpdate, User};

/// Overwrite `slot` only when a new value was supplied
pub(crate) fn assign<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
