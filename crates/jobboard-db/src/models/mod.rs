//! Database models - rows as SQLx reads them

mod activity_log;
mod application;
mod company;
mod job;
mod stats;
mod user;

pub use activity_log::ActivityLogModel;
pub use application::ApplicationModel;
pub use company::CompanyModel;
pub use job::JobModel;
pub use stats::LabelCountModel;
pub use user::UserModel;
