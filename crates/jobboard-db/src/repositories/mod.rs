//! PostgreSQL repository implementations

mod activity_log;
mod application;
mod company;
pub(crate) mod error;
mod job;
mod reporting;
mod setting;
mod user;

pub use activity_log::PgActivityLogRepository;
pub use application::PgApplicationRepository;
pub use company::PgCompanyRepository;
pub use job::PgJobRepository;
pub use reporting::PgReportingRepository;
pub use setting::PgSettingRepository;
pub use user::PgUserRepository;
