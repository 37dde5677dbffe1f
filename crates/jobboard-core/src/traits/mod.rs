//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ActivityLogRepository, ApplicationRepository, CompanyRepository, JobRepository,
    ReportingRepository, RepoResult, SettingRepository, UserRepository,
};
