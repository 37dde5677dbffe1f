//! Admin moderation service
//!
//! Platform-wide reports, listings and deletions. Every successful mutation
//! is followed by an activity log entry.

use std::str::FromStr;

use chrono::Utc;
use jobboard_common::BootstrapConfig;
use jobboard_core::reporting::GROWTH_MONTHS;
use jobboard_core::{
    authorize, day_bounds, trailing_months, Action, Actor, AdminEvent, ApplicationScope,
    ApplicationStatus, DomainError, JobFilter, JobStatus, MaintenanceMode, NewUser, PageRequest,
    Role, Target, Tracked,
};
use tracing::{info, instrument, warn};

use crate::dto::{
    ActivityLogResponse, AdminStatsResponse, AnalyticsResponse, ApplicationResponse,
    CacheMetrics, CompanyResponse, DatabaseMetrics, JobResponse, JobStatusRequest,
    MaintenanceRequest, MaintenanceResponse, MessageResponse, NamedValue, PageResponse,
    PerformanceResponse, StatusCount, UserResponse,
};

use super::application::ApplicationService;
use super::company::CompanyService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::job::JobService;
use super::maintenance::MaintenanceService;
use super::relations::Relations;
use super::require_admin;

/// Rows per page in admin listings
pub const ADMIN_PAGE_SIZE: u32 = 20;

/// Rows per page in the activity log
pub const ACTIVITY_PAGE_SIZE: u32 = 50;

const RECENT_USERS: i64 = 8;
const RECENT_JOBS: i64 = 5;

pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // =========================================================================
    // Reports
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn stats(&self, actor: &Actor) -> ServiceResult<AdminStatsResponse> {
        require_admin(actor)?;
        let reporting = self.ctx.reporting_repo();
        let (today_start, today_end) = day_bounds(Utc::now());

        let recent_users = self
            .ctx
            .user_repo()
            .recent(RECENT_USERS)
            .await?
            .iter()
            .map(UserResponse::from)
            .collect();
        let recent_jobs = self.ctx.job_repo().recent(RECENT_JOBS).await?;

        Ok(AdminStatsResponse {
            total_users: reporting.count_users(None).await?,
            total_jobs: reporting.count_jobs(None).await?,
            total_applications: self
                .ctx
                .application_repo()
                .count(ApplicationScope::All, None)
                .await?,
            total_companies: reporting.count_companies().await?,
            pending_jobs: reporting.count_jobs(Some(JobStatus::Pending)).await?,
            pending_applications: self
                .ctx
                .application_repo()
                .count(ApplicationScope::All, Some(ApplicationStatus::Applied))
                .await?,
            new_users_today: reporting
                .count_created_between(Tracked::Users, today_start, today_end)
                .await?,
            seekers: reporting.count_users(Some(Role::Seeker)).await?,
            employers: reporting.count_users(Some(Role::Employer)).await?,
            recent_users,
            recent_jobs: Relations::new(self.ctx).job_views(recent_jobs).await?,
            maintenance_mode: MaintenanceService::new(self.ctx).current().await?,
        })
    }

    /// Growth over the trailing months plus role and status distributions
    #[instrument(skip(self))]
    pub async fn analytics(&self, actor: &Actor) -> ServiceResult<AnalyticsResponse> {
        require_admin(actor)?;
        let reporting = self.ctx.reporting_repo();
        let windows = trailing_months(Utc::now(), GROWTH_MONTHS);

        let mut user_growth = Vec::with_capacity(windows.len());
        let mut job_growth = Vec::with_capacity(windows.len());
        let mut company_growth = Vec::with_capacity(windows.len());
        for window in &windows {
            user_growth.push(
                reporting
                    .count_created_between(Tracked::Users, window.start, window.end)
                    .await?,
            );
            job_growth.push(
                reporting
                    .count_created_between(Tracked::Jobs, window.start, window.end)
                    .await?,
            );
            company_growth.push(
                reporting
                    .count_created_between(Tracked::Companies, window.start, window.end)
                    .await?,
            );
        }

        let mut role_distribution = Vec::with_capacity(Role::ALL.len());
        for role in Role::ALL {
            role_distribution.push(NamedValue {
                name: role_label(role),
                value: reporting.count_users(Some(role)).await?,
            });
        }

        let app_status_distribution = reporting
            .application_status_distribution()
            .await?
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect();

        Ok(AnalyticsResponse {
            labels: windows.iter().map(|w| w.label).collect(),
            user_growth,
            job_growth,
            company_growth,
            role_distribution,
            app_status_distribution,
        })
    }

    /// Runtime metrics of this process and its pools
    #[instrument(skip(self))]
    pub async fn performance(&self, actor: &Actor) -> ServiceResult<PerformanceResponse> {
        require_admin(actor)?;
        let pool = self.ctx.pool();

        let healthy = match self.ctx.redis_pool().health_check().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Redis health check failed");
                false
            }
        };

        Ok(PerformanceResponse {
            app_version: env!("CARGO_PKG_VERSION"),
            rust_target_os: std::env::consts::OS,
            uptime_seconds: self.ctx.started_at().elapsed().as_secs(),
            database: DatabaseMetrics {
                driver: "postgres",
                pool_size: pool.size(),
                idle_connections: pool.num_idle(),
            },
            cache: CacheMetrics { healthy },
            server_time: Utc::now(),
        })
    }

    // =========================================================================
    // Users
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn users(&self, actor: &Actor, page: u32) -> ServiceResult<PageResponse<UserResponse>> {
        require_admin(actor)?;
        let users = self
            .ctx
            .user_repo()
            .list(PageRequest::new(page, ADMIN_PAGE_SIZE))
            .await?;
        Ok(PageResponse::from(users.map(UserResponse::from)))
    }

    /// Delete a non-admin account with everything it owns and end its sessions
    #[instrument(skip(self, ip_address))]
    pub async fn delete_user(
        &self,
        actor: &Actor,
        id: i64,
        ip_address: Option<String>,
    ) -> ServiceResult<MessageResponse> {
        require_admin(actor)?;
        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))?;
        authorize(actor, Action::Delete, &Target::User { id: user.id, role: user.role })
            .into_result()?;

        self.ctx.user_repo().delete(user.id).await?;
        let revoked = self.ctx.session_store().revoke_all_for_user(user.id).await?;
        info!(user_id = user.id, revoked, "User deleted");

        self.record(
            actor,
            AdminEvent::UserDeleted {
                user_id: user.id,
                email: user.email,
            },
            ip_address,
        )
        .await?;

        Ok(MessageResponse::new("User deleted"))
    }

    // =========================================================================
    // Jobs
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn jobs(&self, actor: &Actor, page: u32) -> ServiceResult<PageResponse<JobResponse>> {
        require_admin(actor)?;
        let mut jobs = self
            .ctx
            .job_repo()
            .search(&JobFilter::default(), PageRequest::new(page, ADMIN_PAGE_SIZE))
            .await?;
        let views = Relations::new(self.ctx)
            .job_views(std::mem::take(&mut jobs.items))
            .await?;
        Ok(PageResponse::from(jobs.with_items(views)))
    }

    /// Moderate a job posting
    #[instrument(skip(self, request, ip_address), fields(status = ?request.status))]
    pub async fn set_job_status(
        &self,
        actor: &Actor,
        id: i64,
        request: JobStatusRequest,
        ip_address: Option<String>,
    ) -> ServiceResult<MessageResponse> {
        require_admin(actor)?;
        let status = JobStatus::from_str(request.status.as_deref().unwrap_or_default())?;
        let job = JobService::new(self.ctx).find(id).await?;

        self.ctx.job_repo().update_status(job.id, status).await?;
        info!(job_id = job.id, status = %status, "Job status changed");

        self.record(actor, AdminEvent::JobStatusChanged { job_id: job.id, status }, ip_address)
            .await?;

        Ok(MessageResponse::new(format!("Job status updated to {status}")))
    }

    #[instrument(skip(self, ip_address))]
    pub async fn delete_job(
        &self,
        actor: &Actor,
        id: i64,
        ip_address: Option<String>,
    ) -> ServiceResult<MessageResponse> {
        require_admin(actor)?;
        let job = JobService::new(self.ctx).find(id).await?;

        self.ctx.job_repo().delete(job.id).await?;
        info!(job_id = job.id, "Job deleted by admin");

        self.record(
            actor,
            AdminEvent::JobDeleted {
                job_id: job.id,
                title: job.title,
            },
            ip_address,
        )
        .await?;

        Ok(MessageResponse::new("Job deleted"))
    }

    // =========================================================================
    // Companies
    // =========================================================================

    /// All companies with owner and job count
    #[instrument(skip(self))]
    pub async fn companies(
        &self,
        actor: &Actor,
        page: u32,
    ) -> ServiceResult<PageResponse<CompanyResponse>> {
        require_admin(actor)?;
        let mut companies = self
            .ctx
            .company_repo()
            .list(PageRequest::new(page, ADMIN_PAGE_SIZE))
            .await?;
        let items = std::mem::take(&mut companies.items);
        let ids: Vec<i64> = items.iter().map(|c| c.id).collect();
        let counts = self.ctx.company_repo().job_counts(&ids).await?;

        let views = CompanyService::new(self.ctx)
            .with_owners(items)
            .await?
            .into_iter()
            .map(|view| {
                let count = counts.get(&view.id).copied().unwrap_or(0);
                view.with_jobs_count(count)
            })
            .collect();
        Ok(PageResponse::from(companies.with_items(views)))
    }

    #[instrument(skip(self, ip_address))]
    pub async fn delete_company(
        &self,
        actor: &Actor,
        id: i64,
        ip_address: Option<String>,
    ) -> ServiceResult<MessageResponse> {
        require_admin(actor)?;
        let company = CompanyService::new(self.ctx).find(id).await?;

        self.ctx.company_repo().delete(company.id).await?;
        info!(company_id = company.id, "Company deleted by admin");

        self.record(
            actor,
            AdminEvent::CompanyDeleted {
                company_id: company.id,
                name: company.name,
            },
            ip_address,
        )
        .await?;

        Ok(MessageResponse::new("Company deleted"))
    }

    // =========================================================================
    // Applications
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn applications(
        &self,
        actor: &Actor,
        page: u32,
    ) -> ServiceResult<PageResponse<ApplicationResponse>> {
        require_admin(actor)?;
        let mut applications = self
            .ctx
            .application_repo()
            .list(ApplicationScope::All, PageRequest::new(page, ADMIN_PAGE_SIZE))
            .await?;
        let views = Relations::new(self.ctx)
            .application_views(std::mem::take(&mut applications.items))
            .await?;
        Ok(PageResponse::from(applications.with_items(views)))
    }

    #[instrument(skip(self, ip_address))]
    pub async fn delete_application(
        &self,
        actor: &Actor,
        id: i64,
        ip_address: Option<String>,
    ) -> ServiceResult<MessageResponse> {
        require_admin(actor)?;
        let application = ApplicationService::new(self.ctx).find(id).await?;

        self.ctx.application_repo().delete(application.id).await?;
        info!(application_id = application.id, "Application deleted by admin");

        self.record(
            actor,
            AdminEvent::ApplicationDeleted {
                application_id: application.id,
            },
            ip_address,
        )
        .await?;

        Ok(MessageResponse::new("Application deleted"))
    }

    // =========================================================================
    // Activity log and settings
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn activities(
        &self,
        actor: &Actor,
        page: u32,
    ) -> ServiceResult<PageResponse<ActivityLogResponse>> {
        require_admin(actor)?;
        let mut logs = self
            .ctx
            .activity_repo()
            .list(PageRequest::new(page, ACTIVITY_PAGE_SIZE))
            .await?;
        let items = std::mem::take(&mut logs.items);
        let users = Relations::new(self.ctx)
            .users(items.iter().filter_map(|log| log.user_id))
            .await?;

        let views = items
            .into_iter()
            .map(|log| {
                let user = log.user_id.and_then(|id| users.get(&id));
                ActivityLogResponse::from(log).with_user(user)
            })
            .collect();
        Ok(PageResponse::from(logs.with_items(views)))
    }

    #[instrument(skip(self, request, ip_address))]
    pub async fn set_maintenance(
        &self,
        actor: &Actor,
        request: MaintenanceRequest,
        ip_address: Option<String>,
    ) -> ServiceResult<MaintenanceResponse> {
        require_admin(actor)?;
        let on = request.status.unwrap_or_default();
        let mode = MaintenanceMode::from_bool(on);

        MaintenanceService::new(self.ctx).set(mode).await?;
        self.record(actor, AdminEvent::MaintenanceToggled { mode }, ip_address)
            .await?;

        Ok(MaintenanceResponse {
            message: "Maintenance mode updated.",
            status: on,
        })
    }

    // =========================================================================
    // Start-up
    // =========================================================================

    /// Create the configured admin account unless the email is already taken
    #[instrument(skip(self, config))]
    pub async fn ensure_admin(&self, config: &BootstrapConfig) -> ServiceResult<()> {
        let Some((email, password)) = config.admin_credentials() else {
            return Ok(());
        };

        if self.ctx.user_repo().email_exists(email, None).await? {
            info!("Admin account already present");
            return Ok(());
        }

        let password_hash = self.ctx.password_service().hash(password).await?;
        let admin = self
            .ctx
            .user_repo()
            .create(&NewUser {
                name: config.admin_name.clone(),
                email: email.to_string(),
                password_hash,
                role: Role::Admin,
            })
            .await?;

        info!(user_id = admin.id, "Admin account created");
        Ok(())
    }

    /// Append the audit entry for a completed mutation
    async fn record(
        &self,
        actor: &Actor,
        event: AdminEvent,
        ip_address: Option<String>,
    ) -> ServiceResult<()> {
        let entry = event.into_log(actor.id, ip_address);
        self.ctx.activity_repo().append(&entry).await?;
        Ok(())
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Seeker => "Seekers",
        Role::Employer => "Employers",
        Role::Admin => "Admins",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels() {
        let labels: Vec<_> = Role::ALL.into_iter().map(role_label).collect();
        assert_eq!(labels, ["Seekers", "Employers", "Admins"]);
    }
}
