//! Application workflow service
//!
//! Seekers apply and withdraw, the employer owning the job's company moves
//! the application through the hiring states. Listings are scoped by role.

use std::str::FromStr;

use jobboard_core::{
    authorize, Action, Actor, Application, ApplicationScope, ApplicationStatus, Capabilities,
    DomainError, NewApplication, PageRequest, Target, User,
};
use tracing::{info, instrument};

use crate::dto::{
    ApplicationResponse, ApplyRequest, MessageResponse, PageResponse, UpdateApplicationRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::job::JobService;
use super::relations::Relations;
use super::require_capability;

/// Applications per page
pub const APPLICATION_PAGE_SIZE: u32 = 10;

/// Same reply whether the applicant withdrew or the employer removed it
pub const APPLICATION_DELETED_MESSAGE: &str = "Application deleted/withdrawn";

pub struct ApplicationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ApplicationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Applications visible to the caller: all for admins, received for
    /// employers, submitted for seekers
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        actor: &Actor,
        page: u32,
    ) -> ServiceResult<PageResponse<ApplicationResponse>> {
        let mut applications = self
            .ctx
            .application_repo()
            .list(
                ApplicationScope::for_actor(actor),
                PageRequest::new(page, APPLICATION_PAGE_SIZE),
            )
            .await?;
        let views = Relations::new(self.ctx)
            .application_views(std::mem::take(&mut applications.items))
            .await?;
        Ok(PageResponse::from(applications.with_items(views)))
    }

    /// The caller's own applications
    pub async fn list_submitted(
        &self,
        actor: &Actor,
        page: u32,
    ) -> ServiceResult<PageResponse<ApplicationResponse>> {
        require_capability(actor, Capabilities::APPLY)?;
        self.list(actor, page).await
    }

    /// Applications to jobs of the caller's companies
    pub async fn list_received(
        &self,
        actor: &Actor,
        page: u32,
    ) -> ServiceResult<PageResponse<ApplicationResponse>> {
        require_capability(actor, Capabilities::REVIEW_APPLICATIONS)?;
        self.list(actor, page).await
    }

    #[instrument(skip(self))]
    pub async fn show(&self, actor: &Actor, id: i64) -> ServiceResult<ApplicationResponse> {
        let application = self.find(id).await?;
        let company_owner_id = self.company_owner_of(&application).await?;
        authorize(
            actor,
            Action::Read,
            &Target::Application {
                applicant_id: application.user_id,
                company_owner_id,
            },
        )
        .into_result()?;

        Relations::new(self.ctx).application_view(application).await
    }

    /// Apply to a job with the given resume or the one on the profile
    #[instrument(skip(self, applicant, request), fields(user_id = applicant.id, job_id = ?request.job_id))]
    pub async fn apply(
        &self,
        applicant: &User,
        request: ApplyRequest,
    ) -> ServiceResult<ApplicationResponse> {
        let invalid_job = || ServiceError::validation("job_id", "The selected job id is invalid.");
        let job_id = request.job_id.ok_or_else(invalid_job)?;
        let job = self
            .ctx
            .job_repo()
            .find_by_id(job_id)
            .await?
            .ok_or_else(invalid_job)?;
        let company = JobService::new(self.ctx).owning_company(&job).await?;

        let actor = Actor::new(applicant.id, applicant.role);
        authorize(
            &actor,
            Action::Create,
            &Target::Application {
                applicant_id: applicant.id,
                company_owner_id: company.user_id,
            },
        )
        .into_result()?;

        let resume_path = request
            .resume
            .filter(|path| !path.trim().is_empty())
            .or_else(|| applicant.resume_path.clone().filter(|p| !p.is_empty()))
            .ok_or(DomainError::ResumeRequired)?;

        if self
            .ctx
            .application_repo()
            .exists_for(applicant.id, job.id)
            .await?
        {
            return Err(DomainError::AlreadyApplied.into());
        }

        // A concurrent duplicate still surfaces as AlreadyApplied from the store
        let application = self
            .ctx
            .application_repo()
            .create(&NewApplication {
                job_id: job.id,
                user_id: applicant.id,
                resume_path,
            })
            .await?;

        info!(application_id = application.id, "Application submitted");

        Relations::new(self.ctx).application_view(application).await
    }

    /// Move an application to a new workflow state
    #[instrument(skip(self, request), fields(status = ?request.status))]
    pub async fn update_status(
        &self,
        actor: &Actor,
        id: i64,
        request: UpdateApplicationRequest,
    ) -> ServiceResult<ApplicationResponse> {
        let next = ApplicationStatus::from_str(request.status.as_deref().unwrap_or_default())?;

        let mut application = self.find(id).await?;
        let company_owner_id = self.company_owner_of(&application).await?;
        authorize(
            actor,
            Action::Update,
            &Target::Application {
                applicant_id: application.user_id,
                company_owner_id,
            },
        )
        .into_result()?;

        self.ctx
            .transition_policy()
            .check(application.status, next)?;

        if application.status != next {
            self.ctx
                .application_repo()
                .update_status(application.id, next)
                .await?;
            info!(
                application_id = application.id,
                from = %application.status,
                to = %next,
                "Application status changed"
            );
            application.status = next;
            application.updated_at = chrono::Utc::now();
        }

        Relations::new(self.ctx).application_view(application).await
    }

    /// Remove an application; for the applicant this is a withdrawal
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: &Actor, id: i64) -> ServiceResult<MessageResponse> {
        let application = self.find(id).await?;
        let company_owner_id = self.company_owner_of(&application).await?;
        authorize(
            actor,
            Action::Delete,
            &Target::Application {
                applicant_id: application.user_id,
                company_owner_id,
            },
        )
        .into_result()?;

        self.ctx.application_repo().delete(application.id).await?;

        info!(
            application_id = application.id,
            withdrawn = application.is_applicant(actor.id),
            "Application deleted"
        );
        Ok(MessageResponse::new(APPLICATION_DELETED_MESSAGE))
    }

    pub(crate) async fn find(&self, id: i64) -> ServiceResult<Application> {
        Ok(self
            .ctx
            .application_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ApplicationNotFound(id))?)
    }

    /// Owner of the company hosting the application's job
    async fn company_owner_of(&self, application: &Application) -> ServiceResult<i64> {
        let jobs = JobService::new(self.ctx);
        let job = jobs.find(application.job_id).await?;
        Ok(jobs.owning_company(&job).await?.user_id)
    }
}
