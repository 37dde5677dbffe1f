//! Job service
//!
//! Employers post and edit jobs for companies they own; every new job waits
//! in `pending` until an admin moderates it.

use jobboard_core::{
    authorize, Action, Actor, Company, DomainError, Job, JobChanges, JobFilter, NewJob,
    PageRequest, Target,
};
use tracing::{info, instrument};

use crate::dto::{
    JobListQuery, JobRequest, JobResponse, MessageResponse, PageResponse, UpdateJobRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::relations::Relations;

/// Jobs per page
pub const JOB_PAGE_SIZE: u32 = 10;

pub struct JobService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> JobService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Filtered public listing, newest first, with companies
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        query: JobListQuery,
        page: u32,
    ) -> ServiceResult<PageResponse<JobResponse>> {
        let filter = JobFilter {
            search: query.search,
            location: query.location,
            job_type: query.job_type,
            category: query.category,
        }
        .normalized();

        let mut jobs = self
            .ctx
            .job_repo()
            .search(&filter, PageRequest::new(page, JOB_PAGE_SIZE))
            .await?;
        let views = Relations::new(self.ctx)
            .job_views(std::mem::take(&mut jobs.items))
            .await?;
        Ok(PageResponse::from(jobs.with_items(views)))
    }

    /// One job with its company and application count
    #[instrument(skip(self))]
    pub async fn show(&self, id: i64) -> ServiceResult<JobResponse> {
        let job = self.find(id).await?;
        let company = self.ctx.company_repo().find_by_id(job.company_id).await?;
        let applications = self.ctx.application_repo().count_for_job(job.id).await?;

        Ok(JobResponse::from(job)
            .with_company(company.as_ref())
            .with_applications_count(applications))
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, actor: &Actor, request: JobRequest) -> ServiceResult<JobResponse> {
        let company = self.referenced_company(request.company_id).await?;
        authorize(
            actor,
            Action::Create,
            &Target::Job {
                company_owner_id: company.user_id,
            },
        )
        .into_result()?;

        let job = self
            .ctx
            .job_repo()
            .create(&NewJob {
                company_id: company.id,
                title: request.title.unwrap_or_default(),
                description: request.description.unwrap_or_default(),
                location: request.location.unwrap_or_default(),
                salary: request.salary,
                job_type: request.job_type.unwrap_or_default(),
                category: request.category,
                requirements: request.requirements,
                deadline: request.deadline,
            })
            .await?;

        info!(job_id = job.id, company_id = company.id, "Job posted");
        Ok(JobResponse::from(job).with_company(Some(&company)))
    }

    /// Edit the submitted fields of a job; status is left to moderation
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        id: i64,
        request: UpdateJobRequest,
    ) -> ServiceResult<JobResponse> {
        let mut job = self.find(id).await?;
        let current = self.owning_company(&job).await?;
        authorize(
            actor,
            Action::Update,
            &Target::Job {
                company_owner_id: current.user_id,
            },
        )
        .into_result()?;

        // Moving a job requires owning the destination too
        let company = match request.company_id {
            Some(company_id) if company_id != current.id => {
                let destination = self.referenced_company(Some(company_id)).await?;
                authorize(
                    actor,
                    Action::Update,
                    &Target::Job {
                        company_owner_id: destination.user_id,
                    },
                )
                .into_result()?;
                destination
            }
            _ => current,
        };

        job.apply_changes(JobChanges {
            company_id: Some(company.id),
            title: request.title,
            description: request.description,
            location: request.location,
            salary: request.salary,
            job_type: request.job_type,
            category: request.category,
            requirements: request.requirements,
            deadline: request.deadline,
        });

        self.ctx.job_repo().update(&job).await?;

        info!(job_id = job.id, "Job updated");
        Ok(JobResponse::from(job).with_company(Some(&company)))
    }

    /// Delete a job and its applications
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: &Actor, id: i64) -> ServiceResult<MessageResponse> {
        let job = self.find(id).await?;
        let company = self.owning_company(&job).await?;
        authorize(
            actor,
            Action::Delete,
            &Target::Job {
                company_owner_id: company.user_id,
            },
        )
        .into_result()?;

        self.ctx.job_repo().delete(job.id).await?;

        info!(job_id = job.id, "Job deleted");
        Ok(MessageResponse::new("Job deleted"))
    }

    pub(crate) async fn find(&self, id: i64) -> ServiceResult<Job> {
        Ok(self
            .ctx
            .job_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::JobNotFound(id))?)
    }

    pub(crate) async fn owning_company(&self, job: &Job) -> ServiceResult<Company> {
        Ok(self
            .ctx
            .company_repo()
            .find_by_id(job.company_id)
            .await?
            .ok_or(DomainError::CompanyNotFound(job.company_id))?)
    }

    /// A company referenced by id in a request body; unknown ids fail validation
    async fn referenced_company(&self, company_id: Option<i64>) -> ServiceResult<Company> {
        let invalid =
            || ServiceError::validation("company_id", "The selected company id is invalid.");
        let id = company_id.ok_or_else(invalid)?;
        self.ctx
            .company_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(invalid)
    }
}
