//! Batch loading of related records for response includes
//!
//! Each helper issues one `find_by_ids` query per relation instead of one
//! query per row.

use std::collections::{BTreeSet, HashMap};

use jobboard_core::{Application, Company, Job, User};

use crate::dto::{ApplicationResponse, JobResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

fn distinct(ids: impl IntoIterator<Item = i64>) -> Vec<i64> {
    ids.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

pub(crate) struct Relations<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> Relations<'a> {
    pub(crate) fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) async fn users(
        &self,
        ids: impl IntoIterator<Item = i64>,
    ) -> ServiceResult<HashMap<i64, User>> {
        let ids = distinct(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let users = self.ctx.user_repo().find_by_ids(&ids).await?;
        Ok(users.into_iter().map(|u| (u.id, u)).collect())
    }

    pub(crate) async fn companies(
        &self,
        ids: impl IntoIterator<Item = i64>,
    ) -> ServiceResult<HashMap<i64, Company>> {
        let ids = distinct(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let companies = self.ctx.company_repo().find_by_ids(&ids).await?;
        Ok(companies.into_iter().map(|c| (c.id, c)).collect())
    }

    pub(crate) async fn jobs(
        &self,
        ids: impl IntoIterator<Item = i64>,
    ) -> ServiceResult<HashMap<i64, Job>> {
        let ids = distinct(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let jobs = self.ctx.job_repo().find_by_ids(&ids).await?;
        Ok(jobs.into_iter().map(|j| (j.id, j)).collect())
    }

    /// Jobs with their company attached
    pub(crate) async fn job_views(&self, jobs: Vec<Job>) -> ServiceResult<Vec<JobResponse>> {
        let companies = self.companies(jobs.iter().map(|j| j.company_id)).await?;
        Ok(jobs
            .into_iter()
            .map(|job| {
                let company = companies.get(&job.company_id);
                JobResponse::from(job).with_company(company)
            })
            .collect())
    }

    /// Applications with job (and its company) and applicant attached
    pub(crate) async fn application_views(
        &self,
        applications: Vec<Application>,
    ) -> ServiceResult<Vec<ApplicationResponse>> {
        let jobs = self.jobs(applications.iter().map(|a| a.job_id)).await?;
        let companies = self.companies(jobs.values().map(|j| j.company_id)).await?;
        let applicants = self.users(applications.iter().map(|a| a.user_id)).await?;

        Ok(applications
            .into_iter()
            .map(|application| {
                let job = jobs.get(&application.job_id).map(|job| {
                    JobResponse::from(job).with_company(companies.get(&job.company_id))
                });
                let applicant = applicants.get(&application.user_id);
                ApplicationResponse::from(application)
                    .with_job(job)
                    .with_applicant(applicant)
            })
            .collect())
    }

    /// A single application with its relations
    pub(crate) async fn application_view(
        &self,
        application: Application,
    ) -> ServiceResult<ApplicationResponse> {
        let mut views = self.application_views(vec![application.clone()]).await?;
        Ok(views
            .pop()
            .unwrap_or_else(|| ApplicationResponse::from(application)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_ids() {
        assert_eq!(distinct([3, 1, 3, 2, 1]), vec![1, 2, 3]);
        assert!(distinct([]).is_empty());
    }
}
