//! Company service

use jobboard_core::{
    authorize, Action, Actor, Capabilities, Company, CompanyChanges, DomainError, NewCompany,
    PageRequest, Target,
};
use tracing::{info, instrument};

use crate::dto::{
    CompanyRequest, CompanyResponse, MessageResponse, PageResponse, UpdateCompanyRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::relations::Relations;
use super::require_capability;

/// Companies per page
pub const COMPANY_PAGE_SIZE: u32 = 10;

pub struct CompanyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CompanyService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Public listing with owner summaries
    #[instrument(skip(self))]
    pub async fn list(&self, page: u32) -> ServiceResult<PageResponse<CompanyResponse>> {
        let mut companies = self
            .ctx
            .company_repo()
            .list(PageRequest::new(page, COMPANY_PAGE_SIZE))
            .await?;
        let views = self.with_owners(std::mem::take(&mut companies.items)).await?;
        Ok(PageResponse::from(companies.with_items(views)))
    }

    /// Companies owned by the caller
    #[instrument(skip(self))]
    pub async fn list_owned(
        &self,
        actor: &Actor,
        page: u32,
    ) -> ServiceResult<PageResponse<CompanyResponse>> {
        require_capability(actor, Capabilities::MANAGE_COMPANIES)?;
        let companies = self
            .ctx
            .company_repo()
            .list_by_owner(actor.id, PageRequest::new(page, COMPANY_PAGE_SIZE))
            .await?;
        Ok(PageResponse::from(companies.map(CompanyResponse::from)))
    }

    /// One company with its owner and jobs
    #[instrument(skip(self))]
    pub async fn show(&self, id: i64) -> ServiceResult<CompanyResponse> {
        let company = self.find(id).await?;
        let owner = self.ctx.user_repo().find_by_id(company.user_id).await?;
        let jobs = self.ctx.job_repo().list_by_company(company.id).await?;

        Ok(CompanyResponse::from(company)
            .with_owner(owner.as_ref())
            .with_jobs(jobs))
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CompanyRequest,
    ) -> ServiceResult<CompanyResponse> {
        authorize(actor, Action::Create, &Target::Company { owner_id: actor.id }).into_result()?;

        let company = self
            .ctx
            .company_repo()
            .create(&NewCompany {
                user_id: actor.id,
                name: request.name.unwrap_or_default(),
                description: request.description,
                website: request.website,
                logo: request.logo,
            })
            .await?;

        info!(company_id = company.id, owner_id = actor.id, "Company created");
        Ok(CompanyResponse::from(company))
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        id: i64,
        request: UpdateCompanyRequest,
    ) -> ServiceResult<CompanyResponse> {
        let mut company = self.find(id).await?;
        authorize(actor, Action::Update, &Target::Company { owner_id: company.user_id })
            .into_result()?;

        company.apply_changes(CompanyChanges {
            name: request.name,
            description: request.description,
            website: request.website,
            logo: request.logo,
        });
        self.ctx.company_repo().update(&company).await?;

        info!(company_id = company.id, "Company updated");
        Ok(CompanyResponse::from(company))
    }

    /// Delete a company together with its jobs and their applications
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: &Actor, id: i64) -> ServiceResult<MessageResponse> {
        let company = self.find(id).await?;
        authorize(actor, Action::Delete, &Target::Company { owner_id: company.user_id })
            .into_result()?;

        self.ctx.company_repo().delete(company.id).await?;

        info!(company_id = company.id, "Company deleted");
        Ok(MessageResponse::new("Company deleted"))
    }

    pub(crate) async fn find(&self, id: i64) -> ServiceResult<Company> {
        Ok(self
            .ctx
            .company_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CompanyNotFound(id))?)
    }

    pub(crate) async fn with_owners(
        &self,
        companies: Vec<Company>,
    ) -> ServiceResult<Vec<CompanyResponse>> {
        let owners = Relations::new(self.ctx)
            .users(companies.iter().map(|c| c.user_id))
            .await?;
        Ok(companies
            .into_iter()
            .map(|company| {
                let owner = owners.get(&company.user_id);
                CompanyResponse::from(company).with_owner(owner)
            })
            .collect())
    }
}
