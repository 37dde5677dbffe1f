//! Company handlers

use axum::{extract::State, Json};
use jobboard_service::dto::{
    CompanyRequest, CompanyResponse, MessageResponse, PageResponse, UpdateCompanyRequest,
};
use jobboard_service::CompanyService;

use crate::extractors::{AuthUser, IdPath, PageQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /companies
pub async fn list_companies(
    State(state): State<AppState>,
    PageQuery(page): PageQuery,
) -> ApiResult<Json<PageResponse<CompanyResponse>>> {
    let service = CompanyService::new(state.service_context());
    Ok(Json(service.list(page).await?))
}

/// Companies owned by the calling employer
///
/// GET /employer/companies
pub async fn list_own_companies(
    State(state): State<AppState>,
    auth: AuthUser,
    PageQuery(page): PageQuery,
) -> ApiResult<Json<PageResponse<CompanyResponse>>> {
    let service = CompanyService::new(state.service_context());
    Ok(Json(service.list_owned(&auth.actor(), page).await?))
}

/// GET /companies/{id}
pub async fn get_company(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<CompanyResponse>> {
    let service = CompanyService::new(state.service_context());
    Ok(Json(service.show(id).await?))
}

/// POST /companies
pub async fn create_company(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CompanyRequest>,
) -> ApiResult<Created<Json<CompanyResponse>>> {
    let service = CompanyService::new(state.service_context());
    let response = service.create(&auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// PUT /companies/{id}
pub async fn update_company(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateCompanyRequest>,
) -> ApiResult<Json<CompanyResponse>> {
    let service = CompanyService::new(state.service_context());
    Ok(Json(service.update(&auth.actor(), id, request).await?))
}

/// Delete a company with its jobs and their applications
///
/// DELETE /companies/{id}
pub async fn delete_company(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = CompanyService::new(state.service_context());
    Ok(Json(service.delete(&auth.actor(), id).await?))
}
