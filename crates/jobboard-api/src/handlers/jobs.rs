//! Job handlers
//!
//! Public listing plus employer management of postings.

use axum::{
    extract::{Query, State},
    Json,
};
use jobboard_service::dto::{
    JobListQuery, JobRequest, JobResponse, MessageResponse, PageResponse, UpdateJobRequest,
};
use jobboard_service::JobService;

use crate::extractors::{AuthUser, IdPath, PageQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List jobs, newest first, with optional filters
///
/// GET /jobs?search=&location=&type=&category=&page=
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
    PageQuery(page): PageQuery,
) -> ApiResult<Json<PageResponse<JobResponse>>> {
    let service = JobService::new(state.service_context());
    let response = service.list(query, page).await?;
    Ok(Json(response))
}

/// Get a job with its company and application count
///
/// GET /jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<JobResponse>> {
    let service = JobService::new(state.service_context());
    let response = service.show(id).await?;
    Ok(Json(response))
}

/// Post a job for one of the caller's companies
///
/// POST /jobs
pub async fn create_job(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<JobRequest>,
) -> ApiResult<Created<Json<JobResponse>>> {
    let service = JobService::new(state.service_context());
    let response = service.create(&auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// Replace a job's fields
///
/// PUT /jobs/{id}
pub async fn update_job(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateJobRequest>,
) -> ApiResult<Json<JobResponse>> {
    let service = JobService::new(state.service_context());
    let response = service.update(&auth.actor(), id, request).await?;
    Ok(Json(response))
}

/// Delete a job and its applications
///
/// DELETE /jobs/{id}
pub async fn delete_job(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = JobService::new(state.service_context());
    let response = service.delete(&auth.actor(), id).await?;
    Ok(Json(response))
}
