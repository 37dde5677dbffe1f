//! Application handlers
//!
//! Seekers apply and withdraw; employers review applications to their jobs.
//! Listings are scoped by the caller's role.

use axum::{extract::State, Json};
use jobboard_service::dto::{
    ApplicationResponse, ApplyRequest, MessageResponse, PageResponse, UpdateApplicationRequest,
};
use jobboard_service::ApplicationService;

use crate::extractors::{AuthUser, IdPath, PageQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /applications
pub async fn list_applications(
    State(state): State<AppState>,
    auth: AuthUser,
    PageQuery(page): PageQuery,
) -> ApiResult<Json<PageResponse<ApplicationResponse>>> {
    let service = ApplicationService::new(state.service_context());
    Ok(Json(service.list(&auth.actor(), page).await?))
}

/// Applications the calling seeker submitted
///
/// GET /my-applications
pub async fn list_my_applications(
    State(state): State<AppState>,
    auth: AuthUser,
    PageQuery(page): PageQuery,
) -> ApiResult<Json<PageResponse<ApplicationResponse>>> {
    let service = ApplicationService::new(state.service_context());
    Ok(Json(service.list_submitted(&auth.actor(), page).await?))
}

/// Applications to the calling employer's jobs
///
/// GET /employer/applications
pub async fn list_received_applications(
    State(state): State<AppState>,
    auth: AuthUser,
    PageQuery(page): PageQuery,
) -> ApiResult<Json<PageResponse<ApplicationResponse>>> {
    let service = ApplicationService::new(state.service_context());
    Ok(Json(service.list_received(&auth.actor(), page).await?))
}

/// GET /applications/{id}
pub async fn get_application(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<ApplicationResponse>> {
    let service = ApplicationService::new(state.service_context());
    Ok(Json(service.show(&auth.actor(), id).await?))
}

/// Apply to a job with the profile resume or the one given
///
/// POST /applications
pub async fn apply(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ApplyRequest>,
) -> ApiResult<Created<Json<ApplicationResponse>>> {
    let service = ApplicationService::new(state.service_context());
    let response = service.apply(auth.user(), request).await?;
    Ok(Created(Json(response)))
}

/// Move an application through the review workflow
///
/// PUT /applications/{id}
pub async fn update_application(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateApplicationRequest>,
) -> ApiResult<Json<ApplicationResponse>> {
    let service = ApplicationService::new(state.service_context());
    Ok(Json(service.update_status(&auth.actor(), id, request).await?))
}

/// Withdraw (applicant) or delete (owning employer) an application
///
/// DELETE /applications/{id}
pub async fn delete_application(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = ApplicationService::new(state.service_context());
    Ok(Json(service.delete(&auth.actor(), id).await?))
}
