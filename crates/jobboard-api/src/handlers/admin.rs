//! Admin handlers
//!
//! Moderation and reporting under /admin. Every endpoint requires the admin
//! role; mutations are written to the activity log with the caller's IP.

use axum::{extract::State, Json};
use jobboard_service::dto::{
    ActivityLogResponse, AdminStatsResponse, AnalyticsResponse, ApplicationResponse,
    CompanyResponse, JobResponse, JobStatusRequest, MaintenanceRequest, MaintenanceResponse,
    MessageResponse, PageResponse, PerformanceResponse, UserResponse,
};
use jobboard_service::AdminService;

use crate::extractors::{AuthUser, ClientIp, IdPath, PageQuery, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /admin/stats
pub async fn stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<AdminStatsResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.stats(&auth.actor()).await?))
}

/// Monthly growth series and distributions
///
/// GET /admin/analytics
pub async fn analytics(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<AnalyticsResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.analytics(&auth.actor()).await?))
}

/// GET /admin/performance
pub async fn performance(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<PerformanceResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.performance(&auth.actor()).await?))
}

/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    PageQuery(page): PageQuery,
) -> ApiResult<Json<PageResponse<UserResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.users(&auth.actor(), page).await?))
}

/// Delete a non-admin account and revoke its sessions
///
/// DELETE /admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ClientIp(ip): ClientIp,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.delete_user(&auth.actor(), id, ip).await?))
}

/// GET /admin/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    auth: AuthUser,
    PageQuery(page): PageQuery,
) -> ApiResult<Json<PageResponse<JobResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.jobs(&auth.actor(), page).await?))
}

/// Approve or reject a posting
///
/// PATCH /admin/jobs/{id}/status
pub async fn update_job_status(
    State(state): State<AppState>,
    auth: AuthUser,
    ClientIp(ip): ClientIp,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<JobStatusRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.set_job_status(&auth.actor(), id, request, ip).await?))
}

/// DELETE /admin/jobs/{id}
pub async fn delete_job(
    State(state): State<AppState>,
    auth: AuthUser,
    ClientIp(ip): ClientIp,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.delete_job(&auth.actor(), id, ip).await?))
}

/// GET /admin/companies
pub async fn list_companies(
    State(state): State<AppState>,
    auth: AuthUser,
    PageQuery(page): PageQuery,
) -> ApiResult<Json<PageResponse<CompanyResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.companies(&auth.actor(), page).await?))
}

/// DELETE /admin/companies/{id}
pub async fn delete_company(
    State(state): State<AppState>,
    auth: AuthUser,
    ClientIp(ip): ClientIp,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.delete_company(&auth.actor(), id, ip).await?))
}

/// GET /admin/applications
pub async fn list_applications(
    State(state): State<AppState>,
    auth: AuthUser,
    PageQuery(page): PageQuery,
) -> ApiResult<Json<PageResponse<ApplicationResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.applications(&auth.actor(), page).await?))
}

/// DELETE /admin/applications/{id}
pub async fn delete_application(
    State(state): State<AppState>,
    auth: AuthUser,
    ClientIp(ip): ClientIp,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.delete_application(&auth.actor(), id, ip).await?))
}

/// Activity log, newest first
///
/// GET /admin/activities
pub async fn list_activities(
    State(state): State<AppState>,
    auth: AuthUser,
    PageQuery(page): PageQuery,
) -> ApiResult<Json<PageResponse<ActivityLogResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.activities(&auth.actor(), page).await?))
}

/// Switch maintenance mode on or off
///
/// POST /admin/maintenance
pub async fn set_maintenance(
    State(state): State<AppState>,
    auth: AuthUser,
    ClientIp(ip): ClientIp,
    ValidatedJson(request): ValidatedJson<MaintenanceRequest>,
) -> ApiResult<Json<MaintenanceResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.set_maintenance(&auth.actor(), request, ip).await?))
}
