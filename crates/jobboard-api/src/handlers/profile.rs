//! Profile handlers

use axum::{extract::State, Json};
use jobboard_service::dto::{ProfileResponse, UserResponse};
use jobboard_service::ProfileService;

use crate::extractors::{AuthUser, ProfileMultipart};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /user
pub async fn get_profile(State(state): State<AppState>, auth: AuthUser) -> Json<UserResponse> {
    Json(ProfileService::new(state.service_context()).show(&auth.0))
}

/// Update the caller's profile, optionally replacing the resume
///
/// POST /user (multipart/form-data)
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ProfileMultipart(form): ProfileMultipart,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    Ok(Json(service.update(&auth.0, form).await?))
}
