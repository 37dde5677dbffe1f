//! Authentication handlers
//!
//! Endpoints for registration, login, and logout.

use axum::{extract::State, Json};
use jobboard_service::dto::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};
use jobboard_service::AuthService;

use crate::extractors::{AuthUser, ClientIp, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new account
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request, ip).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request, ip).await?;
    Ok(Json(response))
}

/// Revoke the token used for this request
///
/// POST /logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    service.logout(auth.session_id()).await?;
    Ok(Json(MessageResponse::new("Logged out")))
}
