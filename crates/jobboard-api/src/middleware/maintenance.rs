//! Maintenance gate
//!
//! While maintenance mode is on, only administrators and the auth endpoints
//! get through. Everyone else receives 503 with `maintenance: true`.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use jobboard_core::DomainError;
use jobboard_service::{AuthService, MaintenanceService};
use tracing::debug;

use crate::response::ApiError;
use crate::state::AppState;

pub async fn maintenance_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let ctx = state.service_context();
    let mode = MaintenanceService::new(ctx).current().await?;

    if !mode.is_on() {
        return Ok(next.run(request).await);
    }

    let token = request
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .map(|Authorization(bearer)| bearer.token().to_string());

    // An invalid token is treated as anonymous here; the handler rejects it
    let caller = match token {
        Some(token) => AuthService::new(ctx).resolve(&token).await.ok(),
        None => None,
    };
    let role = caller.as_ref().map(|c| c.user.role);

    if !mode.admits(request.uri().path(), role) {
        debug!(path = %request.uri().path(), ?role, "Request blocked by maintenance mode");
        return Err(DomainError::UnderMaintenance.into());
    }

    if let Some(caller) = caller {
        request.extensions_mut().insert(caller);
    }

    Ok(next.run(request).await)
}
