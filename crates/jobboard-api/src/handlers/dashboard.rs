//! Dashboard handler

use axum::{extract::State, Json};
use jobboard_service::dto::DashboardResponse;
use jobboard_service::DashboardService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Role-scoped counters and recent applications
///
/// GET /dashboard-stats
pub async fn dashboard_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DashboardResponse>> {
    let service = DashboardService::new(state.service_context());
    Ok(Json(service.summary(&auth.actor()).await?))
}
