//! Landing page aggregates

use axum::{extract::State, Json};
use jobboard_service::dto::LandingStatsResponse;
use jobboard_service::StatsService;

use crate::response::ApiResult;
use crate::state::AppState;

/// GET /stats
pub async fn landing_stats(State(state): State<AppState>) -> ApiResult<Json<LandingStatsResponse>> {
    let service = StatsService::new(state.service_context());
    Ok(Json(service.landing().await?))
}
