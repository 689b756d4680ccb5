/// Analytics API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use pulse_core::types::AnalyticsResponse;

/// GET /api/analytics
pub async fn get_analytics(State(app_state): State<AppState>) -> Result<Json<AnalyticsResponse>> {
    Ok(Json(AnalyticsResponse {
        analytics_data: app_state.store.analytics_series().await?,
    }))
}
