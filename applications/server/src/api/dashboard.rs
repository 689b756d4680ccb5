/// Dashboard API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use pulse_core::types::DashboardSummary;

/// GET /api/dashboard
///
/// KPIs, activities, and the analytics series are fetched independently
/// and returned side by side.
pub async fn get_dashboard(State(app_state): State<AppState>) -> Result<Json<DashboardSummary>> {
    Ok(Json(app_state.store.dashboard_summary().await?))
}
