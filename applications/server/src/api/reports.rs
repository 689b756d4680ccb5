/// Reports API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use pulse_core::types::Report;

/// GET /api/reports
pub async fn list_reports(State(app_state): State<AppState>) -> Result<Json<Vec<Report>>> {
    Ok(Json(app_state.store.list_reports().await?))
}
