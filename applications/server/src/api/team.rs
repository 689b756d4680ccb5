/// Team API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use pulse_core::types::TeamMember;

/// GET /api/team
pub async fn list_team_members(State(app_state): State<AppState>) -> Result<Json<Vec<TeamMember>>> {
    Ok(Json(app_state.store.list_team_members().await?))
}
