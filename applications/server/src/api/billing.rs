/// Billing API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use pulse_core::types::{BillingPlan, Transaction};

/// GET /api/billing/plans
pub async fn list_plans(State(app_state): State<AppState>) -> Result<Json<Vec<BillingPlan>>> {
    Ok(Json(app_state.store.list_billing_plans().await?))
}

/// GET /api/billing/transactions
pub async fn list_transactions(State(app_state): State<AppState>) -> Result<Json<Vec<Transaction>>> {
    Ok(Json(app_state.store.list_transactions().await?))
}
