/// Customers API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use pulse_core::types::{Customer, CustomerId};

/// GET /api/customers
pub async fn list_customers(State(app_state): State<AppState>) -> Result<Json<Vec<Customer>>> {
    Ok(Json(app_state.store.list_customers().await?))
}

/// GET /api/customers/:id
pub async fn get_customer(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Customer>> {
    let customer = app_state
        .store
        .get_customer(&CustomerId::new(id))
        .await?
        .ok_or_else(|| ServerError::NotFound("Customer not found".to_string()))?;
    Ok(Json(customer))
}
