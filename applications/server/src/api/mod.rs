/// API route modules
pub mod analytics;
pub mod auth;
pub mod billing;
pub mod customers;
pub mod dashboard;
pub mod health;
pub mod reports;
pub mod team;

use crate::error::ServerError;

/// Fallback for unmatched paths
pub async fn not_found() -> ServerError {
    ServerError::NotFound("Not found".to_string())
}
