//! Pulse Server Library
//!
//! Read-only reporting API for the Pulse business dashboard: customers,
//! team, reports, dashboard summary, analytics, and billing, plus demo or
//! signed-token authentication.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{AuthMode, ServerConfig, StorageBackend};
pub use error::{Result, ServerError};
pub use routes::create_router;
pub use services::{AuthService, InMemoryRateLimiter, RateLimiter};
pub use state::AppState;
