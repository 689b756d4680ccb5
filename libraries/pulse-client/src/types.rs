//! Request and response types that only exist at the HTTP boundary.

use chrono::{DateTime, Utc};
use pulse_core::types::AuthUser;
use serde::{Deserialize, Serialize};

/// Configuration for connecting to a Pulse server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "http://localhost:3001")
    pub url: String,
    /// Bearer token (if logged in)
    pub token: Option<String>,
    /// Service identity token sent as `X-Service-Token`
    pub service_token: Option<String>,
}

impl ClientConfig {
    /// Create a new config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
            service_token: None,
        }
    }

    /// Attach an existing bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Attach a service identity token.
    #[must_use]
    pub fn with_service_token(mut self, token: impl Into<String>) -> Self {
        self.service_token = Some(token.into());
        self
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response from a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
    pub user: AuthUser,
}

/// Response from the logout endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// Response from `GET /api/auth/me`.
#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub user: AuthUser,
}

// =============================================================================
// Service Types
// =============================================================================

/// Liveness probe response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub version: Option<String>,
}

/// JSON error body returned by the server.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
