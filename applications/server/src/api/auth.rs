/// Authentication API routes
use crate::{
    config::AuthMode,
    error::{Result, ServerError},
    middleware::bearer_token,
    state::AppState,
};
use axum::{extract::State, http::HeaderMap, Json};
use pulse_core::AuthUser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub token: String,
    pub user: AuthUser,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: AuthUser,
}

/// POST /api/auth/login
///
/// A missing or unparseable body is treated the same as missing fields.
pub async fn login(
    State(app_state): State<AppState>,
    body: Option<Json<LoginRequest>>,
) -> Result<Json<LoginResponse>> {
    let Json(req) = body.unwrap_or_default();
    let (email, password) = match (req.email.as_deref(), req.password.as_deref()) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => {
            return Err(ServerError::BadRequest(
                "Email and password are required".to_string(),
            ))
        }
    };

    let auth = &app_state.auth_service;
    let (token, user) = auth.login(app_state.store.as_ref(), email, password).await?;
    tracing::info!(email = %user.email, "User logged in");

    let message = match auth.mode() {
        AuthMode::Demo => "Login successful (demo mode)",
        AuthMode::Jwt => "Login successful",
    };

    Ok(Json(LoginResponse {
        success: true,
        message,
        token,
        user,
    }))
}

/// POST /api/auth/logout
///
/// Tokens are stateless; the client discards its copy.
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse {
        success: true,
        message: "Logout successful",
    })
}

/// GET /api/auth/me
pub async fn me(State(app_state): State<AppState>, headers: HeaderMap) -> Result<Json<MeResponse>> {
    let token = bearer_token(&headers).ok_or_else(|| {
        ServerError::Unauthorized("Missing or invalid Authorization header".to_string())
    })?;

    let user = app_state
        .auth_service
        .authenticate(app_state.store.as_ref(), token)
        .await?;

    Ok(Json(MeResponse { user }))
}
