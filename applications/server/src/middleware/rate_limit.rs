/// Per-client request rate limiting
use super::auth::bearer_token;
use crate::{
    error::ServerError,
    services::{AuthService, RateDecision},
    state::AppState,
};
use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

/// Identity requests are counted against
///
/// A bearer token counts only once its signature verifies; anything a client
/// can mint freely falls back to the peer address, then to one shared
/// anonymous bucket when no address is known.
pub fn client_key(auth: &AuthService, request: &Request) -> String {
    if let Some(subject) = bearer_token(request.headers()).and_then(|t| auth.verified_subject(t)) {
        return format!("user:{subject}");
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| format!("ip:{}", addr.ip()))
        .unwrap_or_else(|| "anonymous".to_string())
}

pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let Some(limiter) = &state.rate_limiter else {
        return Ok(next.run(request).await);
    };

    let key = client_key(&state.auth_service, &request);
    match limiter.hit(&key).await {
        RateDecision::Allowed { .. } => Ok(next.run(request).await),
        RateDecision::Limited { retry_after } => {
            tracing::warn!(path = %request.uri().path(), key = %key, "Rate limit exceeded");
            Err(ServerError::RateLimited {
                retry_after_secs: retry_after.as_secs_f64().ceil() as u64,
            })
        }
    }
}
