/// Service and user identity middleware
use crate::{error::ServerError, state::AppState};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

/// Header carrying the service-to-service token
pub const SERVICE_TOKEN_HEADER: &str = "x-service-token";

/// Bearer token from the Authorization header, if well formed
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Service token from `X-Service-Token`, if present
pub fn service_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SERVICE_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|t| !t.is_empty())
}

/// Reject requests without a valid service token
pub async fn require_service(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let token = service_token(request.headers())
        .ok_or_else(|| ServerError::Unauthorized("Missing service token".to_string()))?;

    state.auth_service.verify_service_token(token).map_err(|e| {
        tracing::warn!("Service token verification failed: {}", e);
        ServerError::Unauthorized("Invalid service token".to_string())
    })?;

    Ok(next.run(request).await)
}

/// Reject requests without a valid user token
pub async fn require_user(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        ServerError::Unauthorized("Missing or invalid Authorization header".to_string())
    })?;

    let user = state
        .auth_service
        .authenticate(state.store.as_ref(), token)
        .await
        .map_err(|e| {
            tracing::warn!("Token verification failed: {}", e);
            e
        })?;

    tracing::debug!(user = %user.id, "Authenticated request");
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));
    }
}
