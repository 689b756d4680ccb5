//! Common test utilities and fixtures
#![allow(dead_code)]

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use pulse_core::Backend;
use pulse_server::{config::ServerConfig, create_router, services::AuthService, state::AppState};
use pulse_storage::{SampleStore, SqliteStore};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Create a seeded SQLite store in a temporary directory
pub async fn create_seeded_sqlite_store() -> Result<(SqliteStore, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_url = format!("sqlite://{}", temp_dir.path().join("pulse.db").display());

    let pool = pulse_storage::create_pool(&db_url).await?;
    pulse_storage::run_migrations(&pool).await?;

    let store = SqliteStore::new(pool);
    store.seed(false).await?;
    Ok((store, temp_dir))
}

/// Router over `store` with demo auth and everything optional switched off
pub fn demo_app(store: impl Backend + 'static) -> Router {
    app_with(AppState::new(Arc::new(store), Arc::new(AuthService::demo())))
}

/// Router over the full sample catalog
pub fn sample_app() -> Router {
    demo_app(SampleStore::new())
}

pub fn app_with(state: AppState) -> Router {
    create_router(state, &ServerConfig::default().server)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_bearer(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request and decode the JSON body (Null when empty or not JSON)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, json)
}

/// Log in and return the issued token
pub async fn login_token(app: &Router, email: &str, password: &str) -> String {
    let (status, _, body) = send(
        app,
        post_json(
            "/api/auth/login",
            &serde_json::json!({ "email": email, "password": password }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

/// Test user credentials
pub mod fixtures {
    use pulse_core::{AuthUser, StoredCredentials, UserId};

    pub const TEST_EMAIL: &str = "ops@example.com";
    pub const TEST_PASSWORD: &str = "TestPassword123!";
    pub const JWT_SECRET: &str = "test-secret-key";

    /// Stored login for jwt-mode tests; low bcrypt cost keeps tests fast
    pub fn test_credentials() -> StoredCredentials {
        StoredCredentials {
            user: AuthUser {
                id: UserId::new("user-1"),
                email: TEST_EMAIL.to_string(),
                name: "Ops Person".to_string(),
                role: "admin".to_string(),
            },
            password_hash: bcrypt::hash(TEST_PASSWORD, 4).unwrap(),
        }
    }
}
