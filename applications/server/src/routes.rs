/// Router assembly
use crate::{api, config::ServerSettings, middleware, state::AppState};
use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router
///
/// Data routes pass through the optional stages in order: service identity,
/// rate limiting, user identity. `/health` and `/api/auth/*` never do.
pub fn create_router(app_state: AppState, settings: &ServerSettings) -> Router {
    let data_routes = Router::new()
        .route("/customers", get(api::customers::list_customers))
        .route("/customers/:id", get(api::customers::get_customer))
        .route("/team", get(api::team::list_team_members))
        .route("/reports", get(api::reports::list_reports))
        .route("/dashboard", get(api::dashboard::get_dashboard))
        .route("/analytics", get(api::analytics::get_analytics))
        .route("/billing/plans", get(api::billing::list_plans))
        .route("/billing/transactions", get(api::billing::list_transactions));

    // Layers added last run first
    let data_routes = if app_state.protect_api {
        data_routes.route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            middleware::require_user,
        ))
    } else {
        data_routes
    };
    let data_routes = if app_state.rate_limiter.is_some() {
        data_routes.route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            middleware::rate_limit,
        ))
    } else {
        data_routes
    };
    let data_routes = if app_state.auth_service.requires_service_token() {
        data_routes.route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            middleware::require_service,
        ))
    } else {
        data_routes
    };

    let auth_routes = Router::new()
        .route("/auth/login", post(api::auth::login))
        .route("/auth/logout", post(api::auth::logout))
        .route("/auth/me", get(api::auth::me));

    let api_routes = Router::new()
        .merge(auth_routes)
        .merge(data_routes)
        .fallback(api::not_found);

    let router = Router::new()
        .route("/health", get(api::health::health))
        .nest("/api", api_routes);

    // Static web UI (SPA with fallback to index.html)
    let router = match &settings.web_dir {
        Some(web_dir) => {
            tracing::info!(web_dir = %web_dir.display(), "Serving web UI");
            let index = ServeFile::new(web_dir.join("index.html"));
            router.fallback_service(ServeDir::new(web_dir).fallback(index))
        }
        None => router.fallback(api::not_found),
    };

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(cors_layer(&settings.cors_origins))
        .with_state(app_state)
}

/// CORS policy from the configured origins; `"*"` allows any origin
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static(middleware::auth::SERVICE_TOKEN_HEADER),
        ])
}
