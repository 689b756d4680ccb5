/// Shared application state
use crate::config::ServerConfig;
use crate::services::{AuthService, InMemoryRateLimiter, RateLimiter};
use pulse_core::Backend;
use std::sync::Arc;
use std::time::Duration;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Backend>,
    pub auth_service: Arc<AuthService>,
    pub rate_limiter: Option<Arc<dyn RateLimiter>>,

    /// Data routes require a valid bearer token
    pub protect_api: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn Backend>, auth_service: Arc<AuthService>) -> Self {
        Self {
            store,
            auth_service,
            rate_limiter: None,
            protect_api: false,
        }
    }

    /// Wire auth and rate limiting as configured
    pub fn from_config(store: Arc<dyn Backend>, config: &ServerConfig) -> Self {
        let mut state = Self::new(store, Arc::new(AuthService::from_settings(&config.auth)))
            .with_protected_api(config.auth.protect_api);

        if config.rate_limit.enabled {
            state = state.with_rate_limiter(Arc::new(InMemoryRateLimiter::new(
                config.rate_limit.max_requests,
                Duration::from_secs(config.rate_limit.window_secs),
            )));
        }
        state
    }

    #[must_use]
    pub fn with_rate_limiter(mut self, limiter: Arc<dyn RateLimiter>) -> Self {
        self.rate_limiter = Some(limiter);
        self
    }

    #[must_use]
    pub fn with_protected_api(mut self, protect: bool) -> Self {
        self.protect_api = protect;
        self
    }
}
