/// Server services
pub mod auth;
pub mod rate_limiter;

pub use auth::AuthService;
pub use rate_limiter::{InMemoryRateLimiter, RateDecision, RateLimiter};
