/// Request middleware for the data routes
pub mod auth;
pub mod rate_limit;

pub use auth::{bearer_token, require_service, require_user};
pub use rate_limit::rate_limit;
