/// Dashboard login identities
use super::UserId;
use serde::{Deserialize, Serialize};

/// Identity returned by the auth routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// A user together with their bcrypt password hash
#[derive(Debug, Clone)]
pub struct StoredCredentials {
    pub user: AuthUser,
    pub password_hash: String,
}
