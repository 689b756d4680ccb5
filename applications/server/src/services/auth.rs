/// Authentication service - demo tokens, JWTs, service tokens, and password handling
use crate::config::{AuthMode, AuthSettings, MAX_TOKEN_TTL_HOURS};
use crate::error::{Result, ServerError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use pulse_core::{AuthUser, CredentialStore, UserId};
use serde::{Deserialize, Serialize};

pub const ISSUER: &str = "pulse-server";
pub const AUDIENCE: &str = "pulse-dashboard";

/// Identity handed out by demo-mode login
pub const DEMO_USER_ID: &str = "demo-user-123";
pub const DEMO_USER_NAME: &str = "John Doe";
pub const DEMO_USER_ROLE: &str = "admin";

/// Demo tokens live for seven days regardless of configuration
const DEMO_TOKEN_DAYS: i64 = 7;

/// Signed user token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub email: String,
    pub name: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

/// Service-to-service token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceClaims {
    pub service: String,
    pub iat: i64,
    pub exp: i64,
}

/// Unsigned demo token payload; `exp` is epoch milliseconds and optional
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DemoPayload {
    email: String,
    user_id: String,
    name: String,
    role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
}

#[derive(Debug, Clone)]
struct ServiceIdentity {
    secret: String,
    name: String,
}

#[derive(Debug, Clone)]
pub struct AuthService {
    mode: AuthMode,
    secret: String,
    token_expiration: Duration,
    service: Option<ServiceIdentity>,
}

impl AuthService {
    /// Lifetimes above `MAX_TOKEN_TTL_HOURS` are clamped
    pub fn new(mode: AuthMode, secret: String, token_expiration_hours: u64) -> Self {
        let hours = token_expiration_hours.min(MAX_TOKEN_TTL_HOURS);
        Self {
            mode,
            secret,
            token_expiration: Duration::hours(hours as i64),
            service: None,
        }
    }

    /// Demo-mode service with no service identity
    pub fn demo() -> Self {
        Self::new(AuthMode::Demo, String::new(), 24 * 7)
    }

    pub fn from_settings(settings: &AuthSettings) -> Self {
        let service = settings.service_secret.clone().map(|secret| ServiceIdentity {
            secret,
            name: settings.service_name.clone(),
        });
        Self {
            service,
            ..Self::new(
                settings.mode,
                settings.jwt_secret.clone(),
                settings.token_ttl_hours,
            )
        }
    }

    /// Require `X-Service-Token`s signed with `secret` naming `name`
    #[must_use]
    pub fn with_service_identity(mut self, secret: impl Into<String>, name: impl Into<String>) -> Self {
        self.service = Some(ServiceIdentity {
            secret: secret.into(),
            name: name.into(),
        });
        self
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn requires_service_token(&self) -> bool {
        self.service.is_some()
    }

    // ========================================================================
    // Passwords
    // ========================================================================

    /// Hash a password using bcrypt
    pub fn hash_password(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(ServerError::from)
    }

    /// Verify a password against a hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(ServerError::from)
    }

    // ========================================================================
    // Login and token resolution
    // ========================================================================

    /// Exchange credentials for a token
    ///
    /// Demo mode accepts anything non-empty. Jwt mode checks the password
    /// against the stored bcrypt hash.
    pub async fn login<S>(&self, store: &S, email: &str, password: &str) -> Result<(String, AuthUser)>
    where
        S: CredentialStore + ?Sized,
    {
        match self.mode {
            AuthMode::Demo => self.create_demo_token(email),
            AuthMode::Jwt => {
                let invalid = || ServerError::Unauthorized("Invalid email or password".to_string());
                let credentials = store
                    .find_credentials_by_email(email)
                    .await?
                    .ok_or_else(invalid)?;

                if !self.verify_password(password, &credentials.password_hash)? {
                    tracing::warn!(email = %email, "Password mismatch");
                    return Err(invalid());
                }

                let token = self.create_token(&credentials.user)?;
                Ok((token, credentials.user))
            }
        }
    }

    /// Resolve a bearer token to the user it was issued to
    pub async fn authenticate<S>(&self, store: &S, token: &str) -> Result<AuthUser>
    where
        S: CredentialStore + ?Sized,
    {
        match self.mode {
            AuthMode::Demo => self.decode_demo_token(token),
            AuthMode::Jwt => {
                let claims = self.verify_token(token)?;
                store
                    .get_user(&UserId::new(claims.sub))
                    .await?
                    .ok_or_else(|| ServerError::Unauthorized("User not found".to_string()))
            }
        }
    }

    /// Subject of a token whose signature checks out, without a store lookup
    ///
    /// Demo tokens are unsigned, so they never identify anyone.
    pub fn verified_subject(&self, token: &str) -> Option<String> {
        match self.mode {
            AuthMode::Demo => None,
            AuthMode::Jwt => self.verify_token(token).ok().map(|claims| claims.sub),
        }
    }

    // ========================================================================
    // Demo tokens
    // ========================================================================

    /// Issue an unsigned demo token for the fixed demo identity
    pub fn create_demo_token(&self, email: &str) -> Result<(String, AuthUser)> {
        let user = AuthUser {
            id: UserId::new(DEMO_USER_ID),
            email: email.to_string(),
            name: DEMO_USER_NAME.to_string(),
            role: DEMO_USER_ROLE.to_string(),
        };
        let exp = (Utc::now() + Duration::days(DEMO_TOKEN_DAYS)).timestamp_millis();
        Ok((encode_demo_token(&user, exp)?, user))
    }

    /// Decode a demo token; no signature is involved
    pub fn decode_demo_token(&self, token: &str) -> Result<AuthUser> {
        let invalid = || ServerError::Unauthorized("Invalid token format".to_string());
        let bytes = STANDARD.decode(token.trim()).map_err(|_| invalid())?;
        let payload: DemoPayload = serde_json::from_slice(&bytes).map_err(|_| invalid())?;

        if payload
            .exp
            .is_some_and(|exp| exp < Utc::now().timestamp_millis())
        {
            return Err(ServerError::Unauthorized("Token expired".to_string()));
        }

        Ok(AuthUser {
            id: UserId::new(payload.user_id),
            email: payload.email,
            name: payload.name,
            role: payload.role,
        })
    }

    // ========================================================================
    // Signed user tokens
    // ========================================================================

    /// Create a signed token for `user`
    pub fn create_token(&self, user: &AuthUser) -> Result<String> {
        let now = Utc::now();
        let exp = now + self.token_expiration;

        let claims = Claims {
            sub: user.id.as_str().to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: ISSUER.to_string(),
            aud: AUDIENCE.to_string(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(ServerError::from)
    }

    /// Verify signature, issuer, audience, and expiry
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        validation.set_audience(&[AUDIENCE]);

        decode::<Claims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(expired_or_invalid)
    }

    // ========================================================================
    // Service tokens
    // ========================================================================

    /// Mint a service token for the configured service identity
    pub fn create_service_token(&self, ttl: Duration) -> Result<String> {
        let service = self
            .service
            .as_ref()
            .ok_or_else(|| ServerError::Config("No service secret configured".to_string()))?;

        let now = Utc::now();
        let claims = ServiceClaims {
            service: service.name.clone(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(service.secret.as_bytes());
        encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(ServerError::from)
    }

    /// Check an `X-Service-Token` against the configured identity
    ///
    /// Passes trivially when no service secret is configured.
    pub fn verify_service_token(&self, token: &str) -> Result<()> {
        let Some(service) = &self.service else {
            return Ok(());
        };

        let decoding_key = DecodingKey::from_secret(service.secret.as_bytes());
        let claims = decode::<ServiceClaims>(token, &decoding_key, &Validation::new(Algorithm::HS256))
            .map_err(expired_or_invalid)?
            .claims;

        if claims.service != service.name {
            tracing::warn!(service = %claims.service, "Unexpected service identity");
            return Err(ServerError::Unauthorized("Invalid service token".to_string()));
        }
        Ok(())
    }
}

fn encode_demo_token(user: &AuthUser, exp: i64) -> Result<String> {
    let payload = DemoPayload {
        email: user.email.clone(),
        user_id: user.id.as_str().to_string(),
        name: user.name.clone(),
        role: user.role.clone(),
        exp: Some(exp),
    };
    let json = serde_json::to_vec(&payload).map_err(|e| ServerError::Internal(e.to_string()))?;
    Ok(STANDARD.encode(json))
}

fn expired_or_invalid(err: jsonwebtoken::errors::Error) -> ServerError {
    match err.kind() {
        ErrorKind::ExpiredSignature => ServerError::Unauthorized("Token expired".to_string()),
        _ => ServerError::Jwt(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_service() -> AuthService {
        AuthService::new(AuthMode::Jwt, "secret".to_string(), 1)
    }

    fn user() -> AuthUser {
        AuthUser {
            id: UserId::new("user-123"),
            email: "ops@example.com".to_string(),
            name: "Ops".to_string(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn test_token_creation_and_verification() {
        let auth = jwt_service();
        let token = auth.create_token(&user()).unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.iss, ISSUER);
        assert_eq!(claims.aud, AUDIENCE);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_oversized_lifetime_is_clamped() {
        let auth = AuthService::new(AuthMode::Jwt, "secret".to_string(), u64::MAX);
        let claims = auth.verify_token(&auth.create_token(&user()).unwrap()).unwrap();
        assert_eq!(claims.exp - claims.iat, MAX_TOKEN_TTL_HOURS as i64 * 3600);
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let other = AuthService::new(AuthMode::Jwt, "other".to_string(), 1);
        let token = other.create_token(&user()).unwrap();
        assert!(matches!(
            jwt_service().verify_token(&token),
            Err(ServerError::Jwt(_))
        ));
    }

    #[test]
    fn test_demo_token_round_trip() {
        let auth = AuthService::demo();
        let (token, issued) = auth.create_demo_token("a@b.com").unwrap();

        assert_eq!(issued.id.as_str(), DEMO_USER_ID);
        assert_eq!(auth.decode_demo_token(&token).unwrap(), issued);
    }

    #[test]
    fn test_expired_demo_token() {
        let token = encode_demo_token(&user(), Utc::now().timestamp_millis() - 1).unwrap();
        match AuthService::demo().decode_demo_token(&token) {
            Err(ServerError::Unauthorized(msg)) => assert_eq!(msg, "Token expired"),
            other => panic!("expected expiry, got {other:?}"),
        }
    }

    #[test]
    fn test_demo_token_without_expiry_is_accepted() {
        let token = STANDARD
            .encode(r#"{"email":"a@b.com","userId":"u-1","name":"Ann","role":"viewer"}"#);
        let user = AuthService::demo().decode_demo_token(&token).unwrap();
        assert_eq!(user.id.as_str(), "u-1");
        assert_eq!(user.role, "viewer");
    }

    #[test]
    fn test_garbage_demo_token() {
        for token in ["%%%", "bm90IGpzb24="] {
            match AuthService::demo().decode_demo_token(token) {
                Err(ServerError::Unauthorized(msg)) => assert_eq!(msg, "Invalid token format"),
                other => panic!("expected format error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_service_token_name_must_match() {
        let minted = AuthService::demo().with_service_identity("svc", "reporting-cron");
        let token = minted.create_service_token(Duration::minutes(5)).unwrap();

        let expecting = AuthService::demo().with_service_identity("svc", "dashboard-frontend");
        assert!(expecting.verify_service_token(&token).is_err());
        assert!(minted.verify_service_token(&token).is_ok());
    }

    #[test]
    fn test_no_service_identity_passes() {
        assert!(AuthService::demo().verify_service_token("anything").is_ok());
        assert!(AuthService::demo()
            .create_service_token(Duration::minutes(1))
            .is_err());
    }
}
