/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "pulse.toml";

/// Upper bound on signed-token lifetime, one year
pub const MAX_TOKEN_TTL_HOURS: u64 = 24 * 365;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,

    #[serde(default = "default_rate_limit")]
    pub rate_limit: RateLimitSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed browser origins; `"*"` allows any
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Built front-end bundle served for non-API paths
    #[serde(default)]
    pub web_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Fixed in-memory sample catalog
    Sample,
    /// SQLite database at `storage.database_url`
    Sqlite,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,

    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Load the sample catalog into an empty database on startup
    #[serde(default = "default_true")]
    pub seed_if_empty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Any non-empty credentials log in; tokens are unsigned
    Demo,
    /// Credentials checked against stored users; tokens are signed JWTs
    Jwt,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default = "default_auth_mode")]
    pub mode: AuthMode,

    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: u64,

    /// Require a valid bearer token on data routes
    #[serde(default)]
    pub protect_api: bool,

    /// When set, data routes require an `X-Service-Token` signed with it
    #[serde(default)]
    pub service_secret: Option<String>,

    #[serde(default = "default_service_name")]
    pub service_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitSettings {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `path` when given (it must exist), otherwise `pulse.toml` if
    /// present. Environment variables prefixed `PULSE_` override the file,
    /// with `__` separating sections: `PULSE_AUTH__JWT_SECRET`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("PULSE")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.cors_origins")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config("server.port must not be 0".to_string()));
        }

        if self.auth.mode == AuthMode::Jwt && self.auth.jwt_secret.is_empty() {
            return Err(ServerError::Config(
                "JWT secret is required in jwt mode (set PULSE_AUTH__JWT_SECRET)".to_string(),
            ));
        }

        if self.auth.token_ttl_hours == 0 || self.auth.token_ttl_hours > MAX_TOKEN_TTL_HOURS {
            return Err(ServerError::Config(format!(
                "auth.token_ttl_hours must be between 1 and {MAX_TOKEN_TTL_HOURS}"
            )));
        }

        if matches!(self.auth.service_secret.as_deref(), Some("")) {
            return Err(ServerError::Config(
                "auth.service_secret must not be empty when set".to_string(),
            ));
        }

        if self.rate_limit.max_requests == 0 || self.rate_limit.window_secs == 0 {
            return Err(ServerError::Config(
                "rate_limit.max_requests and rate_limit.window_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        cors_origins: default_cors_origins(),
        web_dir: None,
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        backend: default_backend(),
        database_url: default_database_url(),
        seed_if_empty: default_true(),
    }
}

fn default_backend() -> StorageBackend {
    StorageBackend::Sample
}

fn default_database_url() -> String {
    "sqlite://./data/pulse.db".to_string()
}

fn default_true() -> bool {
    true
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        mode: default_auth_mode(),
        jwt_secret: String::new(),
        token_ttl_hours: default_token_ttl_hours(),
        protect_api: false,
        service_secret: None,
        service_name: default_service_name(),
    }
}

fn default_auth_mode() -> AuthMode {
    AuthMode::Demo
}

fn default_token_ttl_hours() -> u64 {
    24 * 7
}

fn default_service_name() -> String {
    "dashboard-frontend".to_string()
}

fn default_rate_limit() -> RateLimitSettings {
    RateLimitSettings {
        enabled: false,
        max_requests: default_max_requests(),
        window_secs: default_window_secs(),
    }
}

fn default_max_requests() -> u32 {
    100
}

fn default_window_secs() -> u64 {
    60
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
            rate_limit: default_rate_limit(),
        }
    }
}
