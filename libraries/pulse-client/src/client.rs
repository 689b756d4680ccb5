//! Main Pulse reporting client.

use crate::error::{ClientError, Result};
use crate::types::{
    ClientConfig, ErrorBody, HealthResponse, LoginRequest, LoginResponse, LogoutResponse,
    MeResponse,
};
use pulse_core::types::{
    AnalyticsPoint, AnalyticsResponse, AuthUser, BillingPlan, Customer, CustomerId,
    DashboardSummary, Report, TeamMember, Transaction,
};
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};
use url::Url;

/// Fallback when a 429 carries no usable `Retry-After` header
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Client for the Pulse reporting API.
///
/// Every read operation of the service has a typed method here. The bearer
/// token obtained from [`PulseClient::login`] and the configured service
/// token are attached to every request.
///
/// # Example
///
/// ```no_run
/// use pulse_client::{ClientConfig, PulseClient};
///
/// # async fn example() -> pulse_client::Result<()> {
/// let client = PulseClient::new(ClientConfig::new("http://localhost:3001"))?;
///
/// let customers = client.list_customers().await?;
/// println!("{} customers", customers.len());
/// # Ok(())
/// # }
/// ```
pub struct PulseClient {
    http: Client,
    config: Arc<RwLock<ClientConfig>>,
}

impl PulseClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.trim().is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim().trim_end_matches('/').to_string();
        let scheme_ok = Url::parse(&url)
            .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !scheme_ok {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("PulseClient/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(ClientConfig { url, ..config })),
        })
    }

    /// Get the server URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Check if the client holds a bearer token.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.token.is_some()
    }

    /// Set the bearer token directly (e.g., from stored credentials).
    pub async fn set_token(&self, token: impl Into<String>) {
        self.config.write().await.token = Some(token.into());
    }

    /// Get the current bearer token.
    pub async fn token(&self) -> Option<String> {
        self.config.read().await.token.clone()
    }

    // =========================================================================
    // Service
    // =========================================================================

    /// Liveness probe. Never requires authentication.
    pub async fn health(&self) -> Result<HealthResponse> {
        self.get_json(&["health"]).await
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Log in and keep the returned token for subsequent requests.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let request = self
            .request(Method::POST, &["api", "auth", "login"])
            .await?
            .json(&LoginRequest { email, password });
        let response: LoginResponse = Self::parse(Self::send(request).await?).await?;

        self.config.write().await.token = Some(response.token.clone());
        info!(email = %response.user.email, "Logged in");

        Ok(response)
    }

    /// Log out and drop the stored token.
    pub async fn logout(&self) -> Result<LogoutResponse> {
        let request = self.request(Method::POST, &["api", "auth", "logout"]).await?;
        let response: LogoutResponse = Self::parse(Self::send(request).await?).await?;

        self.config.write().await.token = None;
        info!("Logged out");

        Ok(response)
    }

    /// Resolve the identity behind the stored token.
    pub async fn me(&self) -> Result<AuthUser> {
        if !self.is_authenticated().await {
            return Err(ClientError::AuthRequired);
        }
        let response: MeResponse = self.get_json(&["api", "auth", "me"]).await?;
        Ok(response.user)
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    /// All customers, newest first.
    pub async fn list_customers(&self) -> Result<Vec<Customer>> {
        self.get_json(&["api", "customers"]).await
    }

    /// A single customer by exact id.
    ///
    /// Returns [`ClientError::NotFound`] when no customer has that id.
    pub async fn get_customer(&self, id: &CustomerId) -> Result<Customer> {
        self.get_json(&["api", "customers", id.as_str()]).await
    }

    /// All team members, newest first.
    pub async fn list_team_members(&self) -> Result<Vec<TeamMember>> {
        self.get_json(&["api", "team"]).await
    }

    /// All reports, newest first.
    pub async fn list_reports(&self) -> Result<Vec<Report>> {
        self.get_json(&["api", "reports"]).await
    }

    /// KPIs, recent activity, and the analytics series in one call.
    pub async fn dashboard(&self) -> Result<DashboardSummary> {
        self.get_json(&["api", "dashboard"]).await
    }

    /// The full analytics series, ascending by date.
    pub async fn analytics(&self) -> Result<Vec<AnalyticsPoint>> {
        let response: AnalyticsResponse = self.get_json(&["api", "analytics"]).await?;
        Ok(response.analytics_data)
    }

    pub async fn list_billing_plans(&self) -> Result<Vec<BillingPlan>> {
        self.get_json(&["api", "billing", "plans"]).await
    }

    pub async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        self.get_json(&["api", "billing", "transactions"]).await
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    /// Build a request with whatever credentials are configured.
    async fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let config = self.config.read().await;
        let url = endpoint(&config.url, segments)?;
        debug!(method = %method, url = %url, "Sending request");

        let mut request = self.http.request(method, url);
        if let Some(token) = &config.token {
            request = request.bearer_auth(token);
        }
        if let Some(service_token) = &config.service_token {
            request = request.header("X-Service-Token", service_token);
        }
        Ok(request)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let request = self.request(Method::GET, segments).await?;
        Self::parse(Self::send(request).await?).await
    }

    async fn send(request: RequestBuilder) -> Result<Response> {
        request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        if response.status().is_success() {
            let url = response.url().to_string();
            return response
                .json()
                .await
                .map_err(|e| ClientError::ParseError(format!("{url}: {e}")));
        }
        Err(Self::error_from(response).await)
    }

    /// Map a non-success response onto the error taxonomy, preferring the
    /// server's `{"error": ...}` message over the raw body.
    async fn error_from(response: Response) -> ClientError {
        let status = response.status();
        let retry_after_secs = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::BadRequest(message),
            StatusCode::UNAUTHORIZED => ClientError::AuthFailed(message),
            StatusCode::TOO_MANY_REQUESTS => ClientError::RateLimited { retry_after_secs },
            _ => ClientError::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Append `segments` to the base URL, percent-encoding each one so that
/// reserved characters in ids stay inside their segment
fn endpoint(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| ClientError::InvalidUrl(format!("{base} cannot carry a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
