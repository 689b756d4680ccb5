//! Tests for the Pulse client against mock servers.

use pulse_client::{ClientConfig, ClientError, PulseClient};
use pulse_core::types::CustomerId;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn customer_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Mike Chen",
        "email": "mike@startup.io",
        "company": "StartupXYZ",
        "status": "trial",
        "plan": "pro",
        "mrr": 0,
        "joinedDate": "2025-09-20",
        "lastActive": "2025-10-08"
    })
}

async fn client_for(server: &MockServer) -> PulseClient {
    PulseClient::new(ClientConfig::new(server.uri())).unwrap()
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_empty_url_rejected() {
        match PulseClient::new(ClientConfig::new("")) {
            Err(ClientError::InvalidUrl(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        match PulseClient::new(ClientConfig::new("example.com")) {
            Err(ClientError::InvalidUrl(msg)) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            _ => panic!("Expected InvalidUrl error"),
        }
    }
}

// =============================================================================
// Reporting Reads
// =============================================================================

mod reporting {
    use super::*;

    #[tokio::test]
    async fn test_list_customers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/customers"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([customer_json("2"), customer_json("1")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let customers = client_for(&server).await.list_customers().await.unwrap();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].id.as_str(), "2");
        assert_eq!(customers[0].mrr, 0.0);
    }

    #[tokio::test]
    async fn test_get_customer_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/customers/999"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"error": "Customer not found"})),
            )
            .mount(&server)
            .await;

        let result = client_for(&server)
            .await
            .get_customer(&CustomerId::new("999"))
            .await;

        match result {
            Err(ClientError::NotFound(msg)) => assert_eq!(msg, "Customer not found"),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_customer_encodes_reserved_characters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/customers/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(customer_json("1")))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/customers/1%3Fx%23frag"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"error": "Customer not found"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .await
            .get_customer(&CustomerId::new("1?x#frag"))
            .await;

        assert!(matches!(result, Err(ClientError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_analytics_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/analytics"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "analyticsData": [
                    {"date": "2025-09-01", "revenue": 45000, "users": 1250, "conversions": 42, "churn": 3.2},
                    {"date": "2025-09-08", "revenue": 48000, "users": 1320, "conversions": 48, "churn": 2.9}
                ]
            })))
            .mount(&server)
            .await;

        let series = client_for(&server).await.analytics().await.unwrap();
        assert_eq!(series.len(), 2);
        assert!(series[0].date < series[1].date);
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/team"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = client_for(&server).await.list_team_members().await;
        assert!(matches!(result, Err(ClientError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_server_error_keeps_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/reports"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"error": "Internal server error"})),
            )
            .mount(&server)
            .await;

        match client_for(&server).await.list_reports().await {
            Err(ClientError::ServerError { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal server error");
            }
            other => panic!("Expected ServerError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rate_limited_reads_retry_after() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/billing/plans"))
            .respond_with(
                ResponseTemplate::new(429)
                    .insert_header("Retry-After", "42")
                    .set_body_json(json!({"error": "Rate limit exceeded. Please try again later."})),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).await.list_billing_plans().await;
        assert!(matches!(
            result,
            Err(ClientError::RateLimited {
                retry_after_secs: 42
            })
        ));
    }
}

// =============================================================================
// Authentication
// =============================================================================

mod authentication {
    use super::*;

    fn login_body() -> serde_json::Value {
        json!({
            "success": true,
            "message": "Login successful (demo mode)",
            "token": "demo-token",
            "user": {"id": "demo-user-123", "email": "a@b.com", "name": "John Doe", "role": "admin"}
        })
    }

    #[tokio::test]
    async fn test_login_stores_token_and_sends_it() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(json!({"email": "a@b.com", "password": "x"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .and(header("Authorization", "Bearer demo-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": {"id": "demo-user-123", "email": "a@b.com", "name": "John Doe", "role": "admin"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let login = client.login("a@b.com", "x").await.unwrap();
        assert!(login.success);
        assert_eq!(client.token().await.as_deref(), Some("demo-token"));

        let me = client.me().await.unwrap();
        assert_eq!(me.id.as_str(), "demo-user-123");
    }

    #[tokio::test]
    async fn test_login_missing_fields_is_bad_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"error": "Email and password are required"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client.login("", "").await;
        assert!(matches!(result, Err(ClientError::BadRequest(_))));
        assert!(!client.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_me_without_token_short_circuits() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = client_for(&server).await.me().await;
        assert!(matches!(result, Err(ClientError::AuthRequired)));
    }

    #[tokio::test]
    async fn test_expired_token_is_auth_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Token expired"})))
            .mount(&server)
            .await;

        let client = PulseClient::new(ClientConfig::new(server.uri()).with_token("old")).unwrap();
        match client.me().await {
            Err(ClientError::AuthFailed(msg)) => assert_eq!(msg, "Token expired"),
            other => panic!("Expected AuthFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/logout"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "Logout successful"})),
            )
            .mount(&server)
            .await;

        let client = PulseClient::new(ClientConfig::new(server.uri()).with_token("t")).unwrap();
        let response = client.logout().await.unwrap();
        assert_eq!(response.message, "Logout successful");
        assert!(!client.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_service_token_sent_on_reads() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/billing/transactions"))
            .and(header("X-Service-Token", "svc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            PulseClient::new(ClientConfig::new(server.uri()).with_service_token("svc")).unwrap();
        assert!(client.list_transactions().await.unwrap().is_empty());
    }
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "timestamp": "2025-10-10T12:00:00Z",
            "version": "0.1.0"
        })))
        .mount(&server)
        .await;

    let health = client_for(&server).await.health().await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version.as_deref(), Some("0.1.0"));
}
