//! Request dispatch.
//!
//! A [`Transport`] performs exactly one outbound call per invocation: no
//! retries, no pagination, no streaming. [`HttpTransport`] is the reqwest
//! implementation; tests substitute their own.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::debug;

use tavily_recon_core::{Endpoint, ReconError, Result, TavilyConfig};

/// Sends one JSON request to a Tavily endpoint.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `endpoint`, authenticated with `api_key`.
    ///
    /// Returns the decoded JSON body of a successful response.
    async fn post(&self, endpoint: Endpoint, api_key: &str, body: JsonValue) -> Result<JsonValue>;
}

/// reqwest-backed transport.
///
/// The underlying connection pool is reused across calls; no other state
/// is carried from one call to the next.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: TavilyConfig,
    client: Client,
}

impl HttpTransport {
    /// Create a transport using the configured base URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &TavilyConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ReconError::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            config: config.clone(),
            client,
        })
    }

    /// Create a transport around an existing reqwest client.
    #[must_use]
    pub fn with_client(config: &TavilyConfig, client: Client) -> Self {
        Self {
            config: config.clone(),
            client,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, endpoint: Endpoint, api_key: &str, body: JsonValue) -> Result<JsonValue> {
        let url = self.config.endpoint_url(endpoint)?;

        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ReconError::timeout(format!(
                        "request to {endpoint} timed out after {}s",
                        self.config.timeout_secs
                    ))
                } else {
                    ReconError::transport(format!("HTTP request failed: {e}"))
                }
            })?;

        let status = response.status();
        debug!(endpoint = %endpoint, status = status.as_u16(), "Tavily response received");

        if !status.is_success() {
            let body: JsonValue = response.json().await.unwrap_or(JsonValue::Null);
            let message = error_message(&body)
                .unwrap_or_else(|| format!("Tavily API returned status: {status}"));
            return Err(ReconError::api(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| ReconError::decode(format!("Failed to parse response: {e}")))
    }
}

/// Pull a human-readable message out of an error body.
///
/// The service uses `{"detail": {"error": ...}}`, `{"detail": ...}` or a
/// top-level `message`/`error` depending on the failure.
fn error_message(body: &JsonValue) -> Option<String> {
    let detail = &body["detail"];
    let candidates = [
        detail["error"].as_str(),
        detail.as_str(),
        body["message"].as_str(),
        body["error"].as_str(),
    ];
    candidates
        .into_iter()
        .flatten()
        .find(|m| !m.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> TavilyConfig {
        TavilyConfig::new("tvly-test").with_base_url(server.uri())
    }

    #[rstest]
    #[case(json!({"detail": {"error": "Invalid API key"}}), Some("Invalid API key"))]
    #[case(json!({"detail": "Rate limit exceeded"}), Some("Rate limit exceeded"))]
    #[case(json!({"message": "Bad request"}), Some("Bad request"))]
    #[case(json!({"error": "Forbidden"}), Some("Forbidden"))]
    #[case(json!({"detail": ""}), None)]
    #[case(JsonValue::Null, None)]
    fn test_error_message(#[case] body: JsonValue, #[case] expected: Option<&str>) {
        assert_eq!(error_message(&body).as_deref(), expected);
    }

    #[tokio::test]
    async fn test_post_sends_bearer_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("authorization", "Bearer tvly-test"))
            .and(body_json(json!({"query": "rust"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&config_for(&server)).unwrap();
        let body = transport
            .post(Endpoint::Search, "tvly-test", json!({"query": "rust"}))
            .await
            .unwrap();
        assert_eq!(body, json!({"results": []}));
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/extract"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"detail": {"error": "Invalid API key"}})),
            )
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&config_for(&server)).unwrap();
        let err = transport
            .post(Endpoint::Extract, "bad", json!({"urls": ["https://e"]}))
            .await
            .unwrap_err();
        match err {
            ReconError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&config_for(&server)).unwrap();
        let err = transport
            .post(Endpoint::Map, "k", json!({}))
            .await
            .unwrap_err();
        assert!(err.is_transport_failure());
        assert!(err.to_string().contains("502"));
    }

    #[tokio::test]
    async fn test_invalid_success_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&config_for(&server)).unwrap();
        let err = transport
            .post(Endpoint::Crawl, "k", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ReconError::Decode(_)));
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"results": []}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&config_for(&server).with_timeout(1)).unwrap();
        let err = transport
            .post(Endpoint::Search, "k", json!({}))
            .await
            .unwrap_err();
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let config = TavilyConfig::new("k").with_base_url("http://127.0.0.1:1");
        let transport = HttpTransport::new(&config).unwrap();
        let err = transport
            .post(Endpoint::Search, "k", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ReconError::Transport { timed_out: false, .. }));
    }
}
