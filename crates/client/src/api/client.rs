//! Async API dispatcher
//!
//! `ApiClient` resolves requests against its `ApiConfig` and executes them
//! through a `Transport`. The default transport drives `reqwest::Client`;
//! tests inject their own implementation to observe or suppress network
//! traffic.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::errors::{ApiError, Result};
use super::request::{decode_response, ApiRequest, ApiResponse};
use crate::config::ApiConfig;

/// Executes one resolved request and returns the raw response
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Default transport over `reqwest::Client`
///
/// Connection pooling is disabled so every call opens and closes its own
/// session.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds the underlying reqwest client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the HTTP client cannot be constructed
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = self.client.request(request.method, &request.url);
        builder = builder.headers(request.headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}

/// Async API client
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Creates a client with the default reqwest transport
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the config is invalid or the HTTP
    /// client cannot be built
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;
        let transport = Arc::new(HttpTransport::new()?);
        Ok(Self { config, transport })
    }

    /// Creates a client over a caller-supplied transport
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the config is invalid
    pub fn with_transport(config: ApiConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Resolves and dispatches one request, decoding the response body
    ///
    /// # Errors
    ///
    /// Returns the full taxonomy: validation errors before dispatch,
    /// transport errors from the network layer, API errors for non-success
    /// statuses, and decode failures for malformed bodies
    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let request = request.resolve(&self.config)?;
        let url = request.url.clone();
        debug!(method = %request.method, url = %url, "dispatching API request");
        let response = self.transport.execute(request).await?;
        decode_response(response, &url)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> ApiClient {
        let config = ApiConfig::default()
            .with_api_host(server.uri())
            .with_api_key("test-token");
        ApiClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn request_sends_bearer_and_decodes_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/heartbeats"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "ok"})))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let value: Value = client.request(ApiRequest::get("heartbeats")).await.unwrap();
        assert_eq!(value["detail"], "ok");
    }

    #[tokio::test]
    async fn query_pairs_reach_the_server() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/heartbeats"))
            .and(query_param("q", "db"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "ok"})))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let request = ApiRequest::get("heartbeats").query("q", "db").query("page", "2");
        let result: Result<Value> = client.request(request).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn non_success_surfaces_api_error_with_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "not found"})))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.request::<Value>(ApiRequest::get("missing")).await.unwrap_err();
        match err {
            ApiError::Api { status, body, .. } => {
                assert_eq!(status, 404);
                assert_eq!(body, Some(json!({"detail": "not found"})));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_with_204_decodes_as_unit() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/heartbeats/db-backup"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result: Result<()> = client.request(ApiRequest::delete("heartbeats/db-backup")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn connection_failure_is_a_transport_error() {
        // Port 1 is never listening
        let config = ApiConfig::default().with_api_host("http://127.0.0.1:1");
        let client = ApiClient::new(config).unwrap();
        let err = client.request::<Value>(ApiRequest::get("heartbeats")).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn invalid_host_fails_at_construction() {
        let config = ApiConfig::default().with_api_host("not a url");
        assert!(ApiClient::new(config).is_err());
    }
}
