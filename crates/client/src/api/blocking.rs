//! Blocking API dispatcher
//!
//! Synchronous mirror of [`super::client`]: the same resolution and
//! decoding rules, executed on the calling thread over
//! `reqwest::blocking::Client`.
//!
//! The blocking surface must not be driven from inside an async runtime;
//! reqwest's blocking client manages its own internal runtime thread.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::errors::{ApiError, Result};
use super::request::{decode_response, ApiRequest, ApiResponse};
use crate::config::ApiConfig;

/// Executes one resolved request and returns the raw response
pub trait Transport: Send + Sync {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Default transport over `reqwest::blocking::Client`
///
/// Connection pooling is disabled so every call opens and closes its own
/// session.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Builds the underlying reqwest client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the HTTP client cannot be constructed
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = self.client.request(request.method, &request.url);
        builder = builder.headers(request.headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send()?;
        let status = response.status();
        let body = response.text()?;
        Ok(ApiResponse { status, body })
    }
}

/// Blocking API client
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Creates a client with the default blocking reqwest transport
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
    /// Same taxonomy as the async surface
    pub fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let request = request.resolve(&self.config)?;
        let url = request.url.clone();
        debug!(method = %request.method, url = %url, "dispatching API request");
        let response = self.transport.execute(request)?;
        decode_response(response, &url)
    }
}
