//! Log shipping entity

use upassist_domain::{DetailResponse, LogItem, ValidationError};

use crate::api::client::ApiClient;
use crate::api::errors::Result;
use crate::api::request::ApiRequest;
use crate::config::ApiConfig;

/// Async log resource
pub struct Logs {
    client: ApiClient,
}

impl Logs {
    /// Creates an entity with the default transport
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the config is invalid or the HTTP
    /// client cannot be built
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self { client: ApiClient::new(config)? })
    }

    /// Wraps an existing client, keeping its transport
    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// Ships one batch of log lines in a single request
    ///
    /// The whole slice is serialized as one JSON array; an empty slice
    /// posts `[]`. There is no per-item error isolation.
    ///
    /// # Errors
    ///
    /// Returns an API error if the collect endpoint rejects the batch
    pub async fn collect(&self, items: &[LogItem]) -> Result<DetailResponse> {
        let body = serde_json::to_value(items).map_err(ValidationError::from)?;
        let url = self.client.config().logs_host.clone();
        self.client.request(ApiRequest::post(url).json(body)).await
    }
}
