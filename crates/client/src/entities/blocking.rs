//! Blocking resource entities
//!
//! Synchronous mirrors of [`super::heartbeat`] and [`super::logs`] over the
//! blocking dispatcher. Endpoint set, slug guard, and validation order are
//! identical to the async surface.

use serde_json::Value;
use upassist_domain::{
    DetailResponse, HeartbeatConfig, HeartbeatDetail, HeartbeatRecord, LogItem, PaginatedList,
    ValidationError,
};

use super::heartbeat::ListQuery;
use crate::api::blocking::ApiClient;
use crate::api::errors::{ApiError, Result};
use crate::api::request::ApiRequest;
use crate::config::ApiConfig;

/// Blocking heartbeat resource
pub struct Heartbeat {
    client: ApiClient,
    slug: Option<String>,
}

impl Heartbeat {
    /// Creates an entity with the default blocking transport and no slug
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the config is invalid or the HTTP
    /// client cannot be built
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self { client: ApiClient::new(config)?, slug: None })
    }

    /// Wraps an existing client, keeping its transport
    pub fn from_client(client: ApiClient) -> Self {
        Self { client, slug: None }
    }

    /// Scopes this entity to one monitor
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    fn require_slug(&self) -> Result<&str> {
        // An empty slug would address the collection URL.
        self.slug
            .as_deref()
            .filter(|slug| !slug.is_empty())
            .ok_or(ApiError::AttributeRequired { attribute: "slug" })
    }

    /// Lists monitors, one page per call
    ///
    /// # Errors
    ///
    /// Returns an API error for non-success statuses and a validation
    /// error if the page envelope is malformed
    pub fn list(&self, query: ListQuery) -> Result<PaginatedList<HeartbeatRecord>> {
        let request = query.apply(ApiRequest::get("heartbeats"));
        let page: PaginatedList<HeartbeatRecord> = self.client.request(request)?;
        page.validate()?;
        Ok(page)
    }

    /// Fetches the full record for the scoped monitor
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AttributeRequired` when the slug is unset or
    /// empty; no request is sent in that case
    pub fn detail(&self) -> Result<HeartbeatDetail> {
        let slug = self.require_slug()?;
        self.client.request(ApiRequest::get(format!("heartbeats/{}", slug)))
    }

    /// Suspends monitoring; returns the raw acknowledgment body
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AttributeRequired` when the slug is unset or
    /// empty
    pub fn pause(&self) -> Result<Value> {
        let slug = self.require_slug()?;
        self.client.request(ApiRequest::patch(format!("heartbeats/{}/pause", slug)))
    }

    /// Resumes monitoring; returns the raw acknowledgment body
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AttributeRequired` when the slug is unset or
    /// empty
    pub fn unpause(&self) -> Result<Value> {
        let slug = self.require_slug()?;
        self.client.request(ApiRequest::patch(format!("heartbeats/{}/unpause", slug)))
    }

    /// Deletes the scoped monitor
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AttributeRequired` when the slug is unset or
    /// empty
    pub fn delete(&self) -> Result<()> {
        let slug = self.require_slug()?;
        self.client.request(ApiRequest::delete(format!("heartbeats/{}", slug)))
    }

    /// Records a check-in against the event host
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AttributeRequired` when the slug is unset or
    /// empty
    pub fn event(&self) -> Result<DetailResponse> {
        let slug = self.require_slug()?;
        let url = format!(
            "{}/event/{}",
            self.client.config().heartbeat_event_host.trim_end_matches('/'),
            slug
        );
        self.client.request(ApiRequest::get(url))
    }

    /// Creates a monitor from the given config
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for constraint violations and an API
    /// error if the service rejects the payload
    pub fn create(&self, config: &HeartbeatConfig) -> Result<HeartbeatRecord> {
        config.validate()?;
        let body = serde_json::to_value(config).map_err(ValidationError::from)?;
        self.client.request(ApiRequest::post("heartbeats").json(body))
    }
}

/// Blocking log resource
pub struct Logs {
    client: ApiClient,
}

impl Logs {
    /// Creates an entity with the default blocking transport
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
    /// # Errors
    ///
    /// Returns an API error if the collect endpoint rejects the batch
    pub fn collect(&self, items: &[LogItem]) -> Result<DetailResponse> {
        let body = serde_json::to_value(items).map_err(ValidationError::from)?;
        let url = self.client.config().logs_host.clone();
        self.client.request(ApiRequest::post(url).json(body))
    }
}
