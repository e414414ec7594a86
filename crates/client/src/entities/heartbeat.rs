//! Heartbeat monitor entity
//!
//! Per-monitor calls need a non-empty slug; the guard runs before any
//! request is built, so a slugless call never touches the network.

use serde_json::Value;
use upassist_domain::{
    DetailResponse, HeartbeatConfig, HeartbeatDetail, HeartbeatRecord, PaginatedList,
    ValidationError,
};

use crate::api::client::ApiClient;
use crate::api::errors::{ApiError, Result};
use crate::api::request::ApiRequest;
use crate::config::ApiConfig;

/// Filters for the list call; unset fields are omitted from the query
/// string
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub q: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub(crate) fn apply(self, mut request: ApiRequest) -> ApiRequest {
        if let Some(q) = self.q {
            request = request.query("q", q);
        }
        if let Some(page) = self.page {
            request = request.query("page", page.to_string());
        }
        if let Some(per_page) = self.per_page {
            request = request.query("per_page", per_page.to_string());
        }
        request
    }
}

/// Async heartbeat resource
pub struct Heartbeat {
    client: ApiClient,
    slug: Option<String>,
}

impl Heartbeat {
    /// Creates an entity with the default transport and no slug
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
    pub async fn list(&self, query: ListQuery) -> Result<PaginatedList<HeartbeatRecord>> {
        let request = query.apply(ApiRequest::get("heartbeats"));
        let page: PaginatedList<HeartbeatRecord> = self.client.request(request).await?;
        page.validate()?;
        Ok(page)
    }

    /// Fetches the full record for the scoped monitor
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AttributeRequired` when the slug is unset or
    /// empty; no request is sent in that case
    pub async fn detail(&self) -> Result<HeartbeatDetail> {
        let slug = self.require_slug()?;
        self.client.request(ApiRequest::get(format!("heartbeats/{}", slug))).await
    }

    /// Suspends monitoring; returns the raw acknowledgment body
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AttributeRequired` when the slug is unset or
    /// empty
    pub async fn pause(&self) -> Result<Value> {
        let slug = self.require_slug()?;
        self.client.request(ApiRequest::patch(format!("heartbeats/{}/pause", slug))).await
    }

    /// Resumes monitoring; returns the raw acknowledgment body
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AttributeRequired` when the slug is unset or
    /// empty
    pub async fn unpause(&self) -> Result<Value> {
        let slug = self.require_slug()?;
        self.client.request(ApiRequest::patch(format!("heartbeats/{}/unpause", slug))).await
    }

    /// Deletes the scoped monitor
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AttributeRequired` when the slug is unset or
    /// empty
    pub async fn delete(&self) -> Result<()> {
        let slug = self.require_slug()?;
        self.client.request(ApiRequest::delete(format!("heartbeats/{}", slug))).await
    }

    /// Records a check-in against the event host
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AttributeRequired` when the slug is unset or
    /// empty
    pub async fn event(&self) -> Result<DetailResponse> {
        let slug = self.require_slug()?;
        let url = format!(
            "{}/event/{}",
            self.client.config().heartbeat_event_host.trim_end_matches('/'),
            slug
        );
        self.client.request(ApiRequest::get(url)).await
    }

    /// Creates a monitor from the given config
    ///
    /// The config is validated locally first; a validation failure means
    /// nothing was sent. Only fields the caller set go into the body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for constraint violations and an API
    /// error if the service rejects the payload
    pub async fn create(&self, config: &HeartbeatConfig) -> Result<HeartbeatRecord> {
        config.validate()?;
        let body = serde_json::to_value(config).map_err(ValidationError::from)?;
        self.client.request(ApiRequest::post("heartbeats").json(body)).await
    }
}
