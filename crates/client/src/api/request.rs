//! Request construction and response classification
//!
//! One place owns URL resolution, query assembly, bearer injection, and
//! response decoding, so the async and blocking dispatchers behave
//! identically on the wire.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use upassist_domain::ValidationError;

use super::errors::{ApiError, Result};
use crate::config::ApiConfig;

/// One API request before dispatch
///
/// `url` may be a path relative to the configured API base or a full
/// `http(s)://` URL; resolution settles it to an absolute URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn patch(url: impl Into<String>) -> Self {
        Self::new(Method::PATCH, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Appends one query pair; callers add only parameters they have set
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Settles the URL against the configured base and fills in the bearer
    /// header
    ///
    /// A caller-supplied Authorization header always wins; the configured
    /// key is only inserted when the header is absent. An empty key counts
    /// as unconfigured and the request goes out unauthenticated.
    pub fn resolve(mut self, config: &ApiConfig) -> Result<Self> {
        self.url = resolve_url(&config.base_api_url(), &self.url);
        if !self.headers.contains_key(AUTHORIZATION) {
            if let Some(key) = config.api_key.as_deref().filter(|key| !key.is_empty()) {
                let value = HeaderValue::from_str(&format!("Bearer {}", key))
                    .map_err(|e| ApiError::Config(format!("API key is not header-safe: {}", e)))?;
                self.headers.insert(AUTHORIZATION, value);
            }
        }
        Ok(self)
    }
}

/// Joins a path to the base URL with exactly one separating slash; full
/// URLs pass through untouched
fn resolve_url(base_url: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    format!("{}/{}", base_url.trim_end_matches('/'), url.trim_start_matches('/'))
}

/// Raw response handed back by a transport
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Classifies a transport response into a typed result
///
/// 2xx bodies are decoded into `T`; 204/205 and empty bodies decode from
/// JSON null (so `()` works for deletes); non-success statuses become
/// `ApiError::Api` carrying the body.
pub(crate) fn decode_response<T: DeserializeOwned>(response: ApiResponse, url: &str) -> Result<T> {
    let status = response.status;
    if !status.is_success() {
        warn!(status = %status, url = %url, "API returned non-success status");
        return Err(ApiError::Api {
            status: status.as_u16(),
            url: url.to_string(),
            body: parse_error_body(&response.body),
        });
    }

    debug!(status = %status, url = %url, "received API response");

    // 204/205 have no body by RFC spec; some endpoints also answer 200
    // with an empty body
    let value: Value = if response.body.is_empty()
        || status == StatusCode::NO_CONTENT
        || status == StatusCode::RESET_CONTENT
    {
        Value::Null
    } else {
        serde_json::from_str(&response.body).map_err(ValidationError::from)?
    };

    serde_json::from_value(value).map_err(|e| ValidationError::from(e).into())
}

fn parse_error_body(body: &str) -> Option<Value> {
    if body.is_empty() {
        return None;
    }
    Some(serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string())))
}
