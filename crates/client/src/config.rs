//! Client configuration
//!
//! Every client takes its own `ApiConfig` value; there is no process-global
//! configuration. `from_env` seeds a config from environment variables for
//! applications that prefer that wiring.
//!
//! ## Environment Variables
//! - `UPASSIST_API_KEY`: bearer key sent with every request
//! - `UPASSIST_API_VERSION`: API version segment (defaults to `v1`)

use crate::api::errors::{ApiError, Result};

/// Production host for the versioned REST API
pub const DEFAULT_API_HOST: &str = "https://api.upassist.cloud";
/// Production host for heartbeat event pings
pub const DEFAULT_HEARTBEAT_EVENT_HOST: &str = "https://heartbeats.upassist.cloud/api";
/// Production endpoint for log collection
pub const DEFAULT_LOGS_HOST: &str = "https://logs.upassist.cloud/collect";
/// API version used when none is configured
pub const DEFAULT_API_VERSION: &str = "v1";

/// Configuration for API clients
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bearer key; requests go out unauthenticated when unset or empty
    pub api_key: Option<String>,
    /// Version segment appended to the API host (e.g. "v1")
    pub api_version: String,
    /// Base host for the versioned REST API
    pub api_host: String,
    /// Host for heartbeat event pings
    pub heartbeat_event_host: String,
    /// Full endpoint for log collection
    pub logs_host: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
            heartbeat_event_host: DEFAULT_HEARTBEAT_EVENT_HOST.to_string(),
            logs_host: DEFAULT_LOGS_HOST.to_string(),
        }
    }
}

impl ApiConfig {
    /// Creates a config with production hosts and no API key
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config seeded from `UPASSIST_*` environment variables
    ///
    /// Missing or empty variables leave the defaults in place.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("UPASSIST_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        if let Ok(version) = std::env::var("UPASSIST_API_VERSION") {
            if !version.is_empty() {
                config.api_version = version;
            }
        }
        config
    }

    /// Sets the bearer key; an empty key is treated as unset at dispatch
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Overrides the API version segment
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Overrides the REST API host
    pub fn with_api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = api_host.into();
        self
    }

    /// Overrides the heartbeat event ping host
    pub fn with_heartbeat_event_host(mut self, host: impl Into<String>) -> Self {
        self.heartbeat_event_host = host.into();
        self
    }

    /// Overrides the log collection endpoint
    pub fn with_logs_host(mut self, host: impl Into<String>) -> Self {
        self.logs_host = host.into();
        self
    }

    /// Base URL for versioned API paths, with exactly one slash between
    /// host and version segment
    pub fn base_api_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_host.trim_end_matches('/'),
            self.api_version.trim_start_matches('/')
        )
    }

    /// Checks that the configured hosts are well-formed URLs
    ///
    /// Called by client constructors so a bad host fails at construction
    /// time rather than on the first request.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("api_host", &self.api_host),
            ("heartbeat_event_host", &self.heartbeat_event_host),
            ("logs_host", &self.logs_host),
        ] {
            url::Url::parse(value)
                .map_err(|e| ApiError::Config(format!("Invalid {}: {}", name, e)))?;
        }
        if self.api_version.trim().is_empty() {
            return Err(ApiError::Config("api_version must not be empty".to_string()));
        }
        Ok(())
    }
}
