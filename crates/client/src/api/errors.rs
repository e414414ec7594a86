//! API-specific error types
//!
//! Classifies every way an SDK call can fail: bad configuration, a missing
//! precondition, an invalid payload, a service rejection, or a transport
//! failure.

use serde_json::Value;
use thiserror::Error;
use upassist_domain::ValidationError;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Client could not be constructed or configured
    Config,
    /// Call attempted without a required attribute; nothing was sent
    Precondition,
    /// Payload failed local validation or response failed to decode
    Validation,
    /// Service answered with a non-success status
    Api,
    /// Network-layer failure from the HTTP stack
    Transport,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Attribute '{attribute}' is required for this call")]
    AttributeRequired { attribute: &'static str },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{url} returned status {status}")]
    Api {
        status: u16,
        url: String,
        /// Response body, JSON-decoded when possible, raw text otherwise
        body: Option<Value>,
    },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Config(_) => ApiErrorCategory::Config,
            Self::AttributeRequired { .. } => ApiErrorCategory::Precondition,
            Self::Validation(_) => ApiErrorCategory::Validation,
            Self::Api { .. } => ApiErrorCategory::Api,
            Self::Transport(_) => ApiErrorCategory::Transport,
        }
    }

    /// HTTP status for service rejections, `None` for every other failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
