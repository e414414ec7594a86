//! Error types for domain validation and decoding

use thiserror::Error;

/// Validation failures raised before a payload leaves the process, plus
/// decode failures for responses that do not match the documented schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid value for {field}: {message}")]
    Field { field: &'static str, message: String },

    #[error("Value for {field} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Malformed payload: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for domain validation
pub type Result<T> = std::result::Result<T, ValidationError>;
