//! Log shipping types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One log line for the collect endpoint
///
/// Every field is optional and the collect endpoint accepts whatever subset
/// is present. Unset fields serialize as explicit nulls; the batch is sent
/// exactly as constructed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LogItem {
    pub dt: Option<DateTime<Utc>>,
    pub host: Option<String>,
    pub message: Option<String>,
    pub file: Option<String>,
    pub data: Option<serde_json::Map<String, serde_json::Value>>,
}

impl LogItem {
    /// Creates a log line with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the event timestamp
    pub fn with_dt(mut self, dt: DateTime<Utc>) -> Self {
        self.dt = Some(dt);
        self
    }

    /// Sets the originating host name
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the message text
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the source file path
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Attaches structured payload data
    pub fn with_data(mut self, data: serde_json::Map<String, serde_json::Value>) -> Self {
        self.data = Some(data);
        self
    }
}

/// Acknowledgment body returned by event pings and log collection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailResponse {
    pub detail: Option<String>,
}
