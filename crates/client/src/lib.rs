//! # UpAssist Client
//!
//! HTTP client SDK for the UpAssist monitoring service.
//!
//! This crate contains:
//! - `config`: explicit per-client configuration (key, version, hosts)
//! - `api`: request resolution, error taxonomy, async and blocking dispatch
//! - `entities`: the Heartbeat and Logs resource surfaces
//! - `auth`: bearer token generation helper
//!
//! ## Architecture
//! - Async-first over `reqwest`, with a blocking mirror under
//!   `api::blocking` / `entities::blocking`
//! - One request per call: no retries, no caching, no internal timeouts
//! - All request shaping lives in `api::request` so both surfaces send
//!   identical requests

pub mod api;
pub mod auth;
pub mod config;
pub mod entities;

// Re-export commonly used items
pub use api::{ApiClient, ApiError, ApiErrorCategory, Result};
pub use config::ApiConfig;
pub use entities::{Heartbeat, ListQuery, Logs};
pub use upassist_domain::{
    DetailResponse, HeartbeatConfig, HeartbeatDetail, HeartbeatRecord, HeartbeatStatus, LogItem,
    PaginatedList, ValidationError,
};
