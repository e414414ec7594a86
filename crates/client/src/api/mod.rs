//! HTTP dispatch for the UpAssist API
//!
//! This module owns everything between an entity call and the wire:
//!
//! - `request`: request construction, URL resolution, bearer injection,
//!   and response classification (shared by both surfaces)
//! - `client`: async dispatcher over `reqwest::Client`
//! - `blocking`: synchronous dispatcher over `reqwest::blocking::Client`
//! - `errors`: the SDK failure taxonomy
//!
//! Each call makes exactly one network attempt; there is no retry, cache,
//! or internal timeout layer.

pub mod blocking;
pub mod client;
pub mod errors;
pub mod request;

pub use client::{ApiClient, HttpTransport, Transport};
pub use errors::{ApiError, ApiErrorCategory, Result};
pub use request::{ApiRequest, ApiResponse};
