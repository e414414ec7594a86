//! # UpAssist Domain
//!
//! Data types and models for the UpAssist monitoring service.
//!
//! This crate contains:
//! - Heartbeat and log record types as they appear on the wire
//! - Request payload types with client-side validation
//! - Domain error types and Result definitions
//! - Service constants (documented defaults and bounds)
//!
//! ## Architecture
//! - No dependency on the client crate
//! - No I/O; serialization and validation only

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
