//! Wire-level types for the UpAssist API
//!
//! Request payloads carry only the fields the caller set; response records
//! mirror the documented service schemas.

pub mod heartbeat;
pub mod logs;
pub mod page;

pub use heartbeat::{
    HeartbeatConfig, HeartbeatDetail, HeartbeatRecord, HeartbeatStatus, IncidentStats,
};
pub use logs::{DetailResponse, LogItem};
pub use page::PaginatedList;
