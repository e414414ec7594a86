//! Resource entities
//!
//! `Heartbeat` and `Logs` wrap the dispatcher with the documented endpoint
//! set. The async surfaces live in this module; `blocking` holds the
//! synchronous mirrors over the blocking dispatcher.

pub mod blocking;
pub mod heartbeat;
pub mod logs;

pub use heartbeat::{Heartbeat, ListQuery};
pub use logs::Logs;
