//! Service constants
//!
//! Documented server-side defaults and accepted ranges for heartbeat
//! monitors. The create payload only sends fields the caller set, so these
//! are never serialized on the caller's behalf; they are published here for
//! validation and for display purposes.

use chrono_tz::Tz;

// Fetch interval (seconds between expected check-ins)
pub const DEFAULT_FETCH_INTERVAL_SECS: u32 = 180;
pub const MIN_FETCH_INTERVAL_SECS: u32 = 60;
pub const MAX_FETCH_INTERVAL_SECS: u32 = 100_000;

// Confirmation period (grace window before an incident opens)
pub const DEFAULT_CONFIRMATION_PERIOD_SECS: u32 = 0;
pub const MIN_CONFIRMATION_PERIOD_SECS: u32 = 0;
pub const MAX_CONFIRMATION_PERIOD_SECS: u32 = 100_000;

// Maintenance window
pub const DEFAULT_MAINTENANCE_TIMEZONE: Tz = chrono_tz::Europe::Belfast;

// Alert scheduling (0 = Monday .. 6 = Sunday)
pub const DEFAULT_ALERT_WEEK_DAYS: [u8; 7] = [0, 1, 2, 3, 4, 5, 6];
pub const MAX_ALERT_WEEK_DAY: u8 = 6;

// Pagination
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 50;
