//! Heartbeat monitor types
//!
//! `HeartbeatConfig` is the create payload: every field except `name` is
//! optional and unset fields are omitted from the serialized body, so the
//! service applies its own documented defaults. `HeartbeatRecord` and
//! `HeartbeatDetail` are the response shapes.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    DEFAULT_MAINTENANCE_TIMEZONE, MAX_ALERT_WEEK_DAY, MAX_CONFIRMATION_PERIOD_SECS,
    MAX_FETCH_INTERVAL_SECS, MIN_FETCH_INTERVAL_SECS,
};
use crate::errors::ValidationError;

/// Current probe state of a monitor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HeartbeatStatus {
    Running,
    Success,
    Failure,
}

impl HeartbeatStatus {
    /// Wire name for this status
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
        }
    }
}

/// Payload for creating a heartbeat monitor
///
/// Unset fields are left out of the request body entirely; the service
/// defaults documented in [`crate::constants`] then apply server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartbeatConfig {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Seconds between expected check-ins, accepted range [60, 100000]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_interval: Option<u32>,
    /// Grace window in seconds before an incident opens, accepted range [0, 100000]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realert_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alerts_on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_push_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window_from: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window_until: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window_timezone: Option<Tz>,
    /// Days on which alerts fire, 0 = Monday .. 6 = Sunday
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_week_days: Option<Vec<u8>>,
}

impl HeartbeatConfig {
    /// Creates a config with only the monitor name set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            group_id: None,
            slug: None,
            fetch_interval: None,
            confirmation_period: None,
            realert_period: None,
            alerts_on: None,
            paused: None,
            meta: None,
            call: None,
            send_sms: None,
            send_email: None,
            send_push_notification: None,
            maintenance_window_from: None,
            maintenance_window_until: None,
            maintenance_window_timezone: None,
            alert_week_days: None,
        }
    }

    /// Sets the free-text description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Assigns the monitor to a group
    pub fn with_group_id(mut self, group_id: Uuid) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Sets an explicit slug instead of the server-derived one
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Sets the expected check-in interval in seconds
    pub fn with_fetch_interval(mut self, seconds: u32) -> Self {
        self.fetch_interval = Some(seconds);
        self
    }

    /// Sets the grace window before an incident opens, in seconds
    pub fn with_confirmation_period(mut self, seconds: u32) -> Self {
        self.confirmation_period = Some(seconds);
        self
    }

    /// Sets the interval between repeated alerts, in seconds
    pub fn with_realert_period(mut self, seconds: u32) -> Self {
        self.realert_period = Some(seconds);
        self
    }

    /// Turns alerting on or off
    pub fn with_alerts_on(mut self, alerts_on: bool) -> Self {
        self.alerts_on = Some(alerts_on);
        self
    }

    /// Sets whether the monitor starts out paused
    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = Some(paused);
        self
    }

    /// Attaches free-form metadata
    pub fn with_meta(mut self, meta: serde_json::Map<String, serde_json::Value>) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Enables or disables phone-call alerts
    pub fn with_call(mut self, call: bool) -> Self {
        self.call = Some(call);
        self
    }

    /// Enables or disables SMS alerts
    pub fn with_send_sms(mut self, send_sms: bool) -> Self {
        self.send_sms = Some(send_sms);
        self
    }

    /// Enables or disables email alerts
    pub fn with_send_email(mut self, send_email: bool) -> Self {
        self.send_email = Some(send_email);
        self
    }

    /// Enables or disables push notification alerts
    pub fn with_send_push_notification(mut self, send_push_notification: bool) -> Self {
        self.send_push_notification = Some(send_push_notification);
        self
    }

    /// Sets the daily window during which alerts are suppressed
    pub fn with_maintenance_window(mut self, from: NaiveTime, until: NaiveTime, timezone: Tz) -> Self {
        self.maintenance_window_from = Some(from);
        self.maintenance_window_until = Some(until);
        self.maintenance_window_timezone = Some(timezone);
        self
    }

    /// Restricts alerting to the given week days, 0 = Monday .. 6 = Sunday
    pub fn with_alert_week_days(mut self, days: Vec<u8>) -> Self {
        self.alert_week_days = Some(days);
        self
    }

    /// Checks field constraints before the payload is sent anywhere
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Field {
                field: "name",
                message: "must not be empty".to_string(),
            });
        }
        if let Some(interval) = self.fetch_interval {
            if !(MIN_FETCH_INTERVAL_SECS..=MAX_FETCH_INTERVAL_SECS).contains(&interval) {
                return Err(ValidationError::OutOfRange {
                    field: "fetch_interval",
                    value: i64::from(interval),
                    min: i64::from(MIN_FETCH_INTERVAL_SECS),
                    max: i64::from(MAX_FETCH_INTERVAL_SECS),
                });
            }
        }
        if let Some(period) = self.confirmation_period {
            if period > MAX_CONFIRMATION_PERIOD_SECS {
                return Err(ValidationError::OutOfRange {
                    field: "confirmation_period",
                    value: i64::from(period),
                    min: 0,
                    max: i64::from(MAX_CONFIRMATION_PERIOD_SECS),
                });
            }
        }
        if let Some(days) = &self.alert_week_days {
            for day in days {
                if *day > MAX_ALERT_WEEK_DAY {
                    return Err(ValidationError::OutOfRange {
                        field: "alert_week_days",
                        value: i64::from(*day),
                        min: 0,
                        max: i64::from(MAX_ALERT_WEEK_DAY),
                    });
                }
            }
        }
        Ok(())
    }
}

fn default_maintenance_timezone() -> Tz {
    DEFAULT_MAINTENANCE_TIMEZONE
}

/// Monitor record as returned by list and create calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartbeatRecord {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// URL-safe identifier used in all per-monitor paths
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HeartbeatStatus>,
    pub is_down: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_up_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_down_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_fetch_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_fetch_at: Option<DateTime<Utc>>,
    pub fetch_interval: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_period: Option<u32>,
    pub paused: bool,
    pub alerts_on: bool,
    pub call: bool,
    pub send_sms: bool,
    pub send_email: bool,
    pub send_push_notification: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window_from: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window_until: Option<NaiveTime>,
    #[serde(default = "default_maintenance_timezone")]
    pub maintenance_window_timezone: Tz,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_week_days: Option<Vec<u8>>,
}

/// Monitor record with the extra fields only the detail call returns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartbeatDetail {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HeartbeatStatus>,
    pub is_down: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_up_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_down_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_fetch_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_fetch_at: Option<DateTime<Utc>>,
    pub fetch_interval: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_period: Option<u32>,
    pub paused: bool,
    pub alerts_on: bool,
    pub call: bool,
    pub send_sms: bool,
    pub send_email: bool,
    pub send_push_notification: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window_from: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window_until: Option<NaiveTime>,
    #[serde(default = "default_maintenance_timezone")]
    pub maintenance_window_timezone: Tz,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_week_days: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub incidents_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_incident_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realert_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub incident_stats: Vec<IncidentStats>,
}

/// Aggregated incident figures for one reporting period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub from_datetime: DateTime<Utc>,
    pub to_datetime: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_alias: Option<String>,
    pub uptime_percents: f64,
}
