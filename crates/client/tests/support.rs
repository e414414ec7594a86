use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use upassist_client::api::blocking;
use upassist_client::api::client::Transport;
use upassist_client::api::request::{ApiRequest, ApiResponse};
use upassist_client::api::Result;

/// Transport double that counts calls and answers with a canned response.
///
/// Implements both the async and the blocking transport traits so the same
/// double serves either surface.
pub struct CountingTransport {
    calls: AtomicUsize,
    status: StatusCode,
    body: String,
}

impl CountingTransport {
    pub fn new(status: u16, body: &Value) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.to_string(),
        })
    }

    /// Number of requests that reached this transport.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond(&self) -> ApiResponse {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ApiResponse { status: self.status, body: self.body.clone() }
    }
}

#[async_trait]
impl Transport for CountingTransport {
    async fn execute(&self, _request: ApiRequest) -> Result<ApiResponse> {
        Ok(self.respond())
    }
}

impl blocking::Transport for CountingTransport {
    fn execute(&self, _request: ApiRequest) -> Result<ApiResponse> {
        Ok(self.respond())
    }
}

/// Full heartbeat record body as the service returns it.
pub fn record_body(slug: &str) -> Value {
    json!({
        "id": "7b0f9d4e-58dd-4f6b-b35f-0513c4e1f3a7",
        "name": slug,
        "created_at": "2024-05-01T12:00:00Z",
        "slug": slug,
        "group_id": null,
        "status": "SUCCESS",
        "is_down": false,
        "last_up_at": "2024-05-02T08:00:00Z",
        "last_down_at": null,
        "last_fetch_at": "2024-05-02T08:00:00Z",
        "next_fetch_at": "2024-05-02T08:03:00Z",
        "fetch_interval": 180,
        "confirmation_period": 0,
        "paused": false,
        "alerts_on": true,
        "call": false,
        "send_sms": false,
        "send_email": true,
        "send_push_notification": false,
        "maintenance_window_from": null,
        "maintenance_window_until": null,
        "maintenance_window_timezone": "Europe/Belfast",
        "alert_week_days": [0, 1, 2, 3, 4, 5, 6]
    })
}

/// Single-page list envelope wrapping the given records.
pub fn page_body(records: &[Value]) -> Value {
    json!({
        "data": records,
        "per_page": 50,
        "pages_count": 1,
        "count": records.len(),
        "total_count": records.len(),
        "page": 1,
        "next_page": null,
        "prev_page": null
    })
}
