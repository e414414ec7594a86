//! Integration tests for the async logs surface
//!
//! **Coverage:**
//! - Whole-batch POST to the configured collect endpoint
//! - Null-preserving item serialization on the wire
//! - Empty batch behavior and error taxonomy

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use chrono::{TimeZone, Utc};
use serde_json::json;
use upassist_client::api::ApiError;
use upassist_client::entities::Logs;
use upassist_client::{ApiConfig, LogItem};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ApiConfig {
    ApiConfig::default()
        .with_logs_host(format!("{}/collect", server.uri()))
        .with_api_key("test-token")
}

#[tokio::test]
async fn collect_posts_batch_with_explicit_nulls() {
    let mock_server = MockServer::start().await;

    let expected = json!([
        {
            "dt": "2024-05-02T08:00:00Z",
            "host": "web-1",
            "message": "disk almost full",
            "file": null,
            "data": null
        },
        {
            "dt": null,
            "host": null,
            "message": "second line",
            "file": null,
            "data": null
        }
    ]);

    Mock::given(method("POST"))
        .and(path("/collect"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "accepted"})))
        .mount(&mock_server)
        .await;

    let logs = Logs::new(config_for(&mock_server)).unwrap();
    let items = vec![
        LogItem::new()
            .with_dt(Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap())
            .with_host("web-1")
            .with_message("disk almost full"),
        LogItem::new().with_message("second line"),
    ];

    let response = logs.collect(&items).await.unwrap();
    assert_eq!(response.detail.as_deref(), Some("accepted"));
}

#[tokio::test]
async fn collect_accepts_empty_batch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/collect"))
        .and(body_json(json!([])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "accepted"})))
        .mount(&mock_server)
        .await;

    let logs = Logs::new(config_for(&mock_server)).unwrap();
    let response = logs.collect(&[]).await.unwrap();
    assert_eq!(response.detail.as_deref(), Some("accepted"));

    let requests = mock_server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn collect_does_not_touch_api_host() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/collect"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "accepted"})))
        .mount(&mock_server)
        .await;

    // API host stays at the unreachable default; the collect URL alone
    // decides where the batch goes
    let logs = Logs::new(config_for(&mock_server)).unwrap();
    logs.collect(&[LogItem::new().with_message("ping")]).await.unwrap();

    let requests = mock_server.received_requests().await.expect("recording enabled");
    assert_eq!(requests[0].url.path(), "/collect");
}

#[tokio::test]
async fn rejected_batch_surfaces_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/collect"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"detail": "too large"})))
        .mount(&mock_server)
        .await;

    let logs = Logs::new(config_for(&mock_server)).unwrap();
    let err = logs.collect(&[LogItem::new()]).await.unwrap_err();

    match err {
        ApiError::Api { status, body, .. } => {
            assert_eq!(status, 422);
            assert_eq!(body, Some(json!({"detail": "too large"})));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
