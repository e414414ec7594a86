//! Example: Recording a heartbeat check-in
//!
//! This example pings the event endpoint for one monitor and, when an API
//! key is configured, lists the monitors on the account.
//!
//! # Setup
//!
//! 1. Export your credentials: ```bash export UPASSIST_API_KEY=... ```
//!
//! 2. Run the example with a monitor slug: ```bash cargo run --example
//!    heartbeat_event -- my-monitor ```

use upassist_client::entities::{Heartbeat, ListQuery};
use upassist_client::ApiConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("UpAssist Heartbeat Example");
    println!("==========================\n");

    let slug = std::env::args().nth(1).unwrap_or_else(|| "test-heartbeat".to_string());
    let config = ApiConfig::from_env();
    let has_key = config.api_key.is_some();

    // Example 1: record a check-in for one monitor
    println!("Pinging heartbeat '{}'", slug);
    let heartbeat = Heartbeat::new(config.clone())?.with_slug(&slug);
    match heartbeat.event().await {
        Ok(response) => {
            println!("✓ Event recorded: {}\n", response.detail.unwrap_or_else(|| "ok".to_string()));
        }
        Err(e) => {
            println!("✗ Event failed: {}\n", e);
        }
    }

    // Example 2: list monitors (needs an API key)
    if has_key {
        println!("Listing monitors");
        let monitors = Heartbeat::new(config)?;
        match monitors.list(ListQuery::new().with_per_page(10)).await {
            Ok(page) => {
                println!("✓ {} of {} monitors:", page.count, page.total_count);
                for record in &page.data {
                    let state = record.status.map_or("UNKNOWN", |s| s.as_str());
                    println!("  {:<30} {}", record.slug, state);
                }
            }
            Err(e) => {
                println!("✗ List failed: {}", e);
            }
        }
    } else {
        println!("ℹ UPASSIST_API_KEY not set, skipping the list example");
    }

    Ok(())
}
