//! Live tests against the real smart-me API.
//!
//! Credentials come from `SMARTME_USERNAME` / `SMARTME_PASSWORD` (a `.env`
//! file is honored) or from `~/.smartme-client-config.json`. Tests skip
//! themselves when neither is available.
//!
//! Run: cargo test --test live_integration -- --nocapture --ignored

use chrono::{Duration, Utc};
use smartme::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn load_credentials() -> Option<Credentials> {
    dotenvy::dotenv().ok();
    Credentials::from_env()
        .or_else(|_| Credentials::from_default_file())
        .ok()
        .filter(Credentials::is_complete)
}

fn live_client() -> Option<SmartMeClient> {
    let Some(credentials) = load_credentials() else {
        println!("Skipping live test: no smart-me credentials configured");
        return None;
    };
    Some(SmartMeClient::from_credentials(&credentials).expect("client should build"))
}

async fn first_device_id(client: &SmartMeClient, ctx: &RequestContext) -> Option<String> {
    let devices = client.get_devices(ctx).await.expect("get_devices failed");
    devices.into_iter().find_map(|d| d.id)
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
#[ignore]
async fn test_live_get_devices() {
    let Some(client) = live_client() else { return };
    let ctx = RequestContext::background();

    let devices = client.get_devices(&ctx).await.expect("get_devices failed");
    println!("Retrieved {} devices", devices.len());

    if let Some(device) = devices.first() {
        println!(
            "-> First device: name={:?} id={:?}",
            device.name.as_deref().unwrap_or_default(),
            device.id.as_deref().unwrap_or_default()
        );
    }
}

#[tokio::test]
#[ignore]
async fn test_live_get_values() {
    let Some(client) = live_client() else { return };
    let ctx = RequestContext::background();

    let Some(device_id) = first_device_id(&client, &ctx).await else {
        println!("Skipping: account has no devices");
        return;
    };

    let values = client.get_values(&ctx, &device_id).await.expect("get_values failed");
    assert_eq!(values.device_id.to_lowercase(), device_id.to_lowercase());
    println!("{} values at {}", values.values.len(), values.date);
}

#[tokio::test]
#[ignore]
async fn test_live_get_values_in_past() {
    let Some(client) = live_client() else { return };
    let ctx = RequestContext::background();

    let Some(device_id) = first_device_id(&client, &ctx).await else {
        println!("Skipping: account has no devices");
        return;
    };

    let yesterday = Utc::now() - Duration::days(1);
    let value = client
        .get_values_in_past(&ctx, &device_id, &yesterday)
        .await
        .expect("get_values_in_past failed");
    assert!(value.date <= yesterday);
    println!("Value before {}: {} at {}", yesterday, value.value, value.date);
}

#[tokio::test]
#[ignore]
async fn test_live_get_values_in_past_multiple() {
    let Some(client) = live_client() else { return };
    let ctx = RequestContext::background();

    let Some(device_id) = first_device_id(&client, &ctx).await else {
        println!("Skipping: account has no devices");
        return;
    };

    let end = Utc::now();
    let start = end - Duration::hours(6);
    match client
        .get_values_in_past_multiple(&ctx, &device_id, &start, &end)
        .await
    {
        Ok(values) => println!("Retrieved {} historical values", values.len()),
        // Needs a professional license.
        Err(e) if e.status_code().is_some() => println!("Range query rejected: {}", e),
        Err(e) => panic!("get_values_in_past_multiple failed: {}", e),
    }
}
