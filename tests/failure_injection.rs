//! Failure injection tests for the webhook relay.

use std::time::Duration;

use contact_relay::config::{validation::validate_config, ConfigValidationError, Environment};
use serde_json::json;

mod common;

fn submission() -> serde_json::Value {
    json!({
        "name": "Jane",
        "email": "jane@x.com",
        "message": "Hello, I need help with your service."
    })
}

fn relay_failed() -> serde_json::Value {
    json!({ "error": "Failed to save submission. Please try again later." })
}

#[tokio::test]
async fn test_unreachable_webhook() {
    let url = common::unreachable_url().await;
    let (relay, shutdown) = common::start_relay(common::config_for(Some(url))).await;

    let (status, body) = common::submit(relay, "192.0.2.1", &submission()).await;

    assert_eq!(status, 500);
    assert_eq!(body, relay_failed());

    shutdown.trigger();
}

#[tokio::test]
async fn test_webhook_error_status() {
    for code in [400, 404, 500, 503] {
        let webhook = common::start_webhook(code, Duration::ZERO).await;
        let (relay, shutdown) =
            common::start_relay(common::config_for(Some(webhook.url()))).await;

        let (status, body) = common::submit(relay, "192.0.2.2", &submission()).await;

        assert_eq!(status, 500, "webhook status {code}");
        assert_eq!(body, relay_failed());
        assert_eq!(webhook.received().len(), 1, "no retries for {code}");

        shutdown.trigger();
    }
}

#[tokio::test]
async fn test_slow_webhook_times_out() {
    let webhook = common::start_webhook(200, Duration::from_secs(3)).await;
    let (relay, shutdown) = common::start_relay(common::config_for(Some(webhook.url()))).await;

    let started = std::time::Instant::now();
    let (status, body) = common::submit(relay, "192.0.2.3", &submission()).await;

    assert_eq!(status, 500);
    assert_eq!(body, relay_failed());
    assert!(started.elapsed() < Duration::from_secs(3));

    shutdown.trigger();
}

#[tokio::test]
async fn test_unconfigured_webhook() {
    let mut config = common::config_for(None);
    config.environment = Environment::Production;

    // Startup would refuse this config; the handler still fails closed.
    assert_eq!(
        validate_config(&config).unwrap_err(),
        vec![ConfigValidationError::MissingWebhook]
    );

    let (relay, shutdown) = common::start_relay(config).await;
    let (status, body) = common::submit(relay, "192.0.2.4", &submission()).await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "Form submission service not configured" }));

    shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown_stops_accepting() {
    let webhook = common::start_webhook(200, Duration::ZERO).await;
    let (relay, shutdown) = common::start_relay(common::config_for(Some(webhook.url()))).await;

    let (status, _) = common::submit(relay, "192.0.2.5", &submission()).await;
    assert_eq!(status, 200);

    shutdown.trigger();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let result = common::client()
        .get(format!("http://{}/health", relay))
        .send()
        .await;
    assert!(result.is_err(), "server should be closed after shutdown");
}
