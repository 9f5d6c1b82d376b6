//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use contact_relay::{HttpServer, RelayConfig, Shutdown};
use serde_json::Value;
use tokio::net::TcpListener;

#[derive(Clone)]
struct WebhookState {
    status: StatusCode,
    delay: Duration,
    received: Arc<Mutex<Vec<Value>>>,
}

/// A programmable stand-in for the spreadsheet webhook.
pub struct MockWebhook {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockWebhook {
    pub fn url(&self) -> String {
        format!("http://{}/exec", self.addr)
    }

    /// Bodies received so far, in arrival order.
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn record(State(state): State<WebhookState>, Json(body): Json<Value>) -> StatusCode {
    tokio::time::sleep(state.delay).await;
    state.received.lock().unwrap().push(body);
    state.status
}

/// Start a webhook that answers every POST with `status` after `delay`.
pub async fn start_webhook(status: u16, delay: Duration) -> MockWebhook {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let received = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new().route("/exec", post(record)).with_state(WebhookState {
        status: StatusCode::from_u16(status).unwrap(),
        delay,
        received: received.clone(),
    });

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockWebhook { addr, received }
}

/// A URL on a local port with nothing listening.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/exec", addr)
}

/// Config pointing at `webhook_url` with a short relay timeout.
pub fn config_for(webhook_url: Option<String>) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.relay.webhook_url = webhook_url;
    config.relay.timeout_secs = 1;
    config
}

/// Start the relay on an ephemeral port.
pub async fn start_relay(config: RelayConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let stop = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, stop).await;
    });

    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// POST a submission as `ip` and return status and JSON body.
pub async fn submit(relay: SocketAddr, ip: &str, body: &Value) -> (u16, Value) {
    let res = client()
        .post(format!("http://{}/api/contact", relay))
        .header("x-forwarded-for", ip)
        .json(body)
        .send()
        .await
        .expect("relay unreachable");
    let status = res.status().as_u16();
    (status, res.json().await.unwrap())
}
