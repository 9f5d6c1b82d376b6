//! `/api/contact` handlers.
//!
//! ```text
//! webhook configured? → rate limit → read body (size-capped) → parse JSON → validate
//!     → honeypot: 200 without relaying
//!     → invalid:  400 with the broken rule
//!     → valid:    relay → 200 or 500
//! ```

use std::time::Instant;

use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::config::Environment;
use crate::contact::{validate, ValidationResult};
use crate::error::ContactError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::security::client_id;

/// Success-shaped answer. Absorbed spam is indistinguishable in status and shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    Delivered,
    Absorbed,
}

impl Acknowledgement {
    pub fn message(self) -> &'static str {
        match self {
            Acknowledgement::Delivered => "Message received! We will review it shortly.",
            Acknowledgement::Absorbed => "Thank you for reaching out!",
        }
    }

    fn outcome(self) -> &'static str {
        match self {
            Acknowledgement::Delivered => "delivered",
            Acknowledgement::Absorbed => "absorbed",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuccessBody {
    pub success: bool,
    pub message: &'static str,
}

impl IntoResponse for Acknowledgement {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            Json(SuccessBody {
                success: true,
                message: self.message(),
            }),
        )
            .into_response()
    }
}

/// `POST /api/contact`
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Response {
    let start = Instant::now();
    let result = process(&state, &headers, body).await;

    match result {
        Ok(ack) => {
            metrics::record_submission(ack.outcome(), start);
            ack.into_response()
        }
        Err(e) => {
            metrics::record_submission(e.outcome(), start);
            e.into_response()
        }
    }
}

/// `OPTIONS /api/contact`
pub async fn preflight() -> Json<Value> {
    Json(Value::Object(Default::default()))
}

async fn process(
    state: &AppState,
    headers: &HeaderMap,
    body: Body,
) -> Result<Acknowledgement, ContactError> {
    let Some(relay) = state.relay.as_deref() else {
        tracing::error!("Submission refused: webhook not configured");
        return Err(ContactError::NotConfigured);
    };

    let client = client_id(headers);
    if !state.limiter.check(&client) {
        tracing::warn!(client = %client, "Rate limit exceeded");
        metrics::record_rate_limited();
        return Err(ContactError::RateLimited);
    }

    let body = to_bytes(body, state.max_body_size).await.map_err(|e| {
        log_failure(state.environment, &client, "Request body rejected", &e);
        ContactError::Unexpected(e.to_string())
    })?;

    let raw: Value = serde_json::from_slice(&body).map_err(|e| {
        log_failure(state.environment, &client, "Unreadable request body", &e);
        ContactError::Unexpected(e.to_string())
    })?;

    match validate(&raw) {
        ValidationResult::HoneypotTriggered => {
            tracing::info!(client = %client, "Honeypot caught spam submission");
            Ok(Acknowledgement::Absorbed)
        }
        ValidationResult::Invalid(e) => {
            tracing::info!(client = %client, reason = %e, "Submission rejected");
            Err(e.into())
        }
        ValidationResult::Valid(submission) => {
            relay.submit(&submission).await.map_err(|e| {
                log_failure(state.environment, &client, "Webhook relay failed", &e);
                ContactError::from(e)
            })?;
            tracing::info!(client = %client, "Submission relayed");
            Ok(Acknowledgement::Delivered)
        }
    }
}

/// Upstream and parser detail only goes to the log in development.
fn log_failure(
    environment: Environment,
    client: &str,
    what: &'static str,
    error: &dyn std::fmt::Display,
) {
    if environment.is_development() {
        tracing::error!(client = %client, error = %error, "{what}");
    } else {
        tracing::error!(client = %client, "{what}");
    }
}
