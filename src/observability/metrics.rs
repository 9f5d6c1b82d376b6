//! Metrics collection and exposition.
//!
//! # Metrics
//! - `contact_submissions_total` (counter): submissions by outcome
//! - `contact_submission_duration_seconds` (histogram): handling latency by outcome
//! - `contact_rate_limited_total` (counter): requests rejected by the guard
//! - `contact_rate_limit_swept_total` (counter): idle client records dropped
//!
//! Recording is a no-op until a recorder is installed.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder with an HTTP scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record the outcome of one `POST /api/contact`.
pub fn record_submission(outcome: &'static str, start: Instant) {
    counter!("contact_submissions_total", "outcome" => outcome).increment(1);
    histogram!("contact_submission_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_rate_limited() {
    counter!("contact_rate_limited_total").increment(1);
}

pub fn record_swept(removed: usize) {
    counter!("contact_rate_limit_swept_total").increment(removed as u64);
}
