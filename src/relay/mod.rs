//! Relay subsystem.
//!
//! # Design Decisions
//! - Exactly one outbound endpoint, taken from configuration only
//! - Every call is bounded by the configured timeout
//! - No retries; the submitter resubmits
//! - Endpoint down and endpoint rejected collapse into the same failure

pub mod webhook;

pub use webhook::{RelayError, WebhookRelay};
