//! Contact form relay library.
//!
//! Accepts contact-form submissions, rate limits them per client, validates
//! and sanitizes the fields, absorbs honeypot spam, and forwards clean
//! submissions to a spreadsheet webhook.

pub mod config;
pub mod contact;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;
pub mod security;

pub use config::schema::RelayConfig;
pub use error::ContactError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
