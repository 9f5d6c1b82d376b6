//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, trace, timeout)
//!     → contact.rs (guard, validate, relay, map outcome to response)
//!     → error.rs / Acknowledgement (JSON response)
//!     → Send to client
//! ```

pub mod contact;
pub mod server;

pub use contact::Acknowledgement;
pub use server::{AppState, HttpServer};
