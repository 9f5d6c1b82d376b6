//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming submission:
//!     → client_id.rs (derive bucket key from X-Forwarded-For)
//!     → rate_limit.rs (sliding-window check per key)
//!     → Pass to form validation
//! ```
//!
//! # Design Decisions
//! - Rate limiting runs before the body is parsed
//! - Store is injected as a trait object, built once at startup
//! - Honeypot handling lives with the form validator, not here

pub mod client_id;
pub mod rate_limit;

pub use client_id::{client_id, UNKNOWN_CLIENT};
pub use rate_limit::{RateLimitStore, SlidingWindowLimiter};
