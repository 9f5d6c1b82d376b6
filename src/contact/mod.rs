//! Contact form subsystem.
//!
//! # Data Flow
//! ```text
//! JSON body (serde_json::Value)
//!     → submission.rs (extract string fields)
//!     → validator.rs (honeypot, field rules)
//!     → sanitize.rs (trim + strip tags)
//!     → NormalizedSubmission (handed to the relay)
//! ```

pub mod sanitize;
pub mod submission;
pub mod validator;

pub use sanitize::strip_tags;
pub use submission::{NormalizedSubmission, Submission};
pub use validator::{validate, ValidationError, ValidationResult};
