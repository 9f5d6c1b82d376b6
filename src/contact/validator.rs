//! Contact form validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//! - body must be a JSON object
//! - honeypot (`company`) must be blank, otherwise the submission is absorbed
//! - name, email, message presence and bounds
//!
//! Valid submissions come out trimmed and tag-stripped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::contact::sanitize::normalize;
use crate::contact::submission::{NormalizedSubmission, Submission};

/// Maximum name length in characters.
pub const NAME_MAX_CHARS: usize = 100;
/// Minimum message length in characters.
pub const MESSAGE_MIN_CHARS: usize = 10;
/// Maximum message length in characters.
pub const MESSAGE_MAX_CHARS: usize = 5000;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validation error types. The display text is sent to the client as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid request body")]
    InvalidBody,

    #[error("Name is required")]
    NameRequired,

    #[error("Name is too long")]
    NameTooLong,

    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email format")]
    EmailInvalid,

    #[error("Message is required")]
    MessageRequired,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,

    #[error("Message is too long")]
    MessageTooLong,
}

/// Result of validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Submission passed every check
    Valid(NormalizedSubmission),
    /// Submission broke a rule
    Invalid(ValidationError),
    /// Honeypot was filled; caller must answer as if it succeeded
    HoneypotTriggered,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn error(&self) -> Option<ValidationError> {
        match self {
            ValidationResult::Invalid(e) => Some(*e),
            _ => None,
        }
    }
}

/// Validate a raw request body.
pub fn validate(raw: &Value) -> ValidationResult {
    match raw.as_object() {
        Some(object) => validate_submission(&Submission::from_object(object)),
        None => {
            debug!("Request body is not an object");
            ValidationResult::Invalid(ValidationError::InvalidBody)
        }
    }
}

/// Validate already-extracted form fields.
pub fn validate_submission(submission: &Submission) -> ValidationResult {
    if submission.honeypot_filled() {
        debug!("Honeypot field filled");
        return ValidationResult::HoneypotTriggered;
    }

    match check_fields(submission) {
        Ok(normalized) => ValidationResult::Valid(normalized),
        Err(e) => {
            debug!(error = %e, "Field validation failed");
            ValidationResult::Invalid(e)
        }
    }
}

fn check_fields(submission: &Submission) -> Result<NormalizedSubmission, ValidationError> {
    let raw_name = submission.name.as_deref();
    let name = non_blank(raw_name).ok_or(ValidationError::NameRequired)?;
    // The bound applies to the name as sent, padding included.
    if raw_name.map_or(0, |n| n.chars().count()) > NAME_MAX_CHARS {
        return Err(ValidationError::NameTooLong);
    }

    let email = submission
        .email
        .as_deref()
        .filter(|e| !e.is_empty())
        .ok_or(ValidationError::EmailRequired)?;
    if !is_valid_email(email) {
        return Err(ValidationError::EmailInvalid);
    }

    let message =
        non_blank(submission.message.as_deref()).ok_or(ValidationError::MessageRequired)?;
    let length = message.chars().count();
    if length < MESSAGE_MIN_CHARS {
        return Err(ValidationError::MessageTooShort);
    }
    if length > MESSAGE_MAX_CHARS {
        return Err(ValidationError::MessageTooLong);
    }

    Ok(NormalizedSubmission::new(
        normalize(name),
        normalize(email),
        normalize(message),
    ))
}

/// Trimmed view of a field, or `None` when missing or whitespace-only.
fn non_blank(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

/// `local@domain.tld` shape check with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
