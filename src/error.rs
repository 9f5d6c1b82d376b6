//! Request-boundary error taxonomy.
//!
//! Every failure in the submission pipeline ends up as one of these variants
//! and is rendered as `{ "error": ... }`. Display text is what the client
//! sees, so it never carries upstream detail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::contact::ValidationError;
use crate::relay::RelayError;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Form submission service not configured")]
    NotConfigured,

    #[error("Too many requests. Please try again later.")]
    RateLimited,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to save submission. Please try again later.")]
    Relay(#[from] RelayError),

    #[error("An error occurred. Please try again later.")]
    Unexpected(String),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ContactError::Validation(_) => StatusCode::BAD_REQUEST,
            ContactError::NotConfigured | ContactError::Relay(_) | ContactError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Metrics label for this outcome.
    pub fn outcome(&self) -> &'static str {
        match self {
            ContactError::NotConfigured => "not_configured",
            ContactError::RateLimited => "rate_limited",
            ContactError::Validation(_) => "invalid",
            ContactError::Relay(_) => "relay_failed",
            ContactError::Unexpected(_) => "error",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ContactError::NotConfigured.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ContactError::RateLimited.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            ContactError::from(ValidationError::NameRequired).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ContactError::Unexpected("eof".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_hide_detail() {
        let relay = ContactError::from(RelayError::Rejected(StatusCode::BAD_GATEWAY));
        assert_eq!(
            relay.to_string(),
            "Failed to save submission. Please try again later."
        );
        assert!(relay.source().is_some());

        let unexpected = ContactError::Unexpected("expected value at line 1".into());
        assert_eq!(
            unexpected.to_string(),
            "An error occurred. Please try again later."
        );
    }

    #[test]
    fn test_validation_message_passes_through() {
        assert_eq!(
            ContactError::from(ValidationError::EmailInvalid).to_string(),
            "Invalid email format"
        );
    }
}
