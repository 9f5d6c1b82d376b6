//! Contact form submission types.

use serde::Serialize;
use serde_json::{Map, Value};

/// Raw form fields as received.
///
/// A field that is missing or is not a JSON string is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    /// Honeypot. Hidden from humans, so it must stay empty.
    pub company: Option<String>,
}

impl Submission {
    /// Extract the known fields from a JSON object.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            name: text("name"),
            email: text("email"),
            message: text("message"),
            company: text("company"),
        }
    }

    /// True when the honeypot carries anything other than whitespace.
    pub fn honeypot_filled(&self) -> bool {
        self.company
            .as_deref()
            .is_some_and(|company| !company.trim().is_empty())
    }
}

/// A validated, sanitized submission ready to be relayed.
///
/// Only the validator can build one, so holding a value proves every field
/// check passed and the honeypot was empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedSubmission {
    name: String,
    email: String,
    message: String,
}

impl NormalizedSubmission {
    pub(crate) fn new(name: String, email: String, message: String) -> Self {
        Self {
            name,
            email,
            message,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
