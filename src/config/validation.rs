//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, window > 0)
//! - Check the webhook URL is a usable http(s) endpoint
//! - Enforce that production deployments have a webhook
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ConfigValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("relay.webhook_url is required in production")]
    MissingWebhook,

    #[error("relay.webhook_url is not a valid URL: {0}")]
    InvalidWebhookUrl(String),

    #[error("relay.webhook_url must use http or https, got {0}")]
    UnsupportedScheme(String),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Check a configuration for semantic errors.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ConfigValidationError>> {
    let mut errors = Vec::new();

    match config.relay.webhook_url.as_deref() {
        Some(raw) => match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(ConfigValidationError::UnsupportedScheme(
                url.scheme().to_string(),
            )),
            Err(e) => errors.push(ConfigValidationError::InvalidWebhookUrl(e.to_string())),
        },
        None if config.environment.is_production() => {
            errors.push(ConfigValidationError::MissingWebhook)
        }
        None => {}
    }

    let positive = [
        ("relay.timeout_secs", config.relay.timeout_secs as u128),
        ("rate_limit.window_secs", config.rate_limit.window_secs as u128),
        ("rate_limit.max_requests", config.rate_limit.max_requests as u128),
        (
            "rate_limit.sweep_interval_secs",
            config.rate_limit.sweep_interval_secs as u128,
        ),
        (
            "server.request_timeout_secs",
            config.server.request_timeout_secs as u128,
        ),
        ("server.max_body_size", config.server.max_body_size as u128),
    ];
    for (field, value) in positive {
        if value == 0 {
            errors.push(ConfigValidationError::Zero(field));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Environment;

    #[test]
    fn test_default_development_config_is_valid() {
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn test_production_requires_webhook() {
        let mut config = RelayConfig::default();
        config.environment = Environment::Production;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ConfigValidationError::MissingWebhook]);

        config.relay.webhook_url = Some("https://hooks.example.com/exec".into());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_bad_urls() {
        let mut config = RelayConfig::default();
        config.relay.webhook_url = Some("not a url".into());
        assert!(matches!(
            validate_config(&config).unwrap_err()[0],
            ConfigValidationError::InvalidWebhookUrl(_)
        ));

        config.relay.webhook_url = Some("ftp://files.example.com/drop".into());
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ConfigValidationError::UnsupportedScheme("ftp".into())]
        );
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = RelayConfig::default();
        config.environment = Environment::Production;
        config.rate_limit.window_secs = 0;
        config.rate_limit.max_requests = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ConfigValidationError::Zero("rate_limit.window_secs")));
        assert!(errors.contains(&ConfigValidationError::Zero("rate_limit.max_requests")));
    }
}
