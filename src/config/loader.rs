//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{Environment, RelayConfig};
use crate::config::validation::{validate_config, ConfigValidationError};

/// Webhook endpoint the relay forwards submissions to.
pub const ENV_WEBHOOK_URL: &str = "CONTACT_WEBHOOK_URL";
/// Older name for the webhook endpoint, used when `CONTACT_WEBHOOK_URL` is unset.
pub const ENV_WEBHOOK_URL_LEGACY: &str = "GOOGLE_SHEET_WEBHOOK_URL";
/// Run mode: `development` or `production`.
pub const ENV_ENVIRONMENT: &str = "CONTACT_RELAY_ENV";
/// Listener bind address.
pub const ENV_BIND_ADDRESS: &str = "CONTACT_RELAY_BIND";
/// Fallback log level when `RUST_LOG` is unset.
pub const ENV_LOG_LEVEL: &str = "CONTACT_RELAY_LOG";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid {name} value: {value}")]
    Override { name: &'static str, value: String },

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ConfigValidationError>),
}

fn join(errors: &[ConfigValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load, override from the process environment, and validate configuration.
///
/// Without a path the built-in defaults are the starting point.
pub fn load_config(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    let mut config: RelayConfig = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => RelayConfig::default(),
    };

    apply_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides using `lookup` to resolve variable names.
///
/// Empty values are treated as unset.
pub fn apply_overrides<F>(config: &mut RelayConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = get(ENV_WEBHOOK_URL).or_else(|| get(ENV_WEBHOOK_URL_LEGACY)) {
        config.relay.webhook_url = Some(url.trim().to_string());
    }
    if let Some(mode) = get(ENV_ENVIRONMENT) {
        config.environment = Environment::parse(&mode).ok_or(ConfigError::Override {
            name: ENV_ENVIRONMENT,
            value: mode,
        })?;
    }
    if let Some(bind) = get(ENV_BIND_ADDRESS) {
        config.server.bind_address = bind;
    }
    if let Some(level) = get(ENV_LOG_LEVEL) {
        config.observability.log_level = level;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = RelayConfig::default();
        apply_overrides(
            &mut config,
            lookup(&[
                (ENV_WEBHOOK_URL, " https://hooks.example.com/exec "),
                (ENV_ENVIRONMENT, "production"),
                (ENV_BIND_ADDRESS, "127.0.0.1:4000"),
            ]),
        )
        .unwrap();

        assert_eq!(
            config.relay.webhook_url.as_deref(),
            Some("https://hooks.example.com/exec")
        );
        assert!(config.environment.is_production());
        assert_eq!(config.server.bind_address, "127.0.0.1:4000");
    }

    #[test]
    fn test_empty_override_is_unset() {
        let mut config = RelayConfig::default();
        apply_overrides(&mut config, lookup(&[(ENV_WEBHOOK_URL, "  ")])).unwrap();
        assert!(config.relay.webhook_url.is_none());
    }

    #[test]
    fn test_legacy_webhook_variable() {
        let mut config = RelayConfig::default();
        apply_overrides(
            &mut config,
            lookup(&[(ENV_WEBHOOK_URL_LEGACY, "https://script.example.com/exec")]),
        )
        .unwrap();
        assert_eq!(
            config.relay.webhook_url.as_deref(),
            Some("https://script.example.com/exec")
        );

        let mut config = RelayConfig::default();
        apply_overrides(
            &mut config,
            lookup(&[
                (ENV_WEBHOOK_URL, "https://hooks.example.com/new"),
                (ENV_WEBHOOK_URL_LEGACY, "https://script.example.com/exec"),
            ]),
        )
        .unwrap();
        assert_eq!(
            config.relay.webhook_url.as_deref(),
            Some("https://hooks.example.com/new")
        );
    }

    #[test]
    fn test_unknown_environment_rejected() {
        let mut config = RelayConfig::default();
        let err = apply_overrides(&mut config, lookup(&[(ENV_ENVIRONMENT, "staging")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Override { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "contact-relay-config-{}.toml",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[rate_limit]\nmax_requests = 5\n\n[relay]\nwebhook_url = \"http://127.0.0.1:9/hook\""
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.rate_limit.max_requests, 5);
        assert_eq!(config.rate_limit.window_secs, 60);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Some(Path::new("/nonexistent/contact-relay.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
