//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, human format for development
//! - `RUST_LOG` wins; configured level is the fallback

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Environment, ObservabilityConfig};

/// Install the global subscriber. Call once, before anything logs.
pub fn init(config: &ObservabilityConfig, environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(&config.log_level)));

    let registry = tracing_subscriber::registry().with(filter);
    if use_json(config, environment) {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

fn use_json(config: &ObservabilityConfig, environment: Environment) -> bool {
    config.json_logs || environment.is_production()
}

/// Scope a bare level to this crate and the HTTP middleware.
fn filter_directive(level: &str) -> String {
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("contact_relay={level},tower_http={level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("debug"), "contact_relay=debug,tower_http=debug");
        assert_eq!(filter_directive("contact_relay=trace"), "contact_relay=trace");
    }

    #[test]
    fn test_production_forces_json() {
        let config = ObservabilityConfig::default();
        assert!(!use_json(&config, Environment::Development));
        assert!(use_json(&config, Environment::Production));
    }
}
