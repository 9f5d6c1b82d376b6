//! Startup orchestration.
//!
//! # Responsibilities
//! - Report the relay state for the run mode
//! - Start the metrics exporter when enabled
//! - Bind the listener and serve until a stop signal
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Production without a webhook never reaches here; config validation rejects it
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::RelayConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;
use crate::relay::RelayError;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("relay setup failed: {0}")]
    Relay(#[from] RelayError),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start every subsystem and serve until SIGINT/SIGTERM.
pub async fn run(config: RelayConfig) -> Result<(), StartupError> {
    if config.relay.webhook_url.is_none() {
        tracing::warn!(
            environment = %config.environment,
            "Webhook URL not configured; contact submissions will be refused. \
             Set CONTACT_WEBHOOK_URL to enable delivery."
        );
    }

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let server = HttpServer::new(config)?;

    let address = server.config().server.bind_address.clone();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    tracing::info!(
        address = %listener.local_addr()?,
        rate_limit = server.config().rate_limit.max_requests,
        window_secs = server.config().rate_limit.window_secs,
        "Listening for submissions"
    );

    let shutdown = Shutdown::new();
    let stop = shutdown.subscribe();
    signals::forward_to(shutdown);

    server.run(listener, stop).await?;
    Ok(())
}
