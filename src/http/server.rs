//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, timeout)
//! - Own the shared rate-limit store and webhook relay
//! - Sweep idle rate-limit records in the background
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{Environment, RelayConfig};
use crate::http::contact;
use crate::observability::metrics;
use crate::relay::{RelayError, WebhookRelay};
use crate::security::{RateLimitStore, SlidingWindowLimiter};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub limiter: Arc<dyn RateLimitStore>,
    /// `None` when no webhook is configured.
    pub relay: Option<Arc<WebhookRelay>>,
    pub environment: Environment,
    /// Bodies are buffered by the handler, after the guard, up to this size.
    pub max_body_size: usize,
}

/// HTTP server for the contact relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
    limiter: Arc<dyn RateLimitStore>,
}

impl HttpServer {
    /// Create a server backed by the in-memory sliding-window limiter.
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let limiter = Arc::new(SlidingWindowLimiter::from_config(&config.rate_limit));
        Self::with_store(config, limiter)
    }

    /// Create a server around an existing rate-limit store.
    pub fn with_store(
        config: RelayConfig,
        limiter: Arc<dyn RateLimitStore>,
    ) -> Result<Self, RelayError> {
        let relay = WebhookRelay::from_config(&config.relay)?.map(Arc::new);

        let state = AppState {
            limiter: limiter.clone(),
            relay,
            environment: config.environment,
            max_body_size: config.server.max_body_size,
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            limiter,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/api/contact",
                post(contact::submit).options(contact::preflight),
            )
            .route("/health", get(health))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// A handle to the router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Run the server, accepting connections until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            environment = %self.config.environment,
            "HTTP server starting"
        );

        let sweeper = spawn_sweeper(
            self.limiter.clone(),
            self.config.rate_limit.sweep_interval(),
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        sweeper.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Periodically drop rate-limit records for clients that went quiet.
fn spawn_sweeper(limiter: Arc<dyn RateLimitStore>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        loop {
            interval.tick().await;
            let removed = limiter.sweep();
            if removed > 0 {
                tracing::debug!(removed, "Swept idle rate-limit records");
                metrics::record_swept(removed);
            }
        }
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub relay_configured: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        relay_configured: state.relay.is_some(),
    })
}
