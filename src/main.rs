//! Contact form relay (v1)
//!
//! A single-endpoint submission service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌────────────────────────────────────────────────┐
//!                        │                 CONTACT RELAY                   │
//!                        │                                                 │
//!   POST /api/contact    │  ┌──────────┐   ┌──────────┐   ┌────────────┐  │
//!   ─────────────────────┼─▶│  http    │──▶│ security │──▶│  contact   │  │
//!                        │  │  server  │   │rate limit│   │ validator  │  │
//!                        │  └──────────┘   └──────────┘   └─────┬──────┘  │
//!                        │                                      │         │
//!                        │                                      ▼         │
//!   JSON response        │  ┌──────────┐                 ┌────────────┐   │    Spreadsheet
//!   ◀────────────────────┼──│  error / │◀────────────────│   relay    │───┼──▶ webhook
//!                        │  │   ack    │                 │  webhook   │   │
//!                        │  └──────────┘                 └────────────┘   │
//!                        │                                                 │
//!                        │  config · lifecycle · observability             │
//!                        └────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use contact_relay::config::load_config;
use contact_relay::lifecycle::startup;
use contact_relay::observability::logging;

#[derive(Parser)]
#[command(name = "contact-relay")]
#[command(about = "Contact form submission relay", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "CONTACT_RELAY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("contact-relay: configuration error: {e}");
            std::process::exit(1);
        }
    };

    logging::init(&config.observability, config.environment);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        bind_address = %config.server.bind_address,
        relay_timeout_secs = config.relay.timeout_secs,
        "contact-relay starting"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
