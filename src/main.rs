//! ERP mock API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id → trace → CORS → timeout → metrics
//!                        → error envelope → panic catcher
//!                        → route table → handler (fixed data / echo + id)
//!     Client Response
//!     ◀────────────── {success, data | message}  or  {success: false, message}
//! ```
//!
//! Configuration comes from an optional TOML file, then `PORT`, `APP_ENV`
//! and `LOG_LEVEL`, then command-line flags.

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use erp_api::config::{load_config, loader::process_env, Environment};
use erp_api::lifecycle::{signals, Shutdown};
use erp_api::observability::{logging, metrics};
use erp_api::ApiServer;

#[derive(Parser, Debug)]
#[command(name = "erp-api", version, about = "Mock HTTP backend for the ERP prototype")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listener port (overrides file and PORT).
    #[arg(short, long)]
    port: Option<u16>,

    /// Runtime mode: development or production (overrides file and APP_ENV).
    #[arg(short, long)]
    env: Option<Environment>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref(), process_env)?;
    if let Some(port) = args.port {
        config.listener.port = port;
    }
    if let Some(env) = args.env {
        config.environment = env;
    }

    logging::init_logging(&config.observability)?;

    tracing::info!("erp-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.bind_address(),
        environment = %config.environment,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(e) => tracing::error!(error = %e, "Failed to parse metrics address"),
        }
    }

    let listener = TcpListener::bind(config.bind_address()).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");
    tracing::info!("Acesse: http://localhost:{}", local_addr.port());

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    let server = ApiServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
