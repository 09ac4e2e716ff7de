//! Live docstring lookup server.
//!
//! Serves a host process's symbol documentation over a small plain-text
//! HTTP API, built with Tokio and Axum.

use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;

use explaind::config::loader::load_config;
use explaind::config::ServerConfig;
use explaind::observability::{logging, metrics};
use explaind::{HttpServer, SymbolTable};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("explaind=debug,tower_http=debug");

    tracing::info!("explaind v{} starting", env!("CARGO_PKG_VERSION"));

    // Optional config file path as the sole argument; defaults otherwise.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => ServerConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        symbols = config.symbols.len(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    let docs = Arc::new(SymbolTable::from_config(&config.symbols));
    let server = HttpServer::new(config, docs);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
