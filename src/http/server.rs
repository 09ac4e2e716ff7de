//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Dispatch requests to the lookup core

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::explain::handlers::{get_explain, get_function_doc, get_help, get_value_doc};
use crate::http::request::RequestIdLayer;
use crate::source::DocSource;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Host-provided, read-only documentation source.
    pub docs: Arc<dyn DocSource>,
}

/// HTTP server for the docstring lookup API.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and source.
    pub fn new(config: ServerConfig, docs: Arc<dyn DocSource>) -> Self {
        let state = AppState { docs };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The bare and trailing-slash lookup paths go to the same handlers so
    /// that absent and empty names both reach the validator (axum never
    /// matches an empty `{name}` segment).
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/explain/value/{name}", get(get_value_doc))
            .route("/explain/value/", get(get_value_doc))
            .route("/explain/value", get(get_value_doc))
            .route("/explain/function/{name}", get(get_function_doc))
            .route("/explain/function/", get(get_function_doc))
            .route("/explain/function", get(get_function_doc))
            .route("/explain/explain/{name}", get(get_explain))
            .route("/explain/explain/", get(get_explain))
            .route("/explain/explain", get(get_explain))
            .route("/explain/help", get(get_help))
            .route("/status", get(get_status))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

/// GET `/status`: liveness and version, outside the lookup core.
pub async fn get_status() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
