//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with both service routes
//! - Wire up middleware (request ID, tracing)
//! - Serve requests on a bound listener until shutdown
//!
//! # Design Decisions
//! - The router is an explicit instance built at startup; no routes are
//!   registered against ambient global state
//! - Both routes are POST-only; other methods get 405 from the router
//! - No request timeout is configured: a request runs to completion, and
//!   a client disconnect simply abandons the in-flight response write

use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::http::request::RequestIdLayer;
use crate::service::StringService;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: StringService,
}

/// HTTP server for the string service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState {
            service: StringService::new(),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/uppercase", post(handlers::uppercase))
            .route("/count", post(handlers::count))
            .with_state(state)
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns when a ctrl-c arrives or `shutdown` fires, after in-flight
    /// requests drain.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
