//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use stringsvc::{HttpServer, ServiceConfig, Shutdown};
use tokio::net::TcpListener;

/// Bind the service on an ephemeral port and spawn it.
///
/// Returns the bound address and a shutdown handle so tests tear the
/// server down deterministically.
pub async fn start_service() -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(ServiceConfig::default());
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Give the accept loop a moment to come up.
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}

/// Client with connection pooling disabled, so each test request stands
/// alone even while the server is shutting down.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
