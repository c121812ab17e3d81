//! Service entry point: configuration, logging, bind, serve.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use stringsvc::config::{self, ServiceConfig};
use stringsvc::observability;
use stringsvc::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "stringsvc")]
#[command(about = "JSON-over-HTTP string processing service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => ServiceConfig::default(),
    };

    observability::init_logging(&config.observability);

    tracing::info!("stringsvc v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        log_filter = %config.observability.log_filter,
        "Configuration loaded"
    );

    // A bind failure is the one fatal top-level error path.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
