// wiki2brief - Wikipedia summarizer hub backed by the Mistral AI chat API
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;
use wiki2brief::cli::Args;
use wiki2brief::config::AppConfig;
use wiki2brief::server::create_router;
use wiki2brief::summarizer::Summarizer;
use wiki2brief::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let config = AppConfig::load(args.config.as_deref())?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting wiki2brief v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build the summarizer (vendor clients, credential pool, cache)
    let summarizer = Summarizer::new(&config)?;
    info!(
        "Summarizer ready: {} API keys, cache {}",
        summarizer.credential_pool_size(),
        if config.cache.enabled { "enabled" } else { "disabled" }
    );

    // Phase 4: Build and start HTTP server
    let app = create_router(config.clone(), summarizer)?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
