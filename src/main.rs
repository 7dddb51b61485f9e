// gensen-extract - Gemini-backed 源泉徴収票 field extraction service

use anyhow::Result;
use clap::Parser;
use gensen_extract::cli::Args;
use gensen_extract::config::AppConfig;
use gensen_extract::gemini::GeminiClient;
use gensen_extract::server::create_router;
use gensen_extract::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting gensen-extract v{}", env!("CARGO_PKG_VERSION"));

    if config.gemini.api_key.is_none() {
        // Not fatal: every extract request will fail with a 500 until it is set
        warn!("GEMINI_API_KEY is not set; extraction requests will be rejected");
    }

    // Phase 3: Build the Gemini client
    let gemini_client = GeminiClient::new(&config.gemini)?;

    // Phase 4: Build and start HTTP server
    let app = create_router(config.clone(), gemini_client)?;
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
