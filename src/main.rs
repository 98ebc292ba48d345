#![forbid(unsafe_code)]
//! todo-web entry point

use anyhow::{Context, Result};
use clap::Parser;
use todo_web::{build_router, AppState, Args, ServerConfig};
use tokio::net::TcpListener;
use tracing::{error, info};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from(Args::parse());

    rolling_logger::init_logger(&config.log_dir, "todo-web")
        .context("failed to init rolling logger")?;
    let _ = rolling_logger::info("Logger initialized");

    let state = AppState::new(&config);
    let app = build_router(state);

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    info!(
        addr = %config.addr,
        static_dir = %config.static_dir.display(),
        logged_in = config.viewer.logged_in(),
        "todo-web listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("todo-web stopped");
    Ok(())
}
