//! Ignite Call - registration and Google sign-in server
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use ignitecall_lib::utils::logging::init_tracing;
use ignitecall_domain::constants::SESSION_SWEEP_INTERVAL_SECS;
use ignitecall_lib::{router, AppContext};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before tracing so RUST_LOG from the file applies
    let dotenv = dotenvy::dotenv();
    init_tracing();
    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => warn!(error = %err, "could not load .env file"),
    }

    let config = ignitecall_infra::config::load().context("invalid configuration")?;
    let ctx = Arc::new(AppContext::new(config).context("failed to initialise application")?);

    let sweeper = ctx.sessions.spawn_sweeper(Duration::from_secs(SESSION_SWEEP_INTERVAL_SECS));

    let bind_address = ctx.config.server.bind_address.clone();
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!(address = %bind_address, public_url = %ctx.config.server.public_url, "Ignite Call listening");

    axum::serve(listener, router(ctx)).with_graceful_shutdown(shutdown_signal()).await?;

    sweeper.abort();
    info!("Ignite Call stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
