//! # Table Actors
//!
//! Serves the `/table` API on top of the table actors.
//!
//! The binary wires four pieces together:
//! 1. [`Config`] from flags and `TABLES_*` environment variables,
//! 2. tracing via [`setup_tracing`],
//! 3. the [`RestaurantSystem`] that owns the table router,
//! 4. the axum server, which runs until Ctrl-C.

use anyhow::Context;
use clap::Parser;
use table_actors::config::Config;
use table_actors::lifecycle::{setup_tracing, RestaurantSystem};
use table_actors::server::{build_router, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    setup_tracing(config.log_format);

    info!(?config, "Starting table service");

    let system = RestaurantSystem::new(config.system());
    let state = AppState::from_client(system.table_client.clone());
    let load = state.load().clone();

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    // Diners hold table clients; the router only exits once they are gone.
    load.stop().await;
    drop(load);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
