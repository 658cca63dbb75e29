//! Fantasy Dashboard Gateway
//!
//! Entry point for the dashboard backend. Loads configuration, builds the
//! player lookup service over the upstream statistics API, and serves the
//! REST routes until Ctrl+C.

use anyhow::{Context, Result};
use player_feed::{HttpPlayerSource, PlayerLookupService};
use std::sync::Arc;
use tracing::{error, info};

use dashboard_gateway::{create_routes, initialize_logging, load_configuration};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = load_configuration().context("Failed to load configuration")?;
    initialize_logging(&config.logging)?;

    info!("Starting Fantasy Dashboard Gateway v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Upstream player feed: {} (season {})",
        config.upstream.players_url, config.upstream.season
    );

    let source = HttpPlayerSource::new(config.upstream.clone())?;
    let service = Arc::new(PlayerLookupService::new(
        Arc::new(source),
        config.upstream.season,
    ));
    let routes = create_routes(service);

    let addr = config.server_addr()?;
    let (bound, server) = warp::serve(routes)
        .try_bind_with_graceful_shutdown(addr, shutdown_signal())
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Dashboard Gateway listening on http://{}", bound);
    server.await;

    info!("Dashboard Gateway shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C signal received, shutting down"),
        Err(e) => {
            error!("Failed to listen for Ctrl+C signal: {}", e);
            std::future::pending::<()>().await
        }
    }
}
