//! Launch Dashboard HTTP Server Binary
//!
//! Loads the launch dataset, builds the page and serves it until terminated.
//!
//! # Usage
//!
//! ```bash
//! # Serve ./spacex_launch_dash.csv on http://127.0.0.1:8050
//! cargo run --bin launch-dash-server
//! ```
//!
//! Host, port and dataset path may be changed in an optional `dashboard.toml`.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use launch_dash::config::DashboardConfig;
use launch_dash::http::{create_router, AppState};
use launch_dash::io::LaunchLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting launch dashboard server");

    let config = DashboardConfig::from_default_location()?;

    // The only blocking step; interaction starts after this succeeds.
    let dataset = LaunchLoader::load_from_csv(&config.data.path)
        .with_context(|| format!("Failed to load launch dataset from {}", config.data.path.display()))?;

    let state = AppState::new(Arc::new(dataset));
    let app = create_router(state);

    let addr = config.socket_addr()?;
    info!("Dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
