//! Status server binary
//!
//! Run with: cargo run --bin docpulse-server

use docpulse::{config::StatusConfig, server::StatusServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docpulse=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StatusConfig::default();

    tracing::info!("Configuration loaded");
    tracing::info!("  - Stall threshold: {}ms", config.tracker.stall_threshold_ms);
    tracing::info!("  - Polling interval: {}ms", config.tracker.polling_interval_ms);

    let server = StatusServer::new(config);

    println!("Status server starting on http://{}", server.address());
    println!("  Health: /health");
    println!("  API:    /api/info");

    server.start().await?;

    Ok(())
}
