//! rategate - distributed sliding-window admission gateway

use rategate::config::Config;
use rategate::server;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging system
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting rategate");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    server::run_server(config).await.map_err(|e| e.into())
}
