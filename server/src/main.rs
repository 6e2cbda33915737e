//! MET collection explorer entry point.

use server::{app, config::ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MET Explorer v{}", env!("CARGO_PKG_VERSION"));
    let config = ServerConfig::from_env()?;
    app::run(config).await
}
