//! Mortgage server entry point.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mortgage_engine::MortgageService;
use mortgage_ext_file::CsvRateLoader;
use mortgage_server::config::DEFAULT_CONFIG_PATH;
use mortgage_server::{AppState, Server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,mortgage=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Mortgage Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let server_config = if Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        ServerConfig::from_file(&config_path)
            .with_context(|| format!("failed to read configuration {config_path}"))?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };
    let server_config = server_config.with_overrides(
        std::env::var("MORTGAGE_API_TOKEN").ok(),
        std::env::var("MORTGAGE_RATES_FILE").ok(),
    );

    let api_token = server_config
        .api_token()
        .context("no API token configured; set api_token or MORTGAGE_API_TOKEN")?
        .to_string();

    // The rate table is loaded once; a bad file stops startup.
    let rates = CsvRateLoader::load_all(&server_config.rates_file)
        .with_context(|| format!("failed to load mortgage rates from {}", server_config.rates_file))?;

    let service = MortgageService::new(Arc::new(rates));

    // Start server
    let server = Server::new(server_config, AppState::new(service, api_token));
    server.start().await?;

    Ok(())
}
