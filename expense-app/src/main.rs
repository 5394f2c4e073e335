//! # Expense Relay Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the extraction webhook adapter
//! - Create the relay service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use expense_hex::{HttpWebhook, RelayService, inbound::HttpServer};

use config::{Config, LogFormat};

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,expense_app=debug,expense_hex=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    init_tracing(config.log_format);

    tracing::info!("Starting expense relay on port {}", config.port);
    tracing::info!(
        "Using extraction webhook: {} (timeout {:?})",
        config.webhook.url,
        config.webhook.timeout
    );

    // Outbound adapter shares one connection pool across requests
    let webhook = HttpWebhook::new(config.webhook)?;

    let service = RelayService::new(webhook);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
