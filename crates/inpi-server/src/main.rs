use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use inpi_server::{AppState, Config, serve};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; real environment variables take precedence
    dotenvy::dotenv().ok();
    let config = Config::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = Arc::new(AppState::from_config(&config));
    if state.credentials.is_none() {
        tracing::warn!("INPI_LOGIN / INPI_SENHA not set; every lookup will fail until configured");
    }
    if config.accept_invalid_certs {
        tracing::warn!("portal TLS certificates will not be validated");
    }

    let address = config.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!("server listening on http://{}", listener.local_addr()?);

    serve(listener, state).await.context("server error")?;
    Ok(())
}
