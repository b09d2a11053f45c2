//! INPI lookup HTTP API
//!
//! Exposes the core lookups to the web UI as two JSON endpoints:
//!
//! - `POST /api/verificar-lote` `{ "marcas": [...] }` - registration verdict per brand
//! - `POST /api/buscar-completa` `{ "marca": "...", "tipoBusca": "Exata" | "Radical" }` -
//!   raw case records
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use inpi_server::{AppState, serve};
//!
//! # async fn run() -> std::io::Result<()> {
//! let state = Arc::new(AppState::new(Default::default(), None));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! serve(listener, state).await
//! # }
//! ```

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use inpi_core::{ClientConfig, Credentials, InpiError, InpiScraper};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod routes;

pub use config::Config;

/// Shared, read-only state for all requests
///
/// Holds configuration only; every lookup opens its own portal session.
#[derive(Debug)]
pub struct AppState {
    pub scraper: InpiScraper,
    pub credentials: Option<Credentials>,
}

impl AppState {
    pub fn new(client_config: ClientConfig, credentials: Option<Credentials>) -> Self {
        Self {
            scraper: InpiScraper::with_config(client_config),
            credentials,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.client_config(), config.credentials())
    }

    /// Configured credentials, or `MissingCredentials`
    pub fn credentials(&self) -> Result<&Credentials, InpiError> {
        self.credentials
            .as_ref()
            .ok_or(InpiError::MissingCredentials)
    }
}

/// Build the axum Router with both endpoints
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/verificar-lote", post(routes::verify_batch))
        .route("/api/buscar-completa", post(routes::full_search))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serve the API on an already-bound listener until the future is dropped
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    axum::serve(listener, router(state)).await
}
