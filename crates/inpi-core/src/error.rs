//! Error types for the INPI scraper
//!
//! Provides the error enum shared by the session client, the search engine
//! and the lookup facade, with human-readable messages and JSON-compatible
//! serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all INPI scraper operations
///
/// Every variant is scoped to a single brand lookup; none of them is fatal
/// to the process.
#[derive(Error, Debug)]
pub enum InpiError {
    /// The portal echoed the login form back after the login POST
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Login or password were not configured
    #[error("INPI credentials not found: set INPI_LOGIN and INPI_SENHA")]
    MissingCredentials,

    /// Transport failure or non-success status at any protocol step
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    Parse(String),

    /// Caller supplied unusable input (e.g. an empty brand)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Serialize for InpiError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for INPI operations
pub type Result<T> = std::result::Result<T, InpiError>;
