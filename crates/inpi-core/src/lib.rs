//! INPI Trademark Scraper Core Library
//!
//! Provides an async API for searching the INPI (Brazilian patent and
//! trademark office) portal and deciding whether a brand is actively
//! registered.
//!
//! # Overview
//!
//! This crate provides a complete lookup pipeline with:
//! - A session client that logs in and keeps a per-lookup cookie jar
//! - A search engine that warms the session up, submits the search form and
//!   parses the results table
//! - A classifier that turns case records into a registration verdict
//!
//! # Example
//!
//! ```no_run
//! use inpi_core::{Credentials, InpiScraper, Result, SearchMode};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = InpiScraper::new();
//!     let credentials = Credentials::new("login", "password");
//!
//!     // Full search: raw case records
//!     let outcome = scraper.search(&credentials, "acme", SearchMode::Radical).await?;
//!     println!("{} of {} records", outcome.records.len(), outcome.total_reported);
//!
//!     // Verification: is any record in force?
//!     let result = scraper.verify(&credentials, "acme").await?;
//!     println!("{}: {}", result.queried_brand, result.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Markup coupling
//!
//! The results page has no stable element ids, so records are read from the
//! largest table on the page using fixed column positions. A page the
//! extractor no longer recognises yields an empty outcome rather than an
//! error; compare [`SearchOutcome::total_reported`] with the record count
//! and check [`SearchOutcome::is_ambiguous_empty`] to notice markup drift.
//!
//! # TLS
//!
//! [`ClientConfig::accept_invalid_certs`] disables certificate validation
//! for the sessions of that client only. It is off by default.

pub mod classify;
mod client;
mod error;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, LOGIN_FORM_MARKER, Session, SessionClient, is_login_failure};

// Re-export error types
pub use error::{InpiError, Result};

// Re-export parser functions
pub use parser::{LargestTableExtractor, TableExtractor, parse_search_outcome};

// Re-export classifier
pub use classify::{Verdict, classify, verify_outcome};

// Re-export main scraper API
pub use scraper::{InpiScraper, run_search};

// Re-export data types
pub use types::{
    BatchEntry, CaseRecord, Credentials, LOGIN_ENV, SECRET_ENV, SearchMode, SearchOutcome,
    VerificationResult,
};
