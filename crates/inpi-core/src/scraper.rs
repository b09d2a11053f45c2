//! Main scraper API for the INPI portal
//!
//! Provides the search protocol over an authenticated session and the
//! high-level lookup API combining session client, parser and classifier.

use crate::classify::verify_outcome;
use crate::client::{ClientConfig, Session, SessionClient};
use crate::error::{InpiError, Result};
use crate::parser::parse_search_outcome;
use crate::types::{BatchEntry, Credentials, SearchMode, SearchOutcome, VerificationResult};
use crate::url::{build_search_url, build_warmup_url, search_form};

/// Runs one search over an authenticated session
///
/// The warm-up GET must precede the form POST: the portal only accepts the
/// search once the search page has set its session state.
///
/// # Errors
/// - `Network` if either request fails
pub async fn run_search(session: &Session, mark: &str, mode: SearchMode) -> Result<SearchOutcome> {
    tracing::debug!("opening basic-classification search page");
    session
        .get_page(&build_warmup_url(session.base_url()))
        .await?;

    tracing::debug!(mark, mode = %mode, "submitting search form");
    let html = session
        .post_form(&build_search_url(session.base_url()), &search_form(mark, mode))
        .await?;

    let outcome = parse_search_outcome(&html)?;

    if outcome.is_confirmed_empty() {
        tracing::info!(mark, "portal reported no results");
    } else if outcome.is_ambiguous_empty() {
        tracing::warn!(
            mark,
            total_reported = outcome.total_reported,
            "no results table and no 'no results' notice; page markup may have changed"
        );
    } else if outcome.is_truncated() {
        tracing::info!(
            mark,
            records = outcome.records.len(),
            total_reported = outcome.total_reported,
            "results extracted; banner reports more matches than the first page"
        );
    } else {
        tracing::info!(
            mark,
            records = outcome.records.len(),
            total_reported = outcome.total_reported,
            "results extracted"
        );
    }

    Ok(outcome)
}

/// Main lookup API for the INPI portal
///
/// Each call authenticates a fresh session; nothing is shared between
/// lookups.
#[derive(Debug, Clone, Default)]
pub struct InpiScraper {
    client: SessionClient,
}

impl InpiScraper {
    /// Create a new scraper with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new scraper with custom client configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            client: SessionClient::with_config(config),
        }
    }

    /// Search the portal for a brand
    ///
    /// The brand is uppercased before submission.
    ///
    /// # Errors
    /// - `InvalidInput` if brand is empty or whitespace only
    /// - `Auth` if the portal rejects the credentials
    /// - `Network` if any request fails
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> inpi_core::Result<()> {
    /// use inpi_core::{Credentials, InpiScraper, SearchMode};
    /// let scraper = InpiScraper::new();
    /// let credentials = Credentials::new("login", "password");
    /// let outcome = scraper.search(&credentials, "acme", SearchMode::Exact).await?;
    /// for record in &outcome.records {
    ///     println!("{} {} {}", record.number, record.mark, record.status);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(
        &self,
        credentials: &Credentials,
        brand: &str,
        mode: SearchMode,
    ) -> Result<SearchOutcome> {
        if brand.trim().is_empty() {
            return Err(InpiError::InvalidInput(
                "Brand cannot be empty".to_string(),
            ));
        }

        let mark = brand.to_uppercase();
        tracing::info!(mark = %mark, mode = %mode, "starting INPI search");

        let session = self.client.authenticate(credentials).await?;
        run_search(&session, &mark, mode).await
    }

    /// Check whether a brand has an active registration
    ///
    /// Runs a radical search and classifies the records. The result carries
    /// the brand exactly as given.
    pub async fn verify(
        &self,
        credentials: &Credentials,
        brand: &str,
    ) -> Result<VerificationResult> {
        let outcome = self.search(credentials, brand, SearchMode::Radical).await?;
        Ok(verify_outcome(brand, &outcome))
    }

    /// Verify brands one at a time, each with its own session
    ///
    /// Returns one entry per brand in input order; a failing brand becomes
    /// [`BatchEntry::Failed`] and the batch continues.
    pub async fn verify_batch(
        &self,
        credentials: &Credentials,
        brands: &[String],
    ) -> Vec<BatchEntry> {
        let mut entries = Vec::with_capacity(brands.len());

        for brand in brands {
            let entry = match self.verify(credentials, brand).await {
                Ok(result) => BatchEntry::Verified(result),
                Err(error) => {
                    tracing::warn!(brand = %brand, error = %error, "brand verification failed");
                    BatchEntry::Failed {
                        queried_brand: brand.clone(),
                        error,
                    }
                }
            };
            entries.push(entry);
        }

        entries
    }
}
