//! Core data types for the INPI scraper
//!
//! Contains the main data structures used throughout the library.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{InpiError, Result};

/// Environment variable holding the portal login
pub const LOGIN_ENV: &str = "INPI_LOGIN";

/// Environment variable holding the portal password
pub const SECRET_ENV: &str = "INPI_SENHA";

/// Portal login supplied by the caller
///
/// Never persisted; `Debug` redacts the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            secret: secret.into(),
        }
    }

    /// Builds credentials from optional parts, rejecting missing or empty values
    pub fn from_parts(login: Option<String>, secret: Option<String>) -> Result<Self> {
        match (login, secret) {
            (Some(login), Some(secret)) if !login.is_empty() && !secret.is_empty() => {
                Ok(Self { login, secret })
            }
            _ => Err(InpiError::MissingCredentials),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("secret", &"***")
            .finish()
    }
}

/// Matching strategy offered by the portal's search form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchMode {
    /// Exact-string match
    #[serde(rename = "Exata")]
    Exact,
    /// Stem / partial match
    #[serde(rename = "Radical")]
    Radical,
}

impl SearchMode {
    /// Wire name used by the JSON API
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Exact => "Exata",
            SearchMode::Radical => "Radical",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the portal's results table
///
/// All fields are raw trimmed cell text. Serialized with the portal's own
/// column labels, which is the shape the full-search endpoint returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Process / registration number
    #[serde(rename = "Número")]
    pub number: String,

    /// Priority date (e.g. "12/03/2015")
    #[serde(rename = "Prioridade")]
    pub priority: String,

    /// Mark text as registered
    #[serde(rename = "Marca")]
    pub mark: String,

    /// Status ("situação") text
    #[serde(rename = "Situação")]
    pub status: String,

    /// Holder ("titular") name
    #[serde(rename = "Titular")]
    pub holder: String,

    /// Nice classification code
    #[serde(rename = "Classe")]
    pub class: String,
}

/// Result of one search submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Records in document order
    pub records: Vec<CaseRecord>,

    /// Count announced by the page banner; 0 when the banner is absent.
    /// Only the first page is fetched, so this may exceed `records.len()`.
    pub total_reported: u32,

    /// Whether the portal's explicit "no results" notice was present
    pub no_results_notice: bool,
}

impl SearchOutcome {
    /// Empty outcome the portal explicitly announced as having no matches
    pub fn is_confirmed_empty(&self) -> bool {
        self.records.is_empty() && self.no_results_notice
    }

    /// Empty outcome without the "no results" notice: either zero matches or
    /// a markup change the extractor no longer covers
    pub fn is_ambiguous_empty(&self) -> bool {
        self.records.is_empty() && !self.no_results_notice
    }

    /// Banner announces more matches than the first page delivered
    pub fn is_truncated(&self) -> bool {
        self.total_reported as usize > self.records.len()
    }
}

/// Verdict for a single brand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Brand exactly as the caller supplied it
    pub queried_brand: String,

    /// True iff some record carries an active-status phrase
    pub has_active_registration: bool,

    /// Status of the matched record, or a sentinel when nothing matched
    pub status: String,

    /// Holder of the matched record
    pub matched_holder: Option<String>,

    /// Mark text of the matched record
    pub matched_mark: Option<String>,

    /// Banner count from the search outcome
    pub total_matches: u32,
}

/// Per-brand entry of a batch verification
#[derive(Debug)]
pub enum BatchEntry {
    Verified(VerificationResult),
    Failed {
        queried_brand: String,
        error: InpiError,
    },
}

impl BatchEntry {
    /// Brand this entry answers for
    pub fn queried_brand(&self) -> &str {
        match self {
            BatchEntry::Verified(result) => &result.queried_brand,
            BatchEntry::Failed { queried_brand, .. } => queried_brand,
        }
    }
}
