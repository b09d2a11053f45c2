//! Search results page parser
//!
//! Combines the table extractor with banner and notice detection.

use scraper::Html;

use super::banner::{has_no_results_notice, parse_total_reported};
use super::table::{LargestTableExtractor, TableExtractor};
use crate::error::Result;
use crate::types::SearchOutcome;

/// Parses a search results page with the default table extractor
///
/// # Arguments
/// * `html` - Raw HTML returned by the search form submission
///
/// # Returns
/// A [`SearchOutcome`]; a page without a recognisable results table yields
/// zero records, not an error
///
/// # Errors
/// Returns `Parse` only if an internal selector fails to compile
pub fn parse_search_outcome(html: &str) -> Result<SearchOutcome> {
    parse_search_outcome_with(html, &LargestTableExtractor)
}

/// Parses a search results page with a caller-supplied table extractor
pub fn parse_search_outcome_with<E>(html: &str, extractor: &E) -> Result<SearchOutcome>
where
    E: TableExtractor + ?Sized,
{
    let document = Html::parse_document(html);

    let records = extractor.extract(&document)?;
    let total_reported = parse_total_reported(&document)?;

    Ok(SearchOutcome {
        records,
        total_reported,
        no_results_notice: has_no_results_notice(html),
    })
}
