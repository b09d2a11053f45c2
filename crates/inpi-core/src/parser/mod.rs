//! HTML parsers for the INPI portal
//!
//! Contains the results-table extractor and the banner/notice detectors,
//! combined into a [`SearchOutcome`](crate::SearchOutcome) by `results`.

pub mod banner;
pub mod results;
pub mod table;

pub use banner::{has_no_results_notice, parse_total_reported};
pub use results::{parse_search_outcome, parse_search_outcome_with};
pub use table::{LargestTableExtractor, TableExtractor, is_results_header};
