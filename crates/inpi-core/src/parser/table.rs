//! Results-table extractor for the INPI search page
//!
//! The results page carries no stable ids or classes, so the table is found
//! structurally: the largest table on the page, validated by its header
//! cells, read with fixed column positions.

use scraper::{ElementRef, Html, Selector};

use crate::error::{InpiError, Result};
use crate::types::CaseRecord;

/// Background colour the portal's stylesheet gives results header cells
pub const HEADER_BGCOLOR: &str = "#B5D6AD";

/// A candidate table needs strictly more rows than this
pub const MIN_TABLE_ROWS: usize = 2;

/// Minimum header cells and data cells for a genuine results table
pub const MIN_COLUMNS: usize = 9;

const NUMBER_COLUMN: usize = 1;
const PRIORITY_COLUMN: usize = 2;
const MARK_COLUMN: usize = 4;
const STATUS_COLUMN: usize = 6;
const HOLDER_COLUMN: usize = 7;
const CLASS_COLUMN: usize = 8;

/// Turns a parsed results page into case records
pub trait TableExtractor {
    /// Extracts records in document order; an unrecognised page yields an
    /// empty vector rather than an error
    fn extract(&self, document: &Html) -> Result<Vec<CaseRecord>>;
}

/// Extractor for the portal's current markup
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestTableExtractor;

impl TableExtractor for LargestTableExtractor {
    fn extract(&self, document: &Html) -> Result<Vec<CaseRecord>> {
        let table_selector = selector("table")?;
        let row_selector = selector("tr")?;
        let cell_selector = selector("td")?;
        let header_selector = selector(&format!("td[bgcolor=\"{}\"]", HEADER_BGCOLOR))?;

        let Some((table, row_count)) = find_results_table(document, &table_selector, &row_selector)
        else {
            tracing::debug!("no table with more than {} rows", MIN_TABLE_ROWS);
            return Ok(Vec::new());
        };
        tracing::debug!(rows = row_count, "results table candidate found");

        let mut rows = table.select(&row_selector);
        let Some(header_row) = rows.next() else {
            return Ok(Vec::new());
        };

        let header: Vec<String> = header_row
            .select(&header_selector)
            .map(|cell| cell_text(&cell))
            .collect();

        if !is_results_header(&header) {
            tracing::debug!(
                header_cells = header.len(),
                "largest table is not a results table"
            );
            return Ok(Vec::new());
        }

        Ok(rows
            .filter_map(|row| parse_row(&row, &cell_selector))
            .collect())
    }
}

/// Whether the header labels found in the first row describe a results table
pub fn is_results_header(header: &[String]) -> bool {
    header.len() >= MIN_COLUMNS
}

/// Picks the table with the most rows, provided it has more than
/// [`MIN_TABLE_ROWS`]. The first table wins a tie.
fn find_results_table<'a>(
    document: &'a Html,
    table_selector: &Selector,
    row_selector: &Selector,
) -> Option<(ElementRef<'a>, usize)> {
    let mut best: Option<(ElementRef<'a>, usize)> = None;

    for table in document.select(table_selector) {
        let rows = table.select(row_selector).count();
        let current_max = best.as_ref().map_or(0, |(_, count)| *count);
        if rows > current_max && rows > MIN_TABLE_ROWS {
            best = Some((table, rows));
        }
    }

    best
}

/// Reads one data row; rows with fewer than [`MIN_COLUMNS`] cells are skipped
fn parse_row(row: &ElementRef, cell_selector: &Selector) -> Option<CaseRecord> {
    let cells: Vec<ElementRef> = row.select(cell_selector).collect();
    if cells.len() < MIN_COLUMNS {
        return None;
    }

    let column = |index: usize| cell_text(&cells[index]);

    Some(CaseRecord {
        number: column(NUMBER_COLUMN),
        priority: column(PRIORITY_COLUMN),
        mark: column(MARK_COLUMN),
        status: column(STATUS_COLUMN),
        holder: column(HOLDER_COLUMN),
        class: column(CLASS_COLUMN),
    })
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| InpiError::Parse(format!("Invalid selector {css}: {e:?}")))
}
