//! Header-line grammar for the SPTX text format
//!
//! A header line sets one matrix dimension: `rows=<int>` or `cols=<int>`.
//! Header lines may appear in any order among themselves but must precede
//! all entry lines.

use crate::error::{Result, SptxError};
use crate::format::constants::{COLS_PREFIX, ROWS_PREFIX};
use crate::validation::parse_index;

/// One parsed dimension header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    /// `rows=<int>`
    Rows(usize),
    /// `cols=<int>`
    Cols(usize),
}

/// Parse a single line of the header phase
///
/// Returns `Ok(None)` when the line is not a header line at all, which ends
/// the header phase. A line that carries a header prefix but a malformed or
/// negative value is [`SptxError::InvalidFormat`].
pub fn parse_header_line(source: &str, line: &str) -> Result<Option<HeaderField>> {
    // Values tolerate surrounding whitespace; the integer token itself is strict.
    if let Some(value) = line.strip_prefix(ROWS_PREFIX) {
        let rows =
            parse_index(value.trim()).ok_or_else(|| SptxError::invalid_format(source, line))?;
        return Ok(Some(HeaderField::Rows(rows)));
    }
    if let Some(value) = line.strip_prefix(COLS_PREFIX) {
        let cols =
            parse_index(value.trim()).ok_or_else(|| SptxError::invalid_format(source, line))?;
        return Ok(Some(HeaderField::Cols(cols)));
    }
    Ok(None)
}
