//! Entry-line grammar for the SPTX text format
//!
//! An entry line has the exact shape `(<int>,<int>,<int>)`, denoting
//! `(row, col, value)`. Whitespace around each field is tolerated; the
//! integer tokens themselves follow the strict grammar of
//! [`crate::validation::parse_int`].

use crate::error::{Result, SptxError};
use crate::matrix::Coord;
use crate::validation::{parse_index, parse_int};

/// Parse a single entry line into its coordinate and value
///
/// The line must begin with `(` and end with `)`, and the interior must
/// split on commas into exactly three fields. Anything else is
/// [`SptxError::InvalidFormat`], including negative coordinates.
pub fn parse_entry_line(source: &str, line: &str) -> Result<(Coord, i64)> {
    let invalid = || SptxError::invalid_format(source, line);

    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let mut fields = inner.split(',');
    let row = fields.next().ok_or_else(invalid)?;
    let col = fields.next().ok_or_else(invalid)?;
    let value = fields.next().ok_or_else(invalid)?;
    if fields.next().is_some() {
        return Err(invalid());
    }

    let row = parse_index(row.trim()).ok_or_else(invalid)?;
    let col = parse_index(col.trim()).ok_or_else(invalid)?;
    let value = parse_int(value.trim()).ok_or_else(invalid)?;

    Ok((Coord::new(row, col), value))
}
