//! Whole-source parsing and text rendering for the SPTX format
//!
//! A source is a sequence of lines: optional blank lines anywhere, an
//! optional header phase (`rows=`/`cols=` in any order), then entry lines
//! `(row,col,value)`. The first non-blank line that is not a header line
//! ends the header phase and is consumed as an entry line.

use alloc::string::String;
use core::fmt::Write;

use crate::error::{Result, SptxError};
use crate::format::entry::parse_entry_line;
use crate::format::header::{parse_header_line, HeaderField};
use crate::matrix::SparseMatrix;

impl SparseMatrix {
    /// Parse a complete SPTX source
    ///
    /// `source` identifies the origin of the text (a path, typically) and
    /// is carried in error payloads. A source with no content at all is
    /// [`SptxError::EmptySource`]; a source of only blank lines parses to
    /// an empty 0x0 matrix.
    ///
    /// Entries parse under the zero-pruning insertion rule: a zero value is
    /// legal syntax but stores nothing, and when a coordinate repeats the
    /// last occurrence wins. Parsing never grows the declared dimensions to
    /// cover entry coordinates; only [`SparseMatrix::set`] does that.
    pub fn parse_str(text: &str, source: &str) -> Result<SparseMatrix> {
        if text.is_empty() {
            return Err(SptxError::EmptySource {
                source: String::from(source),
            });
        }

        let mut matrix = SparseMatrix::default();
        let mut in_header = true;
        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if in_header {
                match parse_header_line(source, line)? {
                    Some(HeaderField::Rows(rows)) => {
                        matrix.rows = rows;
                        continue;
                    }
                    Some(HeaderField::Cols(cols)) => {
                        matrix.cols = cols;
                        continue;
                    }
                    None => in_header = false,
                }
            }

            let (coord, value) = parse_entry_line(source, line)?;
            if value == 0 {
                // A repeated coordinate may have stored a value earlier;
                // the later zero wins and removes it.
                matrix.entries.remove(&coord);
            } else {
                matrix.entries.insert(coord, value);
            }
        }

        Ok(matrix)
    }

    /// Render the canonical sparse text encoding
    ///
    /// Header lines first, then one entry line per nonzero value in
    /// row-major order. The output parses back to an equal matrix.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "rows={}", self.rows);
        let _ = writeln!(out, "cols={}", self.cols);
        for (coord, value) in self.entries_row_major() {
            let _ = writeln!(out, "({},{},{})", coord.row, coord.col, value);
        }
        out
    }

    /// Render the full dense dump: a dimension header, then every row
    /// space-separated with absent entries as 0. No display window cap.
    pub fn to_dense_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Matrix ({}):", self.shape());
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{}", self.get(row, col));
            }
            out.push('\n');
        }
        out
    }
}
