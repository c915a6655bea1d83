//! Text format definitions for the SPTX encoding
//!
//! This module contains the line-level grammar of the format: header lines
//! (`rows=`/`cols=`) and entry lines (`(row,col,value)`). Whole-source
//! parsing and rendering live in [`crate::text`].

pub mod constants;
pub mod entry;
pub mod header;

pub use entry::parse_entry_line;
pub use header::{parse_header_line, HeaderField};
