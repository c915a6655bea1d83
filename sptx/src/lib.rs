//! SPTX - Sparse integer matrices with a line-oriented text format
//!
//! This library stores mostly-zero integer matrices as a coordinate map of
//! nonzero entries and exchanges them through the SPTX text encoding.
//!
//! ## Architecture
//!
//! SPTX follows a clean specification/implementation separation:
//!
//! - **sptx-core**: format grammar, matrix storage, and arithmetic (no I/O)
//! - **sptx**: file-backed load/save layered thinly on the core
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sptx::{load_matrix, save_matrix};
//!
//! fn example() -> sptx::Result<()> {
//!     let a = load_matrix("a.sptx")?;
//!     let b = load_matrix("b.sptx")?;
//!
//!     let sum = a.add(&b)?;
//!     println!("{sum}");
//!
//!     save_matrix("sum.sptx", &sum)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Text format
//!
//! ```text
//! rows=3
//! cols=3
//! (0,0,5)
//! (2,1,-7)
//! ```
//!
//! Header lines are optional and order-flexible among themselves but must
//! precede all entry lines; blank lines are permitted anywhere.

// Re-export core abstractions and format definitions
pub use sptx_core::{
    // Matrix and value types
    Coord, Shape, SparseMatrix,
    // Line-level grammar
    parse_entry_line, parse_header_line, HeaderField,
    // Error handling
    Result, SptxError,
};

// Implementation modules
pub mod file_backend;

// Public exports
pub use file_backend::{load_matrix, save_dense, save_matrix};
