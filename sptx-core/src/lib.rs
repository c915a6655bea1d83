#![no_std]

//! SPTX Core - Sparse Matrix Text Format Definitions
//!
//! This crate provides the SPTX text format grammar, the coordinate-keyed
//! sparse matrix type, and its arithmetic. No I/O lives here; file-backed
//! load and save are implemented by the `sptx` crate.

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod text;
pub mod validation;

mod ops;

pub use error::*;
pub use format::*;
pub use matrix::*;
