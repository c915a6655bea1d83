//! File-backed load and save for SPTX matrices
//!
//! Reads and writes are blocking and sequential. Any open/read/write
//! failure maps to [`SptxError::SourceUnavailable`] carrying the path; the
//! grammar errors of the core pass through unchanged.

use std::fs;
use std::path::Path;

use sptx_core::{Result, SparseMatrix, SptxError};

fn unavailable(path: &Path) -> SptxError {
    SptxError::SourceUnavailable {
        source: path.display().to_string(),
    }
}

/// Load a matrix from an SPTX text file
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|_| unavailable(path))?;
    SparseMatrix::parse_str(&text, &path.display().to_string())
}

/// Save a matrix in the canonical sparse text format
///
/// The written file loads back to an equal matrix.
pub fn save_matrix<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, matrix.to_text()).map_err(|_| unavailable(path))
}

/// Save the full dense dump of a matrix
///
/// One space-separated line per row with absent entries as 0, preceded by a
/// dimension header. Dense dumps are for inspection and do not load back.
pub fn save_dense<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, matrix.to_dense_text()).map_err(|_| unavailable(path))
}
