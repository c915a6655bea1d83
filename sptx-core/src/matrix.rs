//! Coordinate-keyed sparse matrix storage and element access

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::format::constants::{DISPLAY_WINDOW, TRUNCATION_NOTICE};

/// Matrix coordinate with row-major ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Coord {
    /// Create a coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The coordinate with row and column swapped
    pub const fn transposed(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }
}

/// Matrix dimensions; displays as `RxC`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    /// Number of logical rows
    pub rows: usize,
    /// Number of logical columns
    pub cols: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Sparse integer matrix keyed by coordinate
///
/// Only nonzero values are stored; every mutation path prunes entries whose
/// value becomes exactly zero. Two matrices are equal when their dimensions
/// and entry sets are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseMatrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) entries: HashMap<Coord, i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Number of logical rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of logical columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions
    pub fn shape(&self) -> Shape {
        Shape {
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Number of nonzero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Stored value at `(row, col)`, or 0 when absent
    ///
    /// Never fails; coordinates outside the declared dimensions read as 0.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.entries
            .get(&Coord::new(row, col))
            .copied()
            .unwrap_or(0)
    }

    /// Set the value at `(row, col)`
    ///
    /// A zero value removes any existing entry. A nonzero write outside the
    /// declared dimensions grows `rows`/`cols` to cover the coordinate.
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        let coord = Coord::new(row, col);
        if value == 0 {
            self.entries.remove(&coord);
        } else {
            self.entries.insert(coord, value);
            if row >= self.rows {
                self.rows = row + 1;
            }
            if col >= self.cols {
                self.cols = col + 1;
            }
        }
    }

    /// Iterate over the nonzero entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, i64)> + '_ {
        self.entries.iter().map(|(&coord, &value)| (coord, value))
    }

    /// Nonzero entries sorted row-major (row, then column)
    pub fn entries_row_major(&self) -> Vec<(Coord, i64)> {
        let mut all: Vec<_> = self.iter().collect();
        all.sort_unstable_by_key(|&(coord, _)| coord);
        all
    }
}

impl fmt::Display for SparseMatrix {
    /// Renders the dimensions and a dense window of at most
    /// [`DISPLAY_WINDOW`]² elements, with a truncation notice when the
    /// matrix extends past the window.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix ({}):", self.shape())?;
        for row in 0..self.rows.min(DISPLAY_WINDOW) {
            for col in 0..self.cols.min(DISPLAY_WINDOW) {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.get(row, col))?;
            }
            writeln!(f)?;
        }
        if self.rows > DISPLAY_WINDOW || self.cols > DISPLAY_WINDOW {
            writeln!(f, "{TRUNCATION_NOTICE}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_get_set() {
        let mut m = SparseMatrix::new(3, 3);
        assert_eq!(m.nnz(), 0);

        m.set(1, 2, 7);
        assert_eq!(m.get(1, 2), 7);
        assert_eq!(m.get(2, 1), 0);
        assert_eq!(m.nnz(), 1);

        // Out-of-bounds reads are 0, never an error
        assert_eq!(m.get(100, 100), 0);

        // Overwrite, then prune via a zero write
        m.set(1, 2, -4);
        assert_eq!(m.get(1, 2), -4);
        m.set(1, 2, 0);
        assert_eq!(m.get(1, 2), 0);
        assert_eq!(m.nnz(), 0);

        // Zero writes to absent coordinates are a no-op
        m.set(0, 0, 0);
        assert_eq!(m.nnz(), 0);
    }

    #[test]
    fn test_set_grows_dimensions() {
        let mut m = SparseMatrix::new(2, 2);
        m.set(5, 1, 9);
        assert_eq!(m.shape(), Shape { rows: 6, cols: 2 });
        m.set(0, 7, 3);
        assert_eq!(m.shape(), Shape { rows: 6, cols: 8 });

        // A zero write never grows
        let mut n = SparseMatrix::new(2, 2);
        n.set(50, 50, 0);
        assert_eq!(n.shape(), Shape { rows: 2, cols: 2 });
    }

    #[test]
    fn test_equality() {
        let mut a = SparseMatrix::new(2, 2);
        a.set(0, 1, 5);
        let mut b = SparseMatrix::new(2, 2);
        b.set(0, 1, 5);
        assert_eq!(a, b);

        b.set(1, 1, 1);
        assert_ne!(a, b);

        // Same entries, different dimensions
        let c = SparseMatrix::new(3, 2);
        assert_ne!(SparseMatrix::new(2, 2), c);
    }

    #[test]
    fn test_entries_row_major() {
        let mut m = SparseMatrix::new(3, 3);
        m.set(2, 0, 1);
        m.set(0, 2, 2);
        m.set(0, 1, 3);
        m.set(1, 1, 4);

        let order: Vec<Coord> = m.entries_row_major().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            [
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 1),
                Coord::new(2, 0),
            ]
        );
    }

    #[test]
    fn test_display_window() {
        let mut m = SparseMatrix::new(2, 3);
        m.set(0, 0, 3);
        m.set(1, 2, -1);
        assert_eq!(m.to_string(), "Matrix (2x3):\n3 0 0\n0 0 -1\n");
    }

    #[test]
    fn test_display_truncates_large_matrices() {
        let mut m = SparseMatrix::new(25, 4);
        m.set(24, 0, 1);
        let rendered = m.to_string();

        assert!(rendered.starts_with("Matrix (25x4):\n"));
        assert!(rendered.ends_with("... (matrix too large to display fully)\n"));
        // Header + 20 windowed rows + notice
        assert_eq!(rendered.lines().count(), 22);
    }
}
