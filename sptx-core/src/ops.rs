//! Arithmetic operations over sparse matrices
//!
//! Every operation produces a fresh matrix that owns its storage; operands
//! are never mutated. Entries whose value nets to exactly zero are pruned
//! from every result.

use alloc::vec::Vec;

use hashbrown::{hash_map::Entry, HashMap};

use crate::error::Result;
use crate::matrix::{Coord, SparseMatrix};
use crate::validation::{validate_inner_dims, validate_same_shape};

impl SparseMatrix {
    /// The transpose of this matrix
    ///
    /// Dimensions swap and every entry `(r, c) -> v` becomes `(c, r) -> v`.
    /// O(nnz), infallible.
    pub fn transpose(&self) -> SparseMatrix {
        SparseMatrix {
            rows: self.cols,
            cols: self.rows,
            entries: self
                .entries
                .iter()
                .map(|(&coord, &value)| (coord.transposed(), value))
                .collect(),
        }
    }

    /// Entrywise sum of two matrices of identical shape
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.entrywise("addition", other, 1)
    }

    /// Entrywise difference of two matrices of identical shape
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.entrywise("subtraction", other, -1)
    }

    /// Merge `other` into a copy of `self`, scaling each right entry by
    /// `sign`. O(nnz_left + nnz_right).
    fn entrywise(&self, op: &'static str, other: &SparseMatrix, sign: i64) -> Result<SparseMatrix> {
        validate_same_shape(op, self.shape(), other.shape())?;

        let mut entries = self.entries.clone();
        for (&coord, &value) in &other.entries {
            match entries.entry(coord) {
                Entry::Occupied(mut slot) => {
                    let sum = *slot.get() + sign * value;
                    if sum == 0 {
                        slot.remove();
                    } else {
                        *slot.get_mut() = sum;
                    }
                }
                // Absent left value is an implicit 0; the stored right
                // value is nonzero by invariant, so no pruning check here.
                Entry::Vacant(slot) => {
                    slot.insert(sign * value);
                }
            }
        }

        Ok(SparseMatrix {
            rows: self.rows,
            cols: self.cols,
            entries,
        })
    }

    /// Matrix product; requires `self.cols == other.rows`
    ///
    /// The right operand is indexed by row first so each left entry only
    /// meets the right entries it can pair with, O(nnz_left + nnz_right +
    /// products) instead of the naive nnz_left x nnz_right scan.
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        validate_inner_dims("multiplication", self.shape(), other.shape())?;

        let mut rhs_rows: HashMap<usize, Vec<(usize, i64)>> = HashMap::new();
        for (&coord, &value) in &other.entries {
            rhs_rows.entry(coord.row).or_default().push((coord.col, value));
        }

        let mut acc: HashMap<Coord, i64> = HashMap::new();
        for (&coord, &value) in &self.entries {
            let Some(partners) = rhs_rows.get(&coord.col) else {
                continue;
            };
            for &(col, rhs_value) in partners {
                *acc.entry(Coord::new(coord.row, col)).or_insert(0) += value * rhs_value;
            }
        }

        // Prune only once every partial product is in: an intermediate zero
        // sum may be raised back to nonzero by a later accumulation.
        acc.retain(|_, sum| *sum != 0);

        Ok(SparseMatrix {
            rows: self.rows,
            cols: other.cols,
            entries: acc,
        })
    }
}
