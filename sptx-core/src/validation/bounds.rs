//! Operand-shape preconditions for matrix arithmetic

use crate::error::{Result, SptxError};
use crate::matrix::Shape;

/// Require identical shapes for entrywise operations (addition, subtraction)
pub fn validate_same_shape(op: &'static str, lhs: Shape, rhs: Shape) -> Result<()> {
    if lhs != rhs {
        return Err(SptxError::DimensionMismatch { op, lhs, rhs });
    }
    Ok(())
}

/// Require the inner extents to agree for multiplication
///
/// The left operand's column count must equal the right operand's row count.
pub fn validate_inner_dims(op: &'static str, lhs: Shape, rhs: Shape) -> Result<()> {
    if lhs.cols != rhs.rows {
        return Err(SptxError::DimensionMismatch { op, lhs, rhs });
    }
    Ok(())
}
