//! Grammar and precondition validation utilities
//!
//! This module contains pure validation functions with no I/O dependencies:
//! the strict integer token grammar and the operand-shape preconditions for
//! matrix arithmetic.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_inner_dims, validate_same_shape};
pub use parsing::{parse_index, parse_int};
