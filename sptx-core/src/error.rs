//! Error types for SPTX operations

use alloc::string::String;

use crate::matrix::Shape;

/// Errors that can occur during SPTX operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SptxError {
    /// Source could not be opened or read
    SourceUnavailable {
        /// Identifier of the source (a path, typically)
        source: String,
    },
    /// Source contained no content
    EmptySource {
        /// Identifier of the source
        source: String,
    },
    /// A line violated the text format grammar
    InvalidFormat {
        /// Identifier of the source
        source: String,
        /// The offending line, as read
        line: String,
    },
    /// Operand shapes incompatible for the requested arithmetic operation
    DimensionMismatch {
        /// Name of the attempted operation
        op: &'static str,
        /// Shape of the left operand
        lhs: Shape,
        /// Shape of the right operand
        rhs: Shape,
    },
}

impl SptxError {
    /// Build an [`SptxError::InvalidFormat`] for a rejected line
    pub fn invalid_format(source: &str, line: &str) -> Self {
        SptxError::InvalidFormat {
            source: String::from(source),
            line: String::from(line),
        }
    }
}

impl core::fmt::Display for SptxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SptxError::SourceUnavailable { source } => {
                write!(f, "Source {source} not found or cannot be read")
            }
            SptxError::EmptySource { source } => {
                write!(f, "Source {source} is empty")
            }
            SptxError::InvalidFormat { source, line } => {
                write!(f, "Invalid format in {source}: {line}")
            }
            SptxError::DimensionMismatch { op, lhs, rhs } => {
                write!(f, "Matrix dimensions do not match for {op}: ({lhs}) and ({rhs})")
            }
        }
    }
}

/// Result type for SPTX operations
pub type Result<T> = core::result::Result<T, SptxError>;
