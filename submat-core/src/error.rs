//! Error types for sub-matrix selection

use crate::index::Axis;

/// Why a single index was rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndexFault {
    /// Index is below zero
    Negative(i64),
    /// Index is zero or below where the lower bound is exclusive
    NotPositive(i64),
    /// Index is at or past the end of the axis
    TooLarge(i64),
    /// Index came from a NaN or infinite value
    NonFinite(f64),
}

impl core::fmt::Display for IndexFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IndexFault::Negative(i) => write!(f, "{i} is negative"),
            IndexFault::NotPositive(i) => write!(f, "{i} is not positive"),
            IndexFault::TooLarge(i) => write!(f, "{i} exceeds the axis"),
            IndexFault::NonFinite(v) => write!(f, "{v} is not finite"),
        }
    }
}

/// Coarse grouping of [`SelectError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing input or missing selection
    Input,
    /// An explicit index failed validation
    Index,
    /// A resolved range failed validation
    Range,
    /// Column-vector structural violations
    Structure,
    /// Representation not handled by any extractor
    Representation,
}

/// Errors that abort a selection. No partial result is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectError {
    /// Input matrix handle missing
    #[error("no input matrix")]
    NoInputMatrix,
    /// Neither a row nor a column index list was supplied
    #[error("no row and column indices given")]
    EmptySelection,
    /// An explicit index is outside `0..len` for its axis
    ///
    /// `len` is 0 when the index was rejected while flattening an index
    /// matrix, before any input matrix was consulted.
    #[error("selected {axis} index {fault} (axis length {len})")]
    IndexOutOfRange {
        axis: Axis,
        fault: IndexFault,
        len: usize,
    },
    /// A resolved `[start, end]` range does not fit the axis
    #[error("{axis} range [{start}, {end}] exceeds matrix dimension {len}")]
    RangeOutOfBounds {
        axis: Axis,
        start: i64,
        end: i64,
        len: usize,
    },
    /// Column-vector path given a matrix with more than one column
    #[error("input matrix is not a column matrix ({cols} columns)")]
    NotAColumnMatrix { cols: usize },
    /// Column-vector path given a matrix without rows
    #[error("column matrix does not contain any rows")]
    EmptyColumnMatrix,
    /// Column index other than 0 against a column vector
    #[error("column matrix has only column 0, got column index {index}")]
    BadColumnIndex { index: i64 },
    /// No extractor handles the input's representation
    #[error("unknown input matrix type: {name}")]
    UnknownMatrixType { name: &'static str },
}

impl SelectError {
    /// Get the category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SelectError::NoInputMatrix | SelectError::EmptySelection => ErrorCategory::Input,
            SelectError::IndexOutOfRange { .. } => ErrorCategory::Index,
            SelectError::RangeOutOfBounds { .. } => ErrorCategory::Range,
            SelectError::NotAColumnMatrix { .. }
            | SelectError::EmptyColumnMatrix
            | SelectError::BadColumnIndex { .. } => ErrorCategory::Structure,
            SelectError::UnknownMatrixType { .. } => ErrorCategory::Representation,
        }
    }

    /// Axis the error refers to, when there is one
    pub const fn axis(&self) -> Option<Axis> {
        match self {
            SelectError::IndexOutOfRange { axis, .. }
            | SelectError::RangeOutOfBounds { axis, .. } => Some(*axis),
            SelectError::BadColumnIndex { .. } => Some(Axis::Col),
            _ => None,
        }
    }
}

/// Errors raised while constructing a matrix from raw parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// Buffer length does not match `rows * cols`
    #[error("expected {expected} elements for the given shape, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// `rows * cols` does not fit in `usize`
    #[error("a {nrows}x{ncols} matrix has too many elements")]
    TooLarge { nrows: usize, ncols: usize },
    /// A coordinate lies outside the declared shape
    #[error("entry ({row}, {col}) lies outside a {nrows}x{ncols} matrix")]
    EntryOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
}

/// Errors raised while parsing range and index-list strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input or one of its parts is empty
    #[error("empty input")]
    Empty,
    /// A part is not a decimal number
    #[error("invalid number")]
    InvalidNumber,
    /// A range is missing its `:` or `-` separator
    #[error("range must be written start:end")]
    MissingSeparator,
    /// A range ends before it starts
    #[error("range end precedes its start")]
    Reversed,
    /// A number does not fit an index
    #[error("number too large")]
    Overflow,
    /// Ranges in an index list expand past the allowed number of indices
    #[error("index list expands to more than {max} indices")]
    TooManyIndices { max: usize },
}

/// Result type for selection operations
pub type Result<T> = core::result::Result<T, SelectError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_messages_name_the_axis() {
        let err = SelectError::IndexOutOfRange {
            axis: Axis::Row,
            fault: IndexFault::TooLarge(7),
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "selected row index 7 exceeds the axis (axis length 5)"
        );

        let err = SelectError::RangeOutOfBounds {
            axis: Axis::Col,
            start: 2,
            end: 9,
            len: 4,
        };
        assert_eq!(
            err.to_string(),
            "column range [2, 9] exceeds matrix dimension 4"
        );
    }

    #[test]
    fn test_category() {
        assert_eq!(SelectError::NoInputMatrix.category(), ErrorCategory::Input);
        assert_eq!(
            SelectError::BadColumnIndex { index: 3 }.category(),
            ErrorCategory::Structure
        );
        assert_eq!(
            SelectError::UnknownMatrixType { name: "x" }.category(),
            ErrorCategory::Representation
        );
        assert_eq!(SelectError::EmptyColumnMatrix.axis(), None);
    }
}
