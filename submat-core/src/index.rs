//! Index lists, the unit of explicit selection

use alloc::vec::Vec;

use crate::error::{IndexFault, Result, SelectError};
use crate::matrix::Matrix;
use crate::traits::{MatrixElement, MatrixShape};

/// Matrix axis an index or range refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Col,
}

impl Axis {
    /// Length of this axis for a matrix of the given dimensions
    pub const fn len_of(self, (nrows, ncols): (usize, usize)) -> usize {
        match self {
            Axis::Row => nrows,
            Axis::Col => ncols,
        }
    }
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "column"),
        }
    }
}

/// Ordered sequence of indices into one axis of a matrix
///
/// An empty list selects the whole axis. Duplicates are legal and
/// replicate rows/columns; order is preserved in the output. Indices are
/// signed so that negative input survives until validation rejects it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexList {
    indices: Vec<i64>,
}

impl IndexList {
    /// Create an empty list
    pub const fn new() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Create a list from raw indices
    pub fn from_indices(indices: impl Into<Vec<i64>>) -> Self {
        Self {
            indices: indices.into(),
        }
    }

    /// Create the list `start, start+1, ..., end` (inclusive)
    ///
    /// Produces an empty list when `end < start`.
    pub fn inclusive(start: i64, end: i64) -> Self {
        Self {
            indices: (start..=end).collect(),
        }
    }

    /// Flatten an index matrix row-major into a list
    ///
    /// Values are truncated toward zero. A NaN or infinite entry is
    /// rejected for the given axis, since no integer index can hold it.
    /// Opaque matrices cannot be read and are rejected as unknown.
    pub fn from_index_matrix<T: MatrixElement>(axis: Axis, matrix: &Matrix<T>) -> Result<Self> {
        if matrix.is_empty() {
            return Ok(Self::new());
        }

        let (nrows, ncols) = matrix.dimensions();
        let mut indices = Vec::with_capacity(nrows * ncols);
        for row in 0..nrows {
            for col in 0..ncols {
                let Some(value) = matrix.get(row, col) else {
                    return Err(SelectError::UnknownMatrixType {
                        name: matrix.type_name(),
                    });
                };
                let value = value.to_f64();
                if !value.is_finite() {
                    return Err(SelectError::IndexOutOfRange {
                        axis,
                        fault: IndexFault::NonFinite(value),
                        len: 0,
                    });
                }
                indices.push(value as i64);
            }
        }

        Ok(Self { indices })
    }

    /// Number of indices in the list
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// An empty list means "the whole axis"
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Get the raw indices
    pub fn as_slice(&self) -> &[i64] {
        &self.indices
    }

    /// Iterate over the raw indices in caller order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = i64> + '_ {
        self.indices.iter().copied()
    }
}

impl From<Vec<i64>> for IndexList {
    fn from(indices: Vec<i64>) -> Self {
        Self { indices }
    }
}

impl From<&[i64]> for IndexList {
    fn from(indices: &[i64]) -> Self {
        Self::from_indices(indices)
    }
}

impl<const N: usize> From<[i64; N]> for IndexList {
    fn from(indices: [i64; N]) -> Self {
        Self {
            indices: indices.to_vec(),
        }
    }
}

impl FromIterator<i64> for IndexList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}
