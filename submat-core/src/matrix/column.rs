//! Dense column vector

use alloc::vec::Vec;

use crate::traits::{MatrixElement, MatrixShape};

/// Dense matrix with exactly one column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMatrix<T> {
    values: Vec<T>,
}

impl<T: MatrixElement> ColumnMatrix<T> {
    /// Create a column vector from its values, top to bottom
    pub fn from_values(values: impl Into<Vec<T>>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Get the value in `row`, or `None` if out of bounds
    pub fn get(&self, row: usize) -> Option<T> {
        self.values.get(row).copied()
    }

    /// Get all values, top to bottom
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl<T> MatrixShape for ColumnMatrix<T> {
    fn nrows(&self) -> usize {
        self.values.len()
    }

    fn ncols(&self) -> usize {
        1
    }
}
