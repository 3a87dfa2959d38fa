//! Row-major dense matrix

use alloc::vec::Vec;

use crate::error::ShapeError;
use crate::traits::{MatrixElement, MatrixShape};

/// Dense matrix storing every element in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T: MatrixElement> DenseMatrix<T> {
    /// Create a matrix filled with zeros
    ///
    /// # Panics
    ///
    /// Panics if `nrows * ncols` overflows `usize`.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            data: alloc::vec![T::zero(); element_count(nrows, ncols)],
        }
    }

    /// Create a matrix from a row-major buffer
    pub fn from_rows(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, ShapeError> {
        let expected = nrows
            .checked_mul(ncols)
            .ok_or(ShapeError::TooLarge { nrows, ncols })?;
        if data.len() != expected {
            return Err(ShapeError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Create a matrix by evaluating `f(row, col)` for every element
    ///
    /// # Panics
    ///
    /// Panics if `nrows * ncols` overflows `usize`.
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(element_count(nrows, ncols));
        for row in 0..nrows {
            for col in 0..ncols {
                data.push(f(row, col));
            }
        }
        Self { nrows, ncols, data }
    }

    /// Get an element, or `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.nrows && col < self.ncols {
            Some(self.data[row * self.ncols + col])
        } else {
            None
        }
    }

    /// Get a full row as a slice
    ///
    /// # Panics
    /// Panics if `row >= nrows`.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Iterate over a column from top to bottom
    ///
    /// # Panics
    /// Panics on iteration if `col >= ncols`.
    pub fn col(&self, col: usize) -> impl ExactSizeIterator<Item = T> + '_ {
        (0..self.nrows).map(move |row| self.data[row * self.ncols + col])
    }

    /// Get the row-major element buffer
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return its row-major buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> MatrixShape for DenseMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }

    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T: MatrixElement> core::ops::Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.nrows && col < self.ncols, "index out of bounds");
        &self.data[row * self.ncols + col]
    }
}

impl<T: MatrixElement> core::ops::IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.nrows && col < self.ncols, "index out of bounds");
        &mut self.data[row * self.ncols + col]
    }
}

fn element_count(nrows: usize, ncols: usize) -> usize {
    match nrows.checked_mul(ncols) {
        Some(count) => count,
        None => panic!("a {nrows}x{ncols} dense matrix has too many elements"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_from_rows_checks_length() {
        assert_eq!(
            DenseMatrix::from_rows(2, 3, vec![1.0; 5]),
            Err(ShapeError::LengthMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn test_row_and_col_access() {
        let m = DenseMatrix::from_fn(3, 2, |r, c| (r * 2 + c) as i32);
        assert_eq!(m.row(1), &[2, 3]);
        assert_eq!(m.col(1).collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(m.get(2, 0), Some(4));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m[(0, 1)], 1);
    }

    #[test]
    fn test_index_mut() {
        let mut m = DenseMatrix::<f64>::zeros(2, 2);
        m[(1, 0)] = 4.5;
        assert_eq!(m.as_slice(), &[0.0, 0.0, 4.5, 0.0]);
    }

    #[test]
    fn test_overflowing_shape() {
        assert_eq!(
            DenseMatrix::<f64>::from_rows(usize::MAX, 2, Vec::new()),
            Err(ShapeError::TooLarge {
                nrows: usize::MAX,
                ncols: 2
            })
        );
    }

    #[test]
    #[should_panic(expected = "too many elements")]
    fn test_zeros_overflow_panics() {
        let _ = DenseMatrix::<f64>::zeros(usize::MAX, 2);
    }
}
