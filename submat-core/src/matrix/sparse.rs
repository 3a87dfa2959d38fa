//! Compressed sparse row matrix and its coordinate-map builder

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::error::ShapeError;
use crate::traits::{MatrixElement, MatrixShape};

/// Sparse matrix in compressed sparse row (CSR) layout
///
/// Column indices within each row are strictly increasing and every
/// stored value is nonzero.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseRowMatrix<T> {
    nrows: usize,
    ncols: usize,
    /// `row_ptrs[r]..row_ptrs[r + 1]` spans row `r` in the arrays below
    row_ptrs: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: MatrixElement> SparseRowMatrix<T> {
    /// Create a matrix with no stored entries
    pub fn empty(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            row_ptrs: alloc::vec![0; nrows + 1],
            col_indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Create a matrix from `(row, col, value)` triplets
    ///
    /// Zero values are dropped; for repeated coordinates the last triplet wins.
    pub fn from_triplets(
        nrows: usize,
        ncols: usize,
        triplets: impl IntoIterator<Item = (usize, usize, T)>,
    ) -> Result<Self, ShapeError> {
        let mut builder = SparseBuilder::new(nrows, ncols);
        for (row, col, value) in triplets {
            if row >= nrows || col >= ncols {
                return Err(ShapeError::EntryOutOfBounds {
                    row,
                    col,
                    nrows,
                    ncols,
                });
            }
            builder.insert(row, col, value);
        }
        Ok(builder.build())
    }

    /// Get number of stored (nonzero) elements
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Get a stored element, or `None` if the position holds no entry
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.nrows || col >= self.ncols {
            return None;
        }
        let span = self.row_ptrs[row]..self.row_ptrs[row + 1];
        let cols = &self.col_indices[span.clone()];
        cols.binary_search(&col)
            .ok()
            .map(|offset| self.values[span.start + offset])
    }

    /// Iterate over the stored entries of a row as `(col, value)`
    ///
    /// # Panics
    /// Panics if `row >= nrows`.
    pub fn row(&self, row: usize) -> impl ExactSizeIterator<Item = (usize, T)> + '_ {
        let span = self.row_ptrs[row]..self.row_ptrs[row + 1];
        self.col_indices[span.clone()]
            .iter()
            .copied()
            .zip(self.values[span].iter().copied())
    }

    /// Iterate over every stored entry as `(row, col, value)` in row order
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.nrows)
            .flat_map(move |row| self.row(row).map(move |(col, value)| (row, col, value)))
    }
}

impl<T> MatrixShape for SparseRowMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }

    fn ncols(&self) -> usize {
        self.ncols
    }
}

/// Accumulates sparse entries in a row -> column -> value map
///
/// Entries may arrive in any order; [`SparseBuilder::build`] sorts and
/// compresses them once. Inserting the same coordinate twice keeps the
/// later value.
#[derive(Debug, Clone)]
pub struct SparseBuilder<T> {
    nrows: usize,
    ncols: usize,
    rows: HashMap<usize, HashMap<usize, T>>,
}

impl<T: MatrixElement> SparseBuilder<T> {
    /// Create a builder for a matrix of the given shape
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            rows: HashMap::new(),
        }
    }

    /// Record an entry. Zero values are not stored.
    ///
    /// Coordinates must lie inside the builder's shape.
    pub fn insert(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.nrows && col < self.ncols);
        if value.is_zero() {
            return;
        }
        self.rows.entry(row).or_default().insert(col, value);
    }

    /// Number of entries recorded so far
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    /// Whether no entries have been recorded
    pub fn is_empty(&self) -> bool {
        self.rows.values().all(HashMap::is_empty)
    }

    /// Freeze the accumulated entries into CSR form
    pub fn build(self) -> SparseRowMatrix<T> {
        let nnz = self.len();
        let mut row_ptrs = Vec::with_capacity(self.nrows + 1);
        let mut col_indices = Vec::with_capacity(nnz);
        let mut values = Vec::with_capacity(nnz);

        let mut rows: Vec<(usize, HashMap<usize, T>)> = self.rows.into_iter().collect();
        rows.sort_unstable_by_key(|(row, _)| *row);

        let mut pending = rows.into_iter().peekable();
        row_ptrs.push(0);
        for row in 0..self.nrows {
            if let Some((_, cols)) = pending.next_if(|(r, _)| *r == row) {
                let mut cols: Vec<(usize, T)> = cols.into_iter().collect();
                cols.sort_unstable_by_key(|(col, _)| *col);
                for (col, value) in cols {
                    col_indices.push(col);
                    values.push(value);
                }
            }
            row_ptrs.push(col_indices.len());
        }

        SparseRowMatrix {
            nrows: self.nrows,
            ncols: self.ncols,
            row_ptrs,
            col_indices,
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_build_sorts_rows_and_columns() {
        let mut builder = SparseBuilder::new(3, 4);
        builder.insert(2, 3, 1.0);
        builder.insert(0, 2, 2.0);
        builder.insert(2, 0, 3.0);
        builder.insert(0, 1, 4.0);
        let m = builder.build();

        assert_eq!(m.nnz(), 4);
        assert_eq!(m.row(0).collect::<Vec<_>>(), vec![(1, 4.0), (2, 2.0)]);
        assert_eq!(m.row(1).count(), 0);
        assert_eq!(m.row(2).collect::<Vec<_>>(), vec![(0, 3.0), (3, 1.0)]);
    }

    #[test]
    fn test_later_insert_wins_and_zeros_are_dropped() {
        let mut builder = SparseBuilder::new(2, 2);
        builder.insert(1, 1, 5);
        builder.insert(1, 1, 6);
        builder.insert(0, 0, 0);
        assert_eq!(builder.len(), 1);
        let m = builder.build();
        assert_eq!(m.get(1, 1), Some(6));
        assert_eq!(m.get(0, 0), None);
    }

    #[test]
    fn test_from_triplets_rejects_out_of_bounds() {
        let err = SparseRowMatrix::from_triplets(2, 2, vec![(0, 0, 1.0), (2, 1, 3.0)]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::EntryOutOfBounds {
                row: 2,
                col: 1,
                nrows: 2,
                ncols: 2
            }
        );
    }

    #[test]
    fn test_entries_in_row_order() {
        let m = SparseRowMatrix::from_triplets(3, 3, vec![(2, 2, 7.0), (0, 0, 5.0)]).unwrap();
        assert_eq!(
            m.entries().collect::<Vec<_>>(),
            vec![(0, 0, 5.0), (2, 2, 7.0)]
        );
        assert_eq!(SparseRowMatrix::<f64>::empty(2, 5).entries().count(), 0);
    }
}
