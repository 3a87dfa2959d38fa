//! Sparse extraction without densifying
//!
//! Only stored entries of the selected rows or columns are visited. Output
//! entries go through a [`SparseBuilder`] and are compressed once at the end.

use hashbrown::HashMap;
use submat_core::{Block, MatrixElement, MatrixShape, SparseBuilder, SparseRowMatrix};

/// Copy the stored entries that fall inside a validated [`Block`]
pub fn block<T: MatrixElement>(matrix: &SparseRowMatrix<T>, block: &Block) -> SparseRowMatrix<T> {
    let mut builder = SparseBuilder::new(block.nrows, block.ncols);
    let cols = block.cols();
    for row in block.rows() {
        for (col, value) in matrix.row(row) {
            if cols.contains(&col) {
                builder.insert(row - block.row_start, col - block.col_start, value);
            }
        }
    }
    builder.build()
}

/// Pick rows and/or columns by validated offsets
///
/// With both lists the result is the intersection `|rows| x |cols|`: each
/// selected row's stored entries are walked and kept when their column is
/// selected. With one list only, the other axis keeps its full length and
/// entries keep their position on it.
pub fn select<T: MatrixElement>(
    matrix: &SparseRowMatrix<T>,
    rows: &[usize],
    cols: &[usize],
) -> SparseRowMatrix<T> {
    match (rows.is_empty(), cols.is_empty()) {
        (false, false) => {
            let positions = column_positions(cols);
            let mut builder = SparseBuilder::new(rows.len(), cols.len());
            for (i, &row) in rows.iter().enumerate() {
                for (col, value) in matrix.row(row) {
                    if let Some(targets) = positions.get(&col) {
                        for &j in targets {
                            builder.insert(i, j, value);
                        }
                    }
                }
            }
            builder.build()
        }
        (false, true) => {
            let mut builder = SparseBuilder::new(rows.len(), matrix.ncols());
            for (i, &row) in rows.iter().enumerate() {
                for (col, value) in matrix.row(row) {
                    builder.insert(i, col, value);
                }
            }
            builder.build()
        }
        (true, false) => {
            // one pass over the stored entries serves every selected column
            let positions = column_positions(cols);
            let mut builder = SparseBuilder::new(matrix.nrows(), cols.len());
            for (row, col, value) in matrix.entries() {
                if let Some(targets) = positions.get(&col) {
                    for &j in targets {
                        builder.insert(row, j, value);
                    }
                }
            }
            builder.build()
        }
        (true, true) => matrix.clone(),
    }
}

/// Map each selected source column to its output positions
fn column_positions(cols: &[usize]) -> HashMap<usize, Vec<usize>> {
    let mut positions: HashMap<usize, Vec<usize>> = HashMap::with_capacity(cols.len());
    for (j, &col) in cols.iter().enumerate() {
        positions.entry(col).or_default().push(j);
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> SparseRowMatrix<f64> {
        SparseRowMatrix::from_triplets(3, 3, vec![(0, 0, 5.0), (2, 2, 7.0)]).unwrap()
    }

    #[test]
    fn test_rows_only() {
        let out = select(&diagonal(), &[2], &[]);
        assert_eq!(out.dimensions(), (1, 3));
        assert_eq!(out.nnz(), 1);
        assert_eq!(out.get(0, 2), Some(7.0));
    }

    #[test]
    fn test_cols_only_with_duplicates() {
        let out = select(&diagonal(), &[], &[2, 0, 2]);
        assert_eq!(out.dimensions(), (3, 3));
        assert_eq!(
            out.entries().collect::<Vec<_>>(),
            vec![(0, 1, 5.0), (2, 0, 7.0), (2, 2, 7.0)]
        );
    }

    #[test]
    fn test_intersection() {
        let m = SparseRowMatrix::from_triplets(
            4,
            4,
            vec![(0, 1, 1.0), (1, 3, 2.0), (3, 1, 3.0), (3, 3, 4.0)],
        )
        .unwrap();
        let out = select(&m, &[3, 0], &[3, 1]);
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(
            out.entries().collect::<Vec<_>>(),
            vec![(0, 0, 4.0), (0, 1, 3.0), (1, 1, 1.0)]
        );
    }

    #[test]
    fn test_intersection_without_stored_entries() {
        let out = select(&diagonal(), &[0, 1], &[1, 2]);
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.nnz(), 0);
    }

    #[test]
    fn test_block() {
        let b = Block {
            row_start: 1,
            nrows: 2,
            col_start: 1,
            ncols: 2,
        };
        let out = block(&diagonal(), &b);
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.entries().collect::<Vec<_>>(), vec![(1, 1, 7.0)]);
    }
}
