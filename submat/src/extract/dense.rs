//! Dense extraction: contiguous blocks and explicit row/column picks

use submat_core::{Block, DenseMatrix, MatrixElement, MatrixShape};

/// Copy the sub-block described by a validated [`Block`]
pub fn block<T: MatrixElement>(matrix: &DenseMatrix<T>, block: &Block) -> DenseMatrix<T> {
    DenseMatrix::from_fn(block.nrows, block.ncols, |i, j| {
        matrix[(block.row_start + i, block.col_start + j)]
    })
}

/// Pick rows and/or columns by validated offsets
///
/// An empty slice selects the whole axis. Order and duplicates are kept:
/// `output[i][j] = input[rows[i]][cols[j]]`.
pub fn select<T: MatrixElement>(
    matrix: &DenseMatrix<T>,
    rows: &[usize],
    cols: &[usize],
) -> DenseMatrix<T> {
    match (rows.is_empty(), cols.is_empty()) {
        (false, false) => {
            DenseMatrix::from_fn(rows.len(), cols.len(), |i, j| matrix[(rows[i], cols[j])])
        }
        (false, true) => {
            DenseMatrix::from_fn(rows.len(), matrix.ncols(), |i, j| matrix[(rows[i], j)])
        }
        (true, false) => {
            DenseMatrix::from_fn(matrix.nrows(), cols.len(), |i, j| matrix[(i, cols[j])])
        }
        (true, true) => matrix.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `M[i][j] = i * ncols + j`
    fn counting(nrows: usize, ncols: usize) -> DenseMatrix<f64> {
        DenseMatrix::from_fn(nrows, ncols, |i, j| (i * ncols + j) as f64)
    }

    #[test]
    fn test_rows_and_cols() {
        let m = counting(4, 4);
        let out = select(&m, &[0, 2], &[1, 3]);
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.as_slice(), &[1.0, 3.0, 9.0, 11.0]);
    }

    #[test]
    fn test_rows_only_keeps_order_and_duplicates() {
        let m = counting(5, 3);
        let out = select(&m, &[2, 2, 0], &[]);
        assert_eq!(out.dimensions(), (3, 3));
        assert_eq!(out.row(0), m.row(2));
        assert_eq!(out.row(1), m.row(2));
        assert_eq!(out.row(2), m.row(0));
    }

    #[test]
    fn test_cols_only() {
        let m = counting(3, 4);
        let out = select(&m, &[], &[3, 0]);
        assert_eq!(out.dimensions(), (3, 2));
        assert_eq!(out.col(0).collect::<Vec<_>>(), m.col(3).collect::<Vec<_>>());
        assert_eq!(out.col(1).collect::<Vec<_>>(), vec![0.0, 4.0, 8.0]);
    }

    #[test]
    fn test_block() {
        let m = counting(4, 3);
        let b = Block {
            row_start: 1,
            nrows: 2,
            col_start: 1,
            ncols: 2,
        };
        let out = block(&m, &b);
        assert_eq!(out.as_slice(), &[4.0, 5.0, 7.0, 8.0]);
    }
}
