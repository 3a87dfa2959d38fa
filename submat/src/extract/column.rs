//! Column-vector extraction
//!
//! Two entry points with different row bounds:
//! - [`select_rows`] (explicit indices) accepts `0 <= i < rows`
//! - [`select_range`] (range options) accepts `0 < i < rows`, so row 0
//!   can never be selected through a range
//!
//! Callers rely on both, so the bounds are kept as they are.

use submat_core::validation::{validate_index, validate_index_exclusive};
use submat_core::{
    Axis, BlockRange, ColumnMatrix, IndexList, Matrix, MatrixElement, MatrixShape, Result,
    SelectError,
};

/// Select rows of a column vector by explicit index
///
/// The column list may only contain 0. The row list is mandatory.
pub fn select_rows<T: MatrixElement>(
    matrix: &Matrix<T>,
    rows: &IndexList,
    cols: &IndexList,
) -> Result<ColumnMatrix<T>> {
    let values = column_values(matrix)?;

    if let Some(index) = cols.iter().find(|&col| col != 0) {
        return Err(SelectError::BadColumnIndex { index });
    }
    if rows.is_empty() {
        return Err(SelectError::EmptySelection);
    }

    let picked = rows
        .iter()
        .map(|row| validate_index(Axis::Row, row, values.len()).map(|row| values[row]))
        .collect::<Result<Vec<T>>>()?;

    Ok(ColumnMatrix::from_values(picked))
}

/// Select a contiguous run of rows of a column vector from range options
///
/// The column part of the range must cover exactly column 0.
pub fn select_range<T: MatrixElement>(
    matrix: &Matrix<T>,
    range: &BlockRange,
) -> Result<ColumnMatrix<T>> {
    let values = column_values(matrix)?;

    let (col_start, col_len) = range.axis(Axis::Col);
    if col_start != 0 {
        return Err(SelectError::BadColumnIndex { index: col_start });
    }
    if col_len != 1 {
        return Err(SelectError::BadColumnIndex {
            index: col_start.saturating_add(col_len).saturating_sub(1),
        });
    }

    let (row_start, row_len) = range.axis(Axis::Row);
    if row_len <= 0 {
        return Err(SelectError::RangeOutOfBounds {
            axis: Axis::Row,
            start: row_start,
            end: row_start.saturating_add(row_len).saturating_sub(1),
            len: values.len(),
        });
    }

    let picked = (row_start..row_start.saturating_add(row_len))
        .map(|row| validate_index_exclusive(Axis::Row, row, values.len()).map(|row| values[row]))
        .collect::<Result<Vec<T>>>()?;

    Ok(ColumnMatrix::from_values(picked))
}

/// Get the values of a column vector, rejecting anything else
///
/// Dense matrices with a single column are accepted as column vectors.
fn column_values<T: MatrixElement>(matrix: &Matrix<T>) -> Result<&[T]> {
    let values = match matrix {
        Matrix::Column(m) => m.as_slice(),
        Matrix::Dense(m) if m.ncols() == 1 => m.as_slice(),
        other => {
            return Err(SelectError::NotAColumnMatrix {
                cols: other.ncols(),
            })
        }
    };
    if values.is_empty() {
        return Err(SelectError::EmptyColumnMatrix);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use submat_core::{DenseMatrix, IndexFault};

    fn tens() -> Matrix<f64> {
        ColumnMatrix::from_values(vec![10.0, 20.0, 30.0, 40.0, 50.0]).into()
    }

    fn rows(start: i64, len: i64) -> BlockRange {
        BlockRange {
            row_start: start,
            row_len: len,
            col_start: 0,
            col_len: 1,
        }
    }

    #[test]
    fn test_select_rows() {
        let out = select_rows(&tens(), &IndexList::from([1, 3]), &IndexList::from([0])).unwrap();
        assert_eq!(out.as_slice(), &[20.0, 40.0]);
        assert_eq!(out.dimensions(), (2, 1));
    }

    #[test]
    fn test_select_rows_accepts_row_zero() {
        let out = select_rows(&tens(), &IndexList::from([0, 0]), &IndexList::new()).unwrap();
        assert_eq!(out.as_slice(), &[10.0, 10.0]);
    }

    #[test]
    fn test_select_range_rejects_row_zero() {
        assert_eq!(select_range(&tens(), &rows(1, 3)).unwrap().as_slice(), &[20.0, 30.0, 40.0]);
        assert_eq!(
            select_range(&tens(), &rows(0, 2)),
            Err(SelectError::IndexOutOfRange {
                axis: Axis::Row,
                fault: IndexFault::NotPositive(0),
                len: 5
            })
        );
    }

    #[test]
    fn test_structural_errors() {
        let wide: Matrix<f64> = DenseMatrix::zeros(3, 2).into();
        assert_eq!(
            select_rows(&wide, &IndexList::from([0]), &IndexList::new()),
            Err(SelectError::NotAColumnMatrix { cols: 2 })
        );

        let empty: Matrix<f64> = ColumnMatrix::from_values(Vec::new()).into();
        assert_eq!(
            select_range(&empty, &rows(1, 1)),
            Err(SelectError::EmptyColumnMatrix)
        );

        assert_eq!(
            select_rows(&tens(), &IndexList::from([1]), &IndexList::from([0, 2])),
            Err(SelectError::BadColumnIndex { index: 2 })
        );
        assert_eq!(
            select_rows(&tens(), &IndexList::new(), &IndexList::from([0])),
            Err(SelectError::EmptySelection)
        );
    }

    #[test]
    fn test_single_column_dense_is_a_column() {
        let m: Matrix<i32> = DenseMatrix::from_rows(3, 1, vec![7, 8, 9]).unwrap().into();
        let out = select_rows(&m, &IndexList::from([2]), &IndexList::new()).unwrap();
        assert_eq!(out.as_slice(), &[9]);
    }
}
