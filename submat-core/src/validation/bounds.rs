//! Bounds validation for index lists and resolved ranges
//!
//! Every check fails fast: the first bad index or bound aborts the
//! selection before any extraction work starts.

use alloc::vec::Vec;

use crate::error::{IndexFault, Result, SelectError};
use crate::index::{Axis, IndexList};
use crate::selection::BlockRange;

/// Validated block: `[row_start, row_start + nrows) x [col_start, col_start + ncols)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub row_start: usize,
    pub nrows: usize,
    pub col_start: usize,
    pub ncols: usize,
}

impl Block {
    /// Row indices covered by the block
    pub fn rows(&self) -> core::ops::Range<usize> {
        self.row_start..self.row_start + self.nrows
    }

    /// Column indices covered by the block
    pub fn cols(&self) -> core::ops::Range<usize> {
        self.col_start..self.col_start + self.ncols
    }
}

/// Validate a resolved range against matrix dimensions
///
/// Fails when a start is negative, a range is empty or reversed, or the
/// range runs past the end of its axis. Rows are checked first.
pub fn validate_range(range: &BlockRange, dims: (usize, usize)) -> Result<Block> {
    let (row_start, nrows) = validate_axis_range(Axis::Row, range, dims)?;
    let (col_start, ncols) = validate_axis_range(Axis::Col, range, dims)?;
    Ok(Block {
        row_start,
        nrows,
        col_start,
        ncols,
    })
}

fn validate_axis_range(
    axis: Axis,
    range: &BlockRange,
    dims: (usize, usize),
) -> Result<(usize, usize)> {
    let (start, len) = range.axis(axis);
    let axis_len = axis.len_of(dims);
    let out_of_bounds = SelectError::RangeOutOfBounds {
        axis,
        start,
        end: start.saturating_add(len).saturating_sub(1),
        len: axis_len,
    };

    if start < 0 || len <= 0 {
        return Err(out_of_bounds);
    }
    // both non-negative here
    let (start, len) = (start as usize, len as usize);
    match start.checked_add(len) {
        Some(end) if end <= axis_len => Ok((start, len)),
        _ => Err(out_of_bounds),
    }
}

/// Validate one index: `0 <= index < len`
pub const fn validate_index(axis: Axis, index: i64, len: usize) -> Result<usize> {
    if index < 0 {
        return Err(SelectError::IndexOutOfRange {
            axis,
            fault: IndexFault::Negative(index),
            len,
        });
    }
    if index as u64 >= len as u64 {
        return Err(SelectError::IndexOutOfRange {
            axis,
            fault: IndexFault::TooLarge(index),
            len,
        });
    }
    Ok(index as usize)
}

/// Validate one index against exclusive bounds on both ends: `0 < index < len`
///
/// Used by the range path for column vectors, which has always rejected
/// row 0. The explicit-index path uses [`validate_index`] instead.
pub const fn validate_index_exclusive(axis: Axis, index: i64, len: usize) -> Result<usize> {
    if index <= 0 {
        return Err(SelectError::IndexOutOfRange {
            axis,
            fault: IndexFault::NotPositive(index),
            len,
        });
    }
    validate_index(axis, index, len)
}

/// Validate every index of a list and return them as offsets
pub fn validate_index_list(axis: Axis, list: &IndexList, len: usize) -> Result<Vec<usize>> {
    list.iter().map(|index| validate_index(axis, index, len)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn block(row_start: i64, row_len: i64, col_start: i64, col_len: i64) -> BlockRange {
        BlockRange {
            row_start,
            row_len,
            col_start,
            col_len,
        }
    }

    #[test]
    fn test_validate_range() {
        // Valid ranges
        assert_eq!(
            validate_range(&block(1, 2, 0, 3), (4, 3)),
            Ok(Block {
                row_start: 1,
                nrows: 2,
                col_start: 0,
                ncols: 3
            })
        );
        assert!(validate_range(&block(3, 1, 2, 1), (4, 3)).is_ok());

        // Runs past the end of the axis
        assert_eq!(
            validate_range(&block(2, 3, 0, 3), (4, 3)),
            Err(SelectError::RangeOutOfBounds {
                axis: Axis::Row,
                start: 2,
                end: 4,
                len: 4
            })
        );
        // Negative start
        assert_eq!(
            validate_range(&block(0, 4, -1, 2), (4, 3)).unwrap_err().axis(),
            Some(Axis::Col)
        );
        // Reversed range
        assert!(validate_range(&block(2, -1, 0, 3), (4, 3)).is_err());
    }

    #[test]
    fn test_rows_checked_before_columns() {
        let err = validate_range(&block(-1, 1, -1, 1), (2, 2)).unwrap_err();
        assert_eq!(err.axis(), Some(Axis::Row));
    }

    #[test]
    fn test_validate_index() {
        assert_eq!(validate_index(Axis::Row, 0, 3), Ok(0));
        assert_eq!(validate_index(Axis::Row, 2, 3), Ok(2));
        assert_eq!(
            validate_index(Axis::Row, 3, 3),
            Err(SelectError::IndexOutOfRange {
                axis: Axis::Row,
                fault: IndexFault::TooLarge(3),
                len: 3
            })
        );
        assert_eq!(
            validate_index(Axis::Col, -1, 3),
            Err(SelectError::IndexOutOfRange {
                axis: Axis::Col,
                fault: IndexFault::Negative(-1),
                len: 3
            })
        );
    }

    #[test]
    fn test_exclusive_bounds_reject_zero() {
        assert_eq!(validate_index_exclusive(Axis::Row, 1, 3), Ok(1));
        assert_eq!(
            validate_index_exclusive(Axis::Row, 0, 3),
            Err(SelectError::IndexOutOfRange {
                axis: Axis::Row,
                fault: IndexFault::NotPositive(0),
                len: 3
            })
        );
        assert!(validate_index_exclusive(Axis::Row, 3, 3).is_err());
    }

    #[test]
    fn test_validate_index_list_fails_on_first_bad_index() {
        let list = IndexList::from([0, 5, -2]);
        assert_eq!(
            validate_index_list(Axis::Row, &list, 4),
            Err(SelectError::IndexOutOfRange {
                axis: Axis::Row,
                fault: IndexFault::TooLarge(5),
                len: 4
            })
        );
        let list = IndexList::from([3, 3, 0]);
        assert_eq!(validate_index_list(Axis::Col, &list, 4), Ok(vec![3, 3, 0]));
    }
}
