#![no_std]

//! Submat Core - Matrix representations and selection rules
//!
//! This crate provides the data types and pure rules behind sub-matrix
//! selection: dense, sparse and column-vector matrices, index lists, the
//! range configuration, the resolver that turns either into a canonical
//! selection, and the bounds validator. It performs no I/O.

extern crate alloc;

pub mod error;
pub mod index;
pub mod matrix;
pub mod selection;
pub mod traits;
pub mod validation;

pub use error::{ErrorCategory, IndexFault, ParseError, Result, SelectError, ShapeError};
pub use index::{Axis, IndexList};
pub use matrix::{
    ColumnMatrix, DenseMatrix, Matrix, MatrixHandle, MatrixKind, SparseBuilder, SparseRowMatrix,
};
pub use selection::{BlockRange, Remark, Resolution, SelectionConfig, SelectionSpec};
pub use traits::{MatrixElement, MatrixShape, OpaqueStorage};
pub use validation::{parse_index_list, parse_range, Block};

/// Names of the data ports and options a host wires to the selector
pub mod ports {
    /// Matrix to select from
    pub const INPUT_MATRIX: &str = "InputMatrix";
    /// Optional index matrix, flattened row-major into row indices
    pub const ROW_INDICES: &str = "RowIndices";
    /// Optional index matrix, flattened row-major into column indices
    pub const COLUMN_INDICES: &str = "ColumnIndices";
    /// Selected sub-matrix
    pub const RESULT_MATRIX: &str = "ResultMatrix";

    /// Option names, in the order hosts usually present them
    pub const OPTIONS: [&str; 6] = [
        "rowCheckBox",
        "columnCheckBox",
        "rowStartSpinBox",
        "rowEndSpinBox",
        "columnStartSpinBox",
        "columnEndSpinBox",
    ];
}
