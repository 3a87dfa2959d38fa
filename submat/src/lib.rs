//! Submat - Sub-matrix selection over dense, sparse and column-vector matrices
//!
//! Given an input matrix, produce a new matrix holding a chosen subset of
//! its rows and/or columns. The selection comes either from explicit index
//! lists or from inclusive range options, and the storage representation
//! is preserved: dense stays dense, sparse stays sparse.
//!
//! ## Architecture
//!
//! - **submat-core**: representations, index lists, resolver and validator (no I/O)
//! - **submat**: extractors, entry points, logging and JSON helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use submat::{select_indices, DenseMatrix, IndexList, Matrix};
//!
//! let m = Matrix::from(DenseMatrix::from_fn(4, 4, |i, j| (i * 4 + j) as f64)).into_handle();
//! let out = select_indices(Some(&m), &IndexList::from([0, 2]), &IndexList::from([1, 3]))?;
//! assert_eq!(out.as_dense().unwrap().as_slice(), &[1.0, 3.0, 9.0, 11.0]);
//! # Ok::<(), submat::SelectError>(())
//! ```

// Re-export core abstractions
pub use submat_core::{
    // Matrix representations
    ColumnMatrix, DenseMatrix, Matrix, MatrixHandle, MatrixKind, SparseBuilder, SparseRowMatrix,
    // Core traits
    MatrixElement, MatrixShape, OpaqueStorage,
    // Selection
    Axis, IndexList, Remark, SelectionConfig,
    // Error handling
    ErrorCategory, IndexFault, SelectError,
    // Parsing utilities
    parse_index_list, parse_range,
    ports,
};

pub mod assembler;
#[cfg(feature = "serde")]
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
#[cfg(feature = "serde")]
pub mod io;

pub use assembler::Selection;
pub use engine::{select_indices, select_submatrix, SelectionInputs, SubMatrixSelector};
pub use error::{Error, Result};
