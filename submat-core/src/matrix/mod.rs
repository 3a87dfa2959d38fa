//! Matrix representations
//!
//! [`Matrix`] is a closed set of representations with capability
//! queries. Extractors dispatch on [`MatrixKind`]; the [`Matrix::Opaque`]
//! variant carries host storage that no extractor specializes.

pub mod column;
pub mod dense;
pub mod sparse;

use alloc::sync::Arc;

pub use column::ColumnMatrix;
pub use dense::DenseMatrix;
pub use sparse::{SparseBuilder, SparseRowMatrix};

use crate::traits::{MatrixElement, MatrixShape, OpaqueStorage};

/// Shared, reference-counted matrix handle
pub type MatrixHandle<T> = Arc<Matrix<T>>;

/// Storage representation tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixKind {
    Dense,
    Sparse,
    Column,
    Opaque,
}

/// A matrix in one of the supported representations
#[derive(Debug, Clone)]
pub enum Matrix<T> {
    Dense(DenseMatrix<T>),
    Sparse(SparseRowMatrix<T>),
    Column(ColumnMatrix<T>),
    Opaque(Arc<dyn OpaqueStorage>),
}

impl<T: MatrixElement> Matrix<T> {
    /// The 0x0 dense matrix
    pub fn empty() -> Self {
        Matrix::Dense(DenseMatrix::zeros(0, 0))
    }

    /// Wrap this matrix in a shared handle
    pub fn into_handle(self) -> MatrixHandle<T> {
        Arc::new(self)
    }

    /// Get the representation tag
    pub fn kind(&self) -> MatrixKind {
        match self {
            Matrix::Dense(_) => MatrixKind::Dense,
            Matrix::Sparse(_) => MatrixKind::Sparse,
            Matrix::Column(_) => MatrixKind::Column,
            Matrix::Opaque(_) => MatrixKind::Opaque,
        }
    }

    pub fn is_dense(&self) -> bool {
        matches!(self, Matrix::Dense(_))
    }

    pub fn is_sparse(&self) -> bool {
        matches!(self, Matrix::Sparse(_))
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Matrix::Column(_))
    }

    /// Name of the representation, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Matrix::Dense(_) => "dense",
            Matrix::Sparse(_) => "sparse",
            Matrix::Column(_) => "column",
            Matrix::Opaque(storage) => storage.type_name(),
        }
    }

    /// Read an element regardless of representation
    ///
    /// Unstored sparse positions read as zero. Returns `None` when out of
    /// bounds or when the representation is opaque.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        match self {
            Matrix::Dense(m) => m.get(row, col),
            Matrix::Sparse(m) => {
                if row < m.nrows() && col < m.ncols() {
                    Some(m.get(row, col).unwrap_or_else(T::zero))
                } else {
                    None
                }
            }
            Matrix::Column(m) if col == 0 => m.get(row),
            Matrix::Column(_) | Matrix::Opaque(_) => None,
        }
    }

    pub fn as_dense(&self) -> Option<&DenseMatrix<T>> {
        match self {
            Matrix::Dense(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sparse(&self) -> Option<&SparseRowMatrix<T>> {
        match self {
            Matrix::Sparse(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_column(&self) -> Option<&ColumnMatrix<T>> {
        match self {
            Matrix::Column(m) => Some(m),
            _ => None,
        }
    }
}

impl<T> MatrixShape for Matrix<T> {
    fn nrows(&self) -> usize {
        match self {
            Matrix::Dense(m) => m.nrows(),
            Matrix::Sparse(m) => m.nrows(),
            Matrix::Column(m) => m.nrows(),
            Matrix::Opaque(storage) => storage.nrows(),
        }
    }

    fn ncols(&self) -> usize {
        match self {
            Matrix::Dense(m) => m.ncols(),
            Matrix::Sparse(m) => m.ncols(),
            Matrix::Column(m) => m.ncols(),
            Matrix::Opaque(storage) => storage.ncols(),
        }
    }
}

// Opaque storage compares by identity.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Matrix::Dense(a), Matrix::Dense(b)) => a == b,
            (Matrix::Sparse(a), Matrix::Sparse(b)) => a == b,
            (Matrix::Column(a), Matrix::Column(b)) => a == b,
            (Matrix::Opaque(a), Matrix::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T> From<DenseMatrix<T>> for Matrix<T> {
    fn from(m: DenseMatrix<T>) -> Self {
        Matrix::Dense(m)
    }
}

impl<T> From<SparseRowMatrix<T>> for Matrix<T> {
    fn from(m: SparseRowMatrix<T>) -> Self {
        Matrix::Sparse(m)
    }
}

impl<T> From<ColumnMatrix<T>> for Matrix<T> {
    fn from(m: ColumnMatrix<T>) -> Self {
        Matrix::Column(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[derive(Debug)]
    struct Banded;

    impl MatrixShape for Banded {
        fn nrows(&self) -> usize {
            4
        }

        fn ncols(&self) -> usize {
            4
        }
    }

    impl OpaqueStorage for Banded {
        fn type_name(&self) -> &'static str {
            "banded"
        }
    }

    #[test]
    fn test_capability_queries() {
        let dense: Matrix<f64> = DenseMatrix::zeros(2, 3).into();
        let sparse: Matrix<f64> = SparseRowMatrix::empty(2, 3).into();
        let column: Matrix<f64> = ColumnMatrix::from_values(vec![1.0, 2.0]).into();
        let opaque: Matrix<f64> = Matrix::Opaque(Arc::new(Banded));

        assert!(dense.is_dense() && !dense.is_sparse());
        assert!(sparse.is_sparse() && !sparse.is_column());
        assert!(column.is_column() && column.ncols() == 1);
        assert_eq!(opaque.kind(), MatrixKind::Opaque);
        assert_eq!(opaque.type_name(), "banded");
        assert_eq!(opaque.dimensions(), (4, 4));
    }

    #[test]
    fn test_generic_get() {
        let sparse: Matrix<i32> = SparseRowMatrix::from_triplets(2, 2, vec![(1, 0, 9)])
            .unwrap()
            .into();
        assert_eq!(sparse.get(1, 0), Some(9));
        assert_eq!(sparse.get(0, 1), Some(0));
        assert_eq!(sparse.get(2, 0), None);

        let column: Matrix<i32> = ColumnMatrix::from_values(vec![4, 5]).into();
        assert_eq!(column.get(1, 0), Some(5));
        assert_eq!(column.get(1, 1), None);
    }

    #[test]
    fn test_empty() {
        assert!(Matrix::<f64>::empty().is_empty());
        assert!(Matrix::<f64>::from(DenseMatrix::zeros(3, 0)).is_empty());
    }
}
