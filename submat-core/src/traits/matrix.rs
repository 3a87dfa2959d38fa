//! Core matrix abstraction traits
//!
//! Shape queries shared by every representation, and the seam through
//! which hosts plug in representations the extractors do not specialize.

/// Shape of a two-dimensional matrix
pub trait MatrixShape {
    /// Get number of rows
    fn nrows(&self) -> usize;

    /// Get number of columns
    fn ncols(&self) -> usize;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    /// A matrix with no rows or no columns is empty
    fn is_empty(&self) -> bool {
        self.nrows() == 0 || self.ncols() == 0
    }
}

/// Storage provided by a host for a representation this crate does not know
///
/// Only the shape and a name are visible. Selection over such a matrix
/// either passes it through or fails, depending on the entry point.
pub trait OpaqueStorage: MatrixShape + core::fmt::Debug + Send + Sync {
    /// Human readable name of the representation
    fn type_name(&self) -> &'static str;
}
