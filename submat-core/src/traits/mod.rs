//! Abstract interfaces shared by all matrix representations

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::{MatrixShape, OpaqueStorage};
