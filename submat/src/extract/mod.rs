//! Representation-specific extraction
//!
//! Each extractor is a pure function over validated input that allocates
//! a new matrix of the same representation family.

pub mod column;
pub mod dense;
pub mod sparse;
