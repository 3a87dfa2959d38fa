//! Validation and parsing utilities
//!
//! Pure functions with no I/O: bounds checks run before any extraction,
//! parsing turns text into ranges and index lists.

pub mod bounds;
pub mod parsing;

pub use bounds::{
    validate_index, validate_index_exclusive, validate_index_list, validate_range, Block,
};
pub use parsing::{parse_index_list, parse_range, MAX_EXPANDED_INDICES};
