//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements and used in index matrices.

/// Trait for types that can be stored as matrix elements
///
/// All element types must be:
/// - Copy: Can be copied without allocation
/// - PartialEq: Can be compared for equality
/// - Debug: Can be printed in diagnostics
pub trait MatrixElement: Copy + PartialEq + core::fmt::Debug + Send + Sync + 'static {
    /// The additive identity, used for unstored sparse entries
    fn zero() -> Self;

    /// Whether this value would be left out of a sparse structure
    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Convert from f64 for generic construction
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    ///
    /// Index matrices are read through this conversion, so integer
    /// element types always produce finite values.
    fn to_f64(self) -> f64;
}

macro_rules! impl_matrix_element {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl MatrixElement for $ty {
                fn zero() -> Self {
                    $zero
                }

                fn from_f64(value: f64) -> Self {
                    value as $ty
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_matrix_element! {
    f32 => 0.0,
    f64 => 0.0,
    i32 => 0,
    i64 => 0,
    u32 => 0,
    u64 => 0,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_detection() {
        assert!(0.0f64.is_zero());
        assert!(!1.5f32.is_zero());
        assert!(0i32.is_zero());
        assert!(!7u64.is_zero());
    }

    #[test]
    fn test_f64_conversions() {
        assert_eq!(i32::from_f64(3.9), 3);
        assert_eq!(f32::from_f64(2.5), 2.5);
        assert_eq!(u32::to_f64(9), 9.0);
        assert!(f64::NAN.to_f64().is_nan());
    }
}
