//! Element type constraints for numeric sequences
//!
//! This module defines the trait that constrains which types support the
//! arithmetic operations (`sum`, `average`) on top of the ordering and
//! equality operations every sequence offers.

/// Trait for types that can be summed and averaged
///
/// All numeric element types must be:
/// - Copy: Can be copied without allocation
/// - PartialOrd: Can be ordered (floats only partially, because of NaN)
/// - Default: The default value is the additive identity
pub trait NumericElement: Copy + PartialOrd + Default {
    /// The additive identity
    fn zero() -> Self {
        Self::default()
    }

    /// Add `other` to `self`
    ///
    /// Integers wrap on overflow so that summation never panics.
    fn accumulate(self, other: Self) -> Self;

    /// Convert to f64 for averaging and other mixed-type arithmetic
    fn to_f64(self) -> f64;
}

impl NumericElement for f32 {
    fn accumulate(self, other: Self) -> Self {
        self + other
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl NumericElement for f64 {
    fn accumulate(self, other: Self) -> Self {
        self + other
    }

    fn to_f64(self) -> f64 {
        self
    }
}

macro_rules! impl_integer_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NumericElement for $ty {
                fn accumulate(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integer_element!(i8, i16, i32, i64, u8, u16, u32, u64);
