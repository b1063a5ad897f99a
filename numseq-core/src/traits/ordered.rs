//! Ordering capability for sortable element types
//!
//! Sorting needs a total order. Integers and strings already have one through
//! `Ord`; floats use the IEEE-754 `totalOrder` predicate so that NaN and signed
//! zeros land in a fixed position instead of making the comparator inconsistent.

use core::cmp::Ordering;

/// Trait for element types that support `sort`, `min`, `max` and `are_sorted`
///
/// `min`, `max` and `are_sorted` use the plain `PartialOrd` operators, so a
/// NaN never compares less or greater than anything. `sort` uses
/// [`Ordered::total_cmp`], which places negative NaN before every number and
/// positive NaN after every number, with `-0.0` before `+0.0`.
pub trait Ordered: PartialOrd {
    /// Total order used for sorting
    fn total_cmp(&self, other: &Self) -> Ordering;
}

impl Ordered for f32 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }
}

impl Ordered for f64 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

macro_rules! impl_ordered_via_ord {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Ordered for $ty {
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_ordered_via_ord!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool);

impl Ordered for &str {
    fn total_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(*self, *other)
    }
}

#[cfg(feature = "alloc")]
impl Ordered for alloc::string::String {
    fn total_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_total_order() {
        assert_eq!(Ordered::total_cmp(&1.0f64, &2.0), Ordering::Less);
        assert_eq!(Ordered::total_cmp(&f64::NAN, &f64::INFINITY), Ordering::Greater);
        assert_eq!(Ordered::total_cmp(&-f64::NAN, &f64::NEG_INFINITY), Ordering::Less);
        assert_eq!(Ordered::total_cmp(&-0.0f64, &0.0), Ordering::Less);
        assert_eq!(Ordered::total_cmp(&f32::NAN, &f32::NAN), Ordering::Equal);
    }

    #[test]
    fn test_str_order() {
        assert_eq!(Ordered::total_cmp(&"apple", &"banana"), Ordering::Less);
        assert_eq!(Ordered::total_cmp(&"b", &"B"), Ordering::Greater);
    }

    #[test]
    fn test_non_float_types_use_ord() {
        assert_eq!(Ordered::total_cmp(&-3i64, &2), (-3i64).cmp(&2));
        assert_eq!(Ordered::total_cmp(&u8::MAX, &0), Ordering::Greater);
        assert_eq!(Ordered::total_cmp(&'a', &'a'), Ordering::Equal);
        assert_eq!(Ordered::total_cmp(&false, &true), Ordering::Less);
    }
}
