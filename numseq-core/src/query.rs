//! Read-only queries over element slices
//!
//! Every function here is a single pass over the input and needs no
//! allocator. Empty input never fails: accessors fall back to a default
//! value and aggregates to zero.

use crate::traits::{NumericElement, Ordered};

/// Returns true if some element equals `looking_for`
///
/// Floats use exact equality, so `contains(&[f64::NAN], f64::NAN)` is false.
pub fn contains<T: PartialEq>(items: &[T], looking_for: &T) -> bool {
    items.iter().any(|item| item == looking_for)
}

/// Returns the first element, or `default` if there are no elements
pub fn first_or<T: Clone>(items: &[T], default: T) -> T {
    items.first().cloned().unwrap_or(default)
}

/// Returns the last element, or `default` if there are no elements
pub fn last_or<T: Clone>(items: &[T], default: T) -> T {
    items.last().cloned().unwrap_or(default)
}

/// Returns true if no element is strictly less than its predecessor
///
/// Pairs that do not compare (NaN) never break the ordering.
pub fn are_sorted<T: Ordered>(items: &[T]) -> bool {
    !items.windows(2).any(|pair| pair[1] < pair[0])
}

/// Minimum value, or `T::default()` for an empty slice
///
/// The first element seeds the scan and is only replaced by a strictly
/// smaller value. A NaN in first position is therefore returned as the
/// minimum, while a NaN anywhere else is never selected.
pub fn min<T: Ordered + Clone + Default>(items: &[T]) -> T {
    extremum(items, |candidate, current| candidate < current)
}

/// Maximum value, or `T::default()` for an empty slice
///
/// NaN handling mirrors [`min`].
pub fn max<T: Ordered + Clone + Default>(items: &[T]) -> T {
    extremum(items, |candidate, current| candidate > current)
}

fn extremum<T, F>(items: &[T], replaces: F) -> T
where
    T: Clone + Default,
    F: Fn(&T, &T) -> bool,
{
    let Some((first, rest)) = items.split_first() else {
        return T::default();
    };

    let mut best = first;
    for item in rest {
        if replaces(item, best) {
            best = item;
        }
    }
    best.clone()
}

/// Sum of all elements, accumulated in order
///
/// Float rounding therefore depends on element order. Integer sums wrap on
/// overflow.
pub fn sum<T: NumericElement>(items: &[T]) -> T {
    items
        .iter()
        .fold(T::zero(), |acc, &item| acc.accumulate(item))
}

/// Arithmetic mean as f64, or 0.0 for an empty slice
pub fn average<T: NumericElement>(items: &[T]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    sum(items).to_f64() / items.len() as f64
}
