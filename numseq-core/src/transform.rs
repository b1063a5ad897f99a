//! Producing operations over element slices
//!
//! Each function returns a freshly allocated `Vec` and leaves its input
//! untouched. An empty result is `Vec::new()`, which owns no heap memory.

use alloc::vec::Vec;

use crate::traits::Ordered;

/// Elements for which `condition` is true, in original order
pub fn only<T, F>(items: &[T], mut condition: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|item| condition(*item)).cloned().collect()
}

/// Elements for which `condition` is false, in original order
///
/// For any predicate, `only` and `without` partition the input.
pub fn without<T, F>(items: &[T], mut condition: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|item| !condition(*item)).cloned().collect()
}

/// Element-wise application of `f`; output length always equals input length
pub fn transform<T, F>(items: &[T], f: F) -> Vec<T>
where
    F: FnMut(&T) -> T,
{
    items.iter().map(f).collect()
}

/// Copy of `items` in non-descending order
///
/// The sort is stable. See [`Ordered`] for where NaN ends up.
pub fn sorted<T: Ordered + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    sort_in_place(&mut out);
    out
}

/// Copy of `items` in reverse order
pub fn reversed<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().rev().cloned().collect()
}

pub(crate) fn sort_in_place<T: Ordered>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    items.sort_by(Ordered::total_cmp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn is_even(x: &f64) -> bool {
        (*x as i64) % 2 == 0
    }

    #[test]
    fn test_only_without() {
        let items = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(only(&items, is_even), vec![2.0, 4.0]);
        assert_eq!(without(&items, is_even), vec![1.0, 3.0]);
    }

    #[test]
    fn test_only_nothing_matches() {
        let out = only(&[1.0, 3.0], is_even);
        assert!(out.is_empty());
        assert_eq!(out.capacity(), 0);
    }

    #[test]
    fn test_transform() {
        assert_eq!(transform(&[1.0, 2.0, 3.0], |x| x * 10.0), vec![10.0, 20.0, 30.0]);
        let empty: Vec<f64> = transform(&[], |x: &f64| x + 1.0);
        assert_eq!(empty.capacity(), 0);
    }

    #[test]
    fn test_sorted() {
        assert_eq!(sorted(&[3.0, 1.0, 2.0]), vec![1.0, 2.0, 3.0]);
        assert_eq!(sorted(&[5i32, -1, 5, 0]), vec![-1, 0, 5, 5]);
        assert_eq!(sorted(&["b", "a", "c"]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sorted_nan_goes_last() {
        let out = sorted(&[2.0, f64::NAN, -1.0]);
        assert_eq!(&out[..2], &[-1.0, 2.0]);
        assert!(out[2].is_nan());
    }

    #[test]
    fn test_sorted_signed_zero() {
        let out = sorted(&[0.0f64, -0.0]);
        assert!(out[0].is_sign_negative());
        assert!(out[1].is_sign_positive());
    }

    #[test]
    fn test_reversed() {
        assert_eq!(reversed(&[1.0, 2.0, 3.0]), vec![3.0, 2.0, 1.0]);
        assert_eq!(reversed(&[7.0]), vec![7.0]);
        assert!(reversed::<f64>(&[]).is_empty());
    }
}
