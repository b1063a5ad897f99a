//! Owned, immutable sequence type
//!
//! `Sequence<T>` wraps a `Vec<T>` and exposes the query and transform
//! operations as methods, so they can be chained:
//!
//! ```
//! use numseq_core::Float64s;
//!
//! let s = Float64s::from(vec![3.0, 1.0, 2.0]);
//! assert_eq!(s.sort().into_reversed(), Float64s::from(vec![3.0, 2.0, 1.0]));
//! assert_eq!(s, Float64s::from(vec![3.0, 1.0, 2.0]));
//! ```
//!
//! Methods taking `&self` never modify the receiver. There is no `DerefMut`,
//! so the slice's in-place `sort`/`reverse` are unreachable through a shared
//! sequence. The `into_*` variants consume the sequence and reuse its buffer.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Deref;

use crate::query;
use crate::traits::{NumericElement, Ordered};
use crate::transform;

/// Ordered, finite sequence of elements of one type
///
/// An empty sequence built with [`Sequence::new`] owns no heap memory; it
/// behaves exactly like any other empty sequence, including serializing
/// as `[]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Sequence<T> {
    items: Vec<T>,
}

/// Sequence of 64-bit floats
pub type Float64s = Sequence<f64>;

/// Sequence of 32-bit floats
pub type Float32s = Sequence<f32>;

/// Sequence of 64-bit signed integers
pub type Ints = Sequence<i64>;

/// Sequence of owned strings
pub type Strings = Sequence<String>;

impl<T> Sequence<T> {
    /// Create an empty sequence without allocating
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Wrap an existing vector
    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Unwrap into the backing vector
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Borrow the elements as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the sequence and return it in reverse order
    ///
    /// Reuses the buffer; sequences shorter than two are returned as is.
    pub fn into_reversed(mut self) -> Self {
        if self.items.len() >= 2 {
            self.items.reverse();
        }
        self
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Returns true if some element equals `looking_for`
    pub fn contains(&self, looking_for: &T) -> bool {
        query::contains(&self.items, looking_for)
    }
}

impl<T: Clone> Sequence<T> {
    /// New sequence with only the elements for which `condition` is true
    pub fn only<F>(&self, condition: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        Self::from_vec(transform::only(&self.items, condition))
    }

    /// New sequence with only the elements for which `condition` is false
    pub fn without<F>(&self, condition: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        Self::from_vec(transform::without(&self.items, condition))
    }

    /// New sequence where element `i` is `f(self[i])`
    pub fn transform<F>(&self, f: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        Self::from_vec(transform::transform(&self.items, f))
    }

    /// First element, or `default` if the sequence is empty
    pub fn first_or(&self, default: T) -> T {
        query::first_or(&self.items, default)
    }

    /// Last element, or `default` if the sequence is empty
    pub fn last_or(&self, default: T) -> T {
        query::last_or(&self.items, default)
    }

    /// New sequence with the elements in opposite order
    ///
    /// Combine with [`Sequence::sort`] for a descending order:
    /// `s.sort().into_reversed()`.
    pub fn reverse(&self) -> Self {
        if self.items.len() < 2 {
            return self.clone();
        }
        Self::from_vec(transform::reversed(&self.items))
    }
}

impl<T: Clone + Default> Sequence<T> {
    /// First element, or `T::default()` if the sequence is empty
    ///
    /// Cannot tell an empty sequence from a leading zero; use
    /// [`Sequence::first_or`] with a sentinel when that matters.
    ///
    /// Only defined when `T: Default`. For other element types `s.first()`
    /// resolves through `Deref` to [`slice::first`], which returns
    /// `Option<&T>`.
    pub fn first(&self) -> T {
        self.first_or(T::default())
    }

    /// Last element, or `T::default()` if the sequence is empty
    ///
    /// As with [`Sequence::first`], element types without `Default` reach
    /// [`slice::last`] instead and get `Option<&T>`.
    pub fn last(&self) -> T {
        self.last_or(T::default())
    }
}

impl<T: Ordered + Clone> Sequence<T> {
    /// True if no element is strictly less than its predecessor
    pub fn are_sorted(&self) -> bool {
        query::are_sorted(&self.items)
    }

    /// New sequence in non-descending order (stable)
    pub fn sort(&self) -> Self {
        if self.items.len() < 2 {
            return self.clone();
        }
        Self::from_vec(transform::sorted(&self.items))
    }

    /// Consume the sequence and return it sorted, reusing the buffer
    pub fn into_sorted(mut self) -> Self {
        transform::sort_in_place(&mut self.items);
        self
    }
}

impl<T: Ordered + Clone + Default> Sequence<T> {
    /// Minimum value, or `T::default()` if the sequence is empty
    pub fn min(&self) -> T {
        query::min(&self.items)
    }

    /// Maximum value, or `T::default()` if the sequence is empty
    pub fn max(&self) -> T {
        query::max(&self.items)
    }
}

impl<T: NumericElement> Sequence<T> {
    /// Sum of all elements in encounter order
    pub fn sum(&self) -> T {
        query::sum(&self.items)
    }

    /// Mean of all elements, or 0.0 if the sequence is empty
    pub fn average(&self) -> f64 {
        query::average(&self.items)
    }
}

impl<T: bytemuck::Pod> Sequence<T> {
    /// Raw bytes of the elements in memory order
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.items.as_slice())
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Self::from_vec(items.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_vec(Vec::from(items))
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(seq: Sequence<T>) -> Self {
        seq.items
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
