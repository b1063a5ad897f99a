//! Capability traits for sequence elements
//!
//! Operations are layered by what the element type can do: every type
//! supports equality-based queries, [`Ordered`] types can be sorted, and
//! [`NumericElement`] types can be summed and averaged.

pub mod element;
pub mod ordered;

pub use element::NumericElement;
pub use ordered::Ordered;
