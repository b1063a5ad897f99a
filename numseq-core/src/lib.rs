#![no_std]

//! numseq core - Element traits and sequence operations
//!
//! This crate provides the element capability traits, allocation-free
//! queries over slices, and (with the `alloc` feature) the owned
//! [`Sequence`] type with its producing operations.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod query;
pub mod traits;

#[cfg(feature = "alloc")]
pub mod sequence;
#[cfg(feature = "alloc")]
pub mod transform;

pub use error::*;
pub use traits::*;

#[cfg(feature = "alloc")]
pub use sequence::{Float32s, Float64s, Ints, Sequence, Strings};
