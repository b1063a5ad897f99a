//! numseq - Convenience operations over homogeneous numeric sequences
//!
//! This library provides membership tests, filtering, mapping, sorting,
//! aggregates and JSON encoding over immutable sequences.
//!
//! ## Architecture
//!
//! numseq follows the same split as its core crate:
//!
//! - **numseq-core**: Element traits, slice queries and the `Sequence` type (no_std)
//! - **numseq**: JSON encoding, error type and logging
//!
//! ## Quick Start
//!
//! ```rust
//! use numseq::{Float64s, JsonSequence};
//!
//! fn example() -> numseq::Result<()> {
//!     let readings = Float64s::from(vec![3.5, 1.0, 2.25, 8.0]);
//!
//!     let high = readings.only(|x| *x > 2.0);
//!     assert_eq!(high.len(), 3);
//!
//!     let descending = readings.sort().into_reversed();
//!     assert_eq!(descending.first(), 8.0);
//!
//!     println!("{}", descending.json_string()?);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Layered capabilities**: equality queries for every type, sorting for
//!   ordered types, `sum`/`average` for numeric types
//! - **No mutation**: every producing operation returns a new sequence
//! - **JSON**: empty sequences encode as `[]`; NaN and infinity are rejected
//!   or written as `null`, per [`JsonConfig`]

// Re-export core abstractions
pub use numseq_core::{
    // Sequence types
    Float32s, Float64s, Ints, Sequence, Strings,
    // Element traits
    NumericElement, Ordered,
    // Core errors
    SeqError,
};
pub use numseq_core::{query, transform};

pub mod error;
pub mod json;

pub use error::{Error, Result};

pub use json::{
    from_json_str, to_json_string, to_json_string_with, JsonConfig, JsonElement, JsonSequence,
    NonFinitePolicy,
};
