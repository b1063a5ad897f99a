//! JSON array encoding for sequences
//!
//! Sequences always encode as a JSON array. An empty sequence, whether it was
//! built with [`Sequence::new`] or emptied by filtering, encodes as `[]`.
//!
//! JSON has no representation for NaN or infinity. By default the encoder
//! rejects them with [`SeqError::NonFiniteValue`]; [`NonFinitePolicy::Null`]
//! writes `null` in their place instead.

use numseq_core::{SeqError, Sequence};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// What to do with NaN and infinite values when encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NonFinitePolicy {
    /// Fail with [`SeqError::NonFiniteValue`] at the first offending element
    #[default]
    Reject,
    /// Write the JSON literal `null` for each offending element
    Null,
}

/// Configuration for JSON encoding
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    non_finite: NonFinitePolicy,
    pretty: bool,
}

impl JsonConfig {
    /// Compact output, rejecting non-finite values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for NaN and infinite values
    pub fn with_non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }

    /// Indent the output over multiple lines
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Get the non-finite value policy
    pub fn non_finite(&self) -> NonFinitePolicy {
        self.non_finite
    }

    /// Whether output is indented
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

/// Element types that can be written into a JSON array
pub trait JsonElement: Serialize {
    /// Whether the value has a JSON number or string representation
    fn is_json_representable(&self) -> bool {
        true
    }
}

impl JsonElement for f32 {
    fn is_json_representable(&self) -> bool {
        self.is_finite()
    }
}

impl JsonElement for f64 {
    fn is_json_representable(&self) -> bool {
        self.is_finite()
    }
}

macro_rules! impl_json_element {
    ($($ty:ty),* $(,)?) => {
        $(impl JsonElement for $ty {})*
    };
}

impl_json_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String);

impl JsonElement for &str {}

/// Encode `items` as a compact JSON array, rejecting non-finite values
pub fn to_json_string<T: JsonElement>(items: &[T]) -> Result<String> {
    to_json_string_with(items, &JsonConfig::default())
}

/// Encode `items` as a JSON array using `config`
pub fn to_json_string_with<T: JsonElement>(items: &[T], config: &JsonConfig) -> Result<String> {
    if items.is_empty() {
        return Ok(String::from("[]"));
    }

    if let Some(index) = items.iter().position(|item| !item.is_json_representable()) {
        match config.non_finite {
            NonFinitePolicy::Reject => {
                tracing::debug!(index, len = items.len(), "rejecting non-finite value");
                return Err(SeqError::NonFiniteValue { index }.into());
            }
            NonFinitePolicy::Null => {
                // serde_json writes non-finite floats as null
                tracing::debug!(first_index = index, "encoding non-finite values as null");
            }
        }
    }

    let text = if config.pretty {
        serde_json::to_string_pretty(items)?
    } else {
        serde_json::to_string(items)?
    };
    tracing::trace!(len = items.len(), bytes = text.len(), "encoded sequence");
    Ok(text)
}

/// Parse a JSON array into a sequence
///
/// `null` entries are rejected for numeric element types, so a document
/// written with [`NonFinitePolicy::Null`] does not read back.
pub fn from_json_str<T: DeserializeOwned>(text: &str) -> Result<Sequence<T>> {
    let seq: Sequence<T> = serde_json::from_str(text)?;
    tracing::trace!(len = seq.len(), "decoded sequence");
    Ok(seq)
}

/// JSON encoding as sequence methods
pub trait JsonSequence {
    /// Encode as a compact JSON array, rejecting non-finite values
    fn json_string(&self) -> Result<String>;

    /// Encode as a JSON array using `config`
    fn json_string_with(&self, config: &JsonConfig) -> Result<String>;
}

impl<T: JsonElement> JsonSequence for Sequence<T> {
    fn json_string(&self) -> Result<String> {
        to_json_string(self.as_slice())
    }

    fn json_string_with(&self, config: &JsonConfig) -> Result<String> {
        to_json_string_with(self.as_slice(), config)
    }
}
