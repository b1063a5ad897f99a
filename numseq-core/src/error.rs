//! Error types for numseq operations

/// Errors that can occur during sequence operations
///
/// Queries and transforms never fail; the only fallible path is checking a
/// sequence before it is handed to an encoder that cannot represent every
/// value of the element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    /// A NaN or infinite value was found at the given position
    NonFiniteValue {
        /// Zero-based index of the first offending element
        index: usize,
    },
}

impl core::fmt::Display for SeqError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SeqError::NonFiniteValue { index } => {
                write!(f, "Non-finite value at index {index}")
            }
        }
    }
}

impl core::error::Error for SeqError {}

/// Result type for numseq operations
pub type Result<T> = core::result::Result<T, SeqError>;

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display() {
        let err = SeqError::NonFiniteValue { index: 3 };
        assert_eq!(err.to_string(), "Non-finite value at index 3");
    }
}
