//! Error types for numseq encoding and decoding

use numseq_core::SeqError;
use thiserror::Error;

/// Result type for numseq operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding or decoding sequences
#[derive(Debug, Error)]
pub enum Error {
    /// JSON serialization or parsing error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A value the encoder cannot represent, such as NaN in JSON
    #[error(transparent)]
    Sequence(#[from] SeqError),
}
