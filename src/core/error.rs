//! Core error type
//!
//! These are caller-contract violations. Well-formed callers never see them:
//! the driver only tokenizes at valid offsets and only looks up words taken
//! from the table's own key set.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Tokenizer was asked to start outside `[0, len)` or inside a char.
    #[error("invalid offset {position} for text of {len} bytes")]
    InvalidOffset { position: usize, len: usize },

    /// Frequency lookup for a word that was never recorded.
    #[error("word not found in frequency table: {word:?}")]
    KeyNotFound { word: String },
}
