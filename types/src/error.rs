//! Errors raised when constructing value types.

use thiserror::Error;

/// Validation failures for the seedkit value types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("unsupported entropy length: {0} bits (expected 128, 160, 192, 224 or 256)")]
    UnsupportedLength(u32),

    #[error("unsupported mnemonic length: {0} words (expected 12, 15, 18, 21 or 24)")]
    UnsupportedWordCount(usize),

    #[error("invalid entropy length: {0} bytes")]
    InvalidEntropyLength(usize),

    #[error("word index out of range: {0} (max 2047)")]
    WordIndexOutOfRange(u16),
}
