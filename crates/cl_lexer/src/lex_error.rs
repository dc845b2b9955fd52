//! Tokenizer errors.

use thiserror::Error;

/// Why a file could not be tokenized.
///
/// Unrecognised characters are not errors: they are emitted as
/// `TokenKind::Error` tokens so the rest of the file still lexes.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexError {
    /// The input contains a NUL byte, which no supported language allows.
    #[error("binary content (NUL byte at offset {offset})")]
    BinaryContent { offset: usize },
}
