//! Errors surfaced by the tokenizer.
//!
//! Malformed source text is never an error: it comes back as
//! [`TokenKind::Unknown`](crate::TokenKind::Unknown) tokens. Only failures of
//! the input itself end a token stream.

use std::io;

use jslex_core::SourceTooLarge;
use thiserror::Error;

/// Failure to obtain or hold the source bytes.
///
/// `Clone` and `Eq` so a [`StreamLexer`](crate::StreamLexer) can hand the
/// same failure back on every later call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// The reader returned an error.
    #[error("failed to read source: {message}")]
    Io {
        /// Kind of the underlying I/O error.
        kind: io::ErrorKind,
        /// Rendered message of the underlying I/O error.
        message: String,
    },

    /// The source (or the buffered window of a stream) outgrew the 32-bit
    /// offset space of the scanner.
    #[error(transparent)]
    SourceTooLarge(#[from] SourceTooLarge),
}

impl From<io::Error> for LexError {
    fn from(err: io::Error) -> Self {
        LexError::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Convenient `Result` alias for fallible tokenizer operations.
pub type LexResult<T> = Result<T, LexError>;
