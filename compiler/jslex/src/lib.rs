//! Tokenizer for ECMAScript-style source text.
//!
//! Splits bytes into a lossless sequence of [`Token`]s: every byte of the
//! input belongs to exactly one token, including whitespace, comments and
//! malformed input, so concatenating the token texts reproduces the source.
//! Regular expression literals and reserved words are left to the parser.
//!
//! Two front ends share one scanner (`jslex_core::RawScanner`):
//!
//! - [`Lexer`] runs over a complete in-memory [`SourceBuffer`] and never
//!   fails.
//! - [`StreamLexer`] pulls input from any [`std::io::Read`] and produces the
//!   same tokens, surfacing read failures as [`LexError`].
//!
//! ```
//! use jslex::{Lexer, SourceBuffer, TokenKind};
//!
//! # fn main() -> Result<(), jslex::LexError> {
//! let buffer = SourceBuffer::new(b"var i = `n=${i}`;")?;
//! let kinds: Vec<TokenKind> = Lexer::new(&buffer)
//!     .filter(|token| !token.kind.is_trivia())
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds[0], TokenKind::Identifier);
//! assert_eq!(kinds[3], TokenKind::Template);
//! # Ok(())
//! # }
//! ```

mod ident;
mod lex_error;
mod lexer;
mod stream;
mod token;

pub use ident::decode_identifier;
pub use jslex_core::{RawTag, SourceBuffer, SourceTooLarge};
pub use lex_error::{LexError, LexResult};
pub use lexer::Lexer;
pub use stream::StreamLexer;
pub use token::{CommentKind, Token, TokenKind, UnknownCause};
