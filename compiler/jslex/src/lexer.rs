//! In-memory pull lexer.

use jslex_core::{RawScanner, SourceBuffer};
use tracing::{debug, trace};

use crate::token::Token;

/// Pull lexer over a complete [`SourceBuffer`].
///
/// Tokens borrow the buffer. After the last token,
/// [`next_token`](Self::next_token) keeps returning an empty
/// [`EndOfInput`](crate::TokenKind::EndOfInput) token; the [`Iterator`] impl
/// stops there instead.
pub struct Lexer<'a> {
    source: &'a [u8],
    scanner: RawScanner<'a>,
}

impl<'a> Lexer<'a> {
    /// Start lexing `buffer` at offset 0.
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Self {
            source: buffer.as_bytes(),
            scanner: RawScanner::new(buffer.cursor()),
        }
    }

    /// Scan and return the next token.
    pub fn next_token(&mut self) -> Token<'a> {
        let start = self.scanner.pos() as usize;
        let raw = self.scanner.next_token();
        let end = start + raw.len as usize;
        let token = Token::new(raw.tag, &self.source[start..end], start);
        log_token(&token);
        token
    }

    /// Byte offset of the next token.
    pub fn offset(&self) -> usize {
        self.scanner.pos() as usize
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

pub(crate) fn log_token(token: &Token<'_>) {
    trace!(offset = token.offset, kind = %token.kind, len = token.len(), "token");
    if let Some(cause) = token.unknown_cause() {
        debug!(offset = token.offset, ?cause, "unrecognized input");
    }
}
