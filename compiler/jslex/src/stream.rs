//! Incremental lexer over [`std::io::Read`].
//!
//! The lexer keeps a window of the input in a [`SourceBuffer`] and scans it
//! with the same [`RawScanner`] as [`Lexer`](crate::Lexer). A token is only
//! returned once every byte its classification depended on has been read:
//! when the scanner's look-ahead ran into the end of the window before the
//! reader finished, the window is refilled and the token rescanned from its
//! start with the suspended [`ScanState`].
//!
//! Before each refill the bytes preceding the current token are dropped, so
//! the window holds the token being scanned plus what the refill read. A
//! refill reads at least as many bytes as the window already holds, so a
//! token that keeps growing (an unterminated template runs to the end of the
//! stream) doubles the window on every rescan and is rescanned only a
//! logarithmic number of times.

use std::io::{self, Read};

use jslex_core::{RawScanner, RawToken, ScanState, SourceBuffer};
use tracing::{debug, warn};

use crate::lex_error::{LexError, LexResult};
use crate::lexer::log_token;
use crate::token::Token;

/// Smallest number of bytes requested from the reader per refill.
const CHUNK_SIZE: usize = 8 * 1024;

/// Pull lexer reading its input incrementally.
///
/// Produces exactly the tokens [`Lexer`](crate::Lexer) produces for the same
/// bytes, with offsets relative to the start of the stream. Each token
/// borrows the lexer's window until the next call.
pub struct StreamLexer<R> {
    reader: R,
    buffer: SourceBuffer,
    state: ScanState,
    /// Stream offset of window byte 0.
    base: usize,
    reader_done: bool,
    /// Read target, reused across refills.
    scratch: Vec<u8>,
    /// First read failure, replayed on every later call.
    error: Option<LexError>,
}

impl<R: Read> StreamLexer<R> {
    /// Start lexing `reader` at stream offset 0; nothing is read yet.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: SourceBuffer::empty(),
            state: ScanState::default(),
            base: 0,
            reader_done: false,
            scratch: Vec::new(),
            error: None,
        }
    }

    /// Scan and return the next token.
    ///
    /// At the end of the stream returns an empty
    /// [`EndOfInput`](crate::TokenKind::EndOfInput) token, again on every
    /// further call. A read failure is returned instead of a token, now and
    /// on every further call.
    pub fn next_token(&mut self) -> LexResult<Token<'_>> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let raw = match self.scan() {
            Ok(raw) => raw,
            Err(err) => {
                self.error = Some(err.clone());
                return Err(err);
            }
        };
        let end = self.state.pos() as usize;
        let start = end - raw.len as usize;
        let token = Token::new(raw.tag, &self.buffer.as_bytes()[start..end], self.base + start);
        log_token(&token);
        Ok(token)
    }

    /// Stream offset of the next token.
    pub fn offset(&self) -> usize {
        self.base + self.state.pos() as usize
    }

    /// Scan one token, refilling the window until the decision is final.
    fn scan(&mut self) -> LexResult<RawToken> {
        loop {
            let mut scanner = RawScanner::resume(self.buffer.cursor(), self.state.clone());
            let raw = scanner.next_token();
            if self.reader_done || scanner.lookahead_end() <= self.buffer.len() {
                self.state = scanner.suspend();
                return Ok(raw);
            }
            self.compact();
            self.fill()?;
        }
    }

    /// Drop the window bytes before the current token.
    fn compact(&mut self) {
        let consumed = self.state.pos();
        if consumed == 0 {
            return;
        }
        self.buffer.discard_prefix(consumed);
        self.state.rebase(consumed);
        self.base += consumed as usize;
        debug!(
            consumed,
            base = self.base,
            nesting = self.state.template_nesting(),
            "compacted window"
        );
    }

    /// Read at least as many bytes as the window already holds (one read
    /// when it is empty), or mark the stream finished.
    ///
    /// Every rescan of a growing token thus sees a window at least twice as
    /// large as the last one, which keeps rescanning linear in its length
    /// even over a reader returning short reads.
    fn fill(&mut self) -> LexResult<()> {
        let held = self.buffer.len() as usize;
        self.scratch.resize(CHUNK_SIZE.max(held), 0);
        let mut appended = 0;
        loop {
            match self.reader.read(&mut self.scratch) {
                Ok(0) => {
                    self.reader_done = true;
                    debug!(len = self.base + self.buffer.len() as usize, "end of stream");
                    return Ok(());
                }
                Ok(n) => {
                    self.buffer.extend(&self.scratch[..n])?;
                    appended += n;
                    if appended >= held {
                        debug!(read = appended, window = self.buffer.len(), "refilled window");
                        return Ok(());
                    }
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    warn!(offset = self.offset(), error = %err, "source read failed");
                    return Err(err.into());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
