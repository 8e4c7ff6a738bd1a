//! Zero-cost cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. The end of input is
//! detected when the current byte equals the sentinel (`0x00`) and the
//! position has reached the source length. No explicit bounds checking is
//! performed in the common case: the sentinel and padding guarantee safe
//! termination.
//!
//! # Interior Null Bytes
//!
//! NUL is legal content inside strings, templates and comments. The cursor
//! distinguishes it from the end of input by comparing `pos` against
//! `source_len`: a null at `pos < source_len` is content, a null at
//! `pos >= source_len` is the sentinel.

use crate::char_class::decode_utf8;

/// Leading byte of the UTF-8 encodings of U+2028 and U+2029.
const SEPARATOR_LEAD: u8 = 0xE2;

/// Nearer of two memchr hits. `memchr3` takes at most three needles, so
/// scans for more bytes run two searches and merge them here.
fn nearest(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (hit, None) | (None, hit) => hit,
    }
}

/// Byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// `Copy`, so a scan can snapshot it and back out.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and at least [`LOOKAHEAD`](crate::LOOKAHEAD)
/// zero bytes follow the content, so `peek3()` never indexes out of bounds.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Content, sentinel and padding.
    buf: &'a [u8],
    pos: u32,
    /// Content length; `buf[source_len]` is the sentinel.
    source_len: u32,
}

// Slice plus two offsets.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            buf.get(source_len as usize) == Some(&0),
            "buffer lacks a sentinel at {source_len}"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte under the cursor; `0x00` both at the end and on a NUL in the
    /// content. [`is_eof()`](Self::is_eof) tells them apart.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// The widest punctuator (`>>>=`) needs four bytes of context.
    #[inline]
    pub fn peek3(&self) -> u8 {
        self.buf[self.pos as usize + 3]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Move the cursor back (or forward) to an absolute position.
    #[inline]
    pub(crate) fn seek(&mut self, pos: u32) {
        debug_assert!(pos <= self.source_len, "seek past end of source");
        self.pos = pos;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Skip bytes matching `pred`, which must reject `0x00`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.advance();
        }
    }

    /// Decode the UTF-8 character at the current position.
    ///
    /// Returns `None` for malformed or truncated sequences, including a
    /// sequence cut short by the end of input.
    #[inline]
    pub fn current_char(&self) -> Option<(char, u32)> {
        if self.is_eof() {
            return None;
        }
        let start = self.pos as usize;
        let end = (start + 4).min(self.source_len as usize);
        decode_utf8(&self.buf[start..end])
    }

    /// Advance past one character.
    ///
    /// A malformed UTF-8 sequence advances by a single byte so the cursor
    /// never skips past the end of the content. No-op at the end of input.
    #[inline]
    pub fn advance_char(&mut self) {
        match self.current_char() {
            Some((_, width)) => self.advance_n(width),
            None if !self.is_eof() => self.advance(),
            None => {}
        }
    }

    /// Returns `true` if the cursor sits on U+2028 or U+2029.
    #[inline]
    pub fn at_separator(&self) -> bool {
        self.current() == SEPARATOR_LEAD
            && self.peek() == 0x80
            && matches!(self.peek2(), 0xA8 | 0xA9)
    }

    /// Returns `true` if the cursor sits on any line terminator.
    #[inline]
    pub fn at_line_terminator(&self) -> bool {
        matches!(self.current(), b'\n' | b'\r') || self.at_separator()
    }

    /// Content after the cursor.
    fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Move `hit` bytes ahead and return the byte there, or move to the end
    /// and return `0`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "hits lie inside the content, whose length fits in u32"
    )]
    fn jump(&mut self, hit: Option<usize>) -> u8 {
        match hit {
            Some(off) => {
                self.pos += off as u32;
                self.current()
            }
            None => {
                self.pos = self.source_len;
                0
            }
        }
    }

    /// Advance to the next line terminator or the end of input.
    ///
    /// LF and CR are found with memchr. U+2028/U+2029 are found through
    /// their lead byte, which other characters share.
    pub fn eat_until_line_terminator_or_eof(&mut self) {
        loop {
            let rest = self.rest();
            let hit = nearest(
                memchr::memchr2(b'\n', b'\r', rest),
                memchr::memchr(SEPARATOR_LEAD, rest),
            );
            if self.jump(hit) != SEPARATOR_LEAD || self.at_separator() {
                return;
            }
            self.advance();
        }
    }

    /// Skip string content up to the closing `quote`, a backslash, or a
    /// line terminator (U+2028/U+2029 by lead byte only). Returns the byte
    /// stopped on, `0` at the end of input.
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        let rest = self.rest();
        let hit = nearest(
            memchr::memchr3(quote, b'\\', b'\n', rest),
            memchr::memchr2(b'\r', SEPARATOR_LEAD, rest),
        );
        self.jump(hit)
    }

    /// Skip template content up to `` ` ``, `$` or a backslash. Line
    /// terminators are content. Returns the byte stopped on, `0` at the end
    /// of input.
    pub fn skip_to_template_delim(&mut self) -> u8 {
        let hit = memchr::memchr3(b'`', b'$', b'\\', self.rest());
        self.jump(hit)
    }

    /// Skip block comment content up to `*` or a line terminator (by lead
    /// byte). Returns the byte stopped on, `0` at the end of input.
    pub fn skip_to_block_comment_delim(&mut self) -> u8 {
        let rest = self.rest();
        let hit = nearest(
            memchr::memchr3(b'*', b'\n', b'\r', rest),
            memchr::memchr(SEPARATOR_LEAD, rest),
        );
        self.jump(hit)
    }
}
