//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation (the template nesting stack
//! stays inline for up to eight levels). It does not decode escapes or
//! numeric values; the `jslex` layer does that on demand.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The sentinel
//! byte (`0x00`) naturally dispatches to `null_or_eof()`.
//!
//! Speculative scans (strings, identifier escapes) that fail move the cursor
//! back through [`rewind`](RawScanner::rewind), which remembers the furthest
//! byte examined. Together with [`LOOKAHEAD`] this bounds every byte a token
//! decision depended on, so an incremental caller knows when a token scanned
//! at the edge of its buffer must be rescanned with more input.

use smallvec::SmallVec;

use crate::char_class::{
    is_ascii_ident_continue, is_ascii_whitespace_byte, is_id_continue, is_id_start,
    is_line_terminator, is_whitespace,
};
use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};
use crate::{SourceBuffer, SourceTooLarge};

/// Bytes past the furthest examined position that a token decision may
/// still depend on: `peek3()` and a 4-byte UTF-8 decode.
pub const LOOKAHEAD: u32 = 4;

/// Largest Unicode scalar value accepted in `\u{…}` escapes.
const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// One brace-depth counter per open template interpolation.
type DepthStack = SmallVec<[u32; 8]>;

/// Owned scanner state between two tokens.
///
/// Produced by [`RawScanner::suspend`] and consumed by
/// [`RawScanner::resume`], so a caller can rebuild the scanner over a buffer
/// that has grown or shed its consumed prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanState {
    pos: u32,
    template_depth: DepthStack,
    at_line_start: bool,
}

impl ScanState {
    /// Byte position of the next token.
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Number of template interpolations currently open.
    pub fn template_nesting(&self) -> usize {
        self.template_depth.len()
    }

    /// Shift the position after `consumed` bytes were dropped from the front
    /// of the buffer.
    pub fn rebase(&mut self, consumed: u32) {
        debug_assert!(consumed <= self.pos, "rebase past the scan position");
        self.pos = self.pos.saturating_sub(consumed);
    }
}

/// Pure, allocation-free scanner (except for deep template nesting).
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Malformed input is encoded as error-range `RawTag` variants, never as
/// `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    /// Brace depth inside each open template interpolation. A `}` seen while
    /// the top counter is 0 closes the interpolation.
    template_depth: DepthStack,
    /// `true` when only whitespace and single-line comments were produced
    /// since the last line break.
    at_line_start: bool,
    /// Furthest position the cursor reached before a rewind during the
    /// current token.
    furthest: u32,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self::resume(cursor, ScanState::default())
    }

    /// Rebuild a scanner from a suspended state.
    ///
    /// The cursor is moved to the state's position (clamped to the source).
    pub fn resume(mut cursor: Cursor<'a>, state: ScanState) -> Self {
        let pos = state.pos.min(cursor.source_len());
        cursor.seek(pos);
        Self {
            cursor,
            template_depth: state.template_depth,
            at_line_start: state.at_line_start,
            furthest: pos,
        }
    }

    /// Give up the borrow of the buffer, keeping the state between tokens.
    pub fn suspend(self) -> ScanState {
        ScanState {
            pos: self.cursor.pos(),
            template_depth: self.template_depth,
            at_line_start: self.at_line_start,
        }
    }

    /// Current byte position.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Exclusive bound on the bytes the last token decision examined.
    ///
    /// If this exceeds the buffered length while more input may still
    /// arrive, the token was decided on sentinel bytes and must be rescanned.
    pub fn lookahead_end(&self) -> u32 {
        self.furthest
            .max(self.cursor.pos())
            .saturating_add(LOOKAHEAD)
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        self.furthest = start;
        let token = self.dispatch(start);
        self.at_line_start = match token.tag {
            RawTag::LineTerminator | RawTag::MultiLineComment => true,
            tag => self.at_line_start && tag.keeps_line_start(),
        };
        token
    }

    #[inline]
    fn dispatch(&mut self, start: u32) -> RawToken {
        match self.cursor.current() {
            0 => self.null_or_eof(start),
            b'\t' | 0x0B | 0x0C | b' ' => self.whitespace(start),
            b'\n' | b'\r' => self.line_terminators(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'$' | b'_' => self.identifier(start),
            b'\\' => self.escaped_identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' | b'\'' => self.string(start),
            b'`' => self.template_literal(start),
            b'{' => self.left_brace(start),
            b'}' => self.right_brace(start),
            b'(' => self.punct(start, 1, RawTag::LeftParen),
            b')' => self.punct(start, 1, RawTag::RightParen),
            b'[' => self.punct(start, 1, RawTag::LeftBracket),
            b']' => self.punct(start, 1, RawTag::RightBracket),
            b';' => self.punct(start, 1, RawTag::Semicolon),
            b',' => self.punct(start, 1, RawTag::Comma),
            b':' => self.punct(start, 1, RawTag::Colon),
            b'~' => self.punct(start, 1, RawTag::Tilde),
            b'.' => self.dot(start),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'=' => self.equal(start),
            b'!' => self.bang(start),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'*' => self.star(start),
            b'%' => self.op_or_assign(start, RawTag::Percent, RawTag::PercentEqual),
            b'^' => self.op_or_assign(start, RawTag::Caret, RawTag::CaretEqual),
            b'&' => self.ampersand(start),
            b'|' => self.pipe(start),
            b'?' => self.question(start),
            b'/' => self.slash(start),
            // `#`, `@`, control characters (excluding whitespace and line
            // feeds) and DEL.
            b'#' | b'@' | 1..=8 | 14..=31 | 127 => self.invalid_byte(start),
            0x80..=0xFF => self.non_ascii(start),
        }
    }

    #[inline]
    fn emit(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// Move back to `pos`, remembering how far the cursor got.
    fn rewind(&mut self, pos: u32) {
        self.furthest = self.furthest.max(self.cursor.pos());
        self.cursor.seek(pos);
    }

    // ─── EOF & Malformed Input ─────────────────────────────────────

    fn null_or_eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            self.cursor.advance();
            self.emit(start, RawTag::InteriorNull)
        }
    }

    fn invalid_byte(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.emit(start, RawTag::InvalidByte)
    }

    fn non_ascii(&mut self, start: u32) -> RawToken {
        let Some((c, width)) = self.cursor.current_char() else {
            self.cursor.advance();
            return self.emit(start, RawTag::InvalidUtf8);
        };
        if is_line_terminator(c) {
            return self.line_terminators(start);
        }
        if is_whitespace(c) {
            return self.whitespace(start);
        }
        self.cursor.advance_n(width);
        if is_id_start(c) {
            self.eat_ident_continue();
            return self.emit(start, RawTag::Ident);
        }
        self.emit(start, RawTag::InvalidChar)
    }

    // ─── Whitespace & Line Terminators ─────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        loop {
            self.cursor.eat_while(is_ascii_whitespace_byte);
            match self.cursor.current_char() {
                Some((c, width)) if is_whitespace(c) => self.cursor.advance_n(width),
                _ => break,
            }
        }
        self.emit(start, RawTag::Whitespace)
    }

    /// A run of LF, CR, LS and PS is a single token (CRLF included).
    fn line_terminators(&mut self, start: u32) -> RawToken {
        loop {
            match self.cursor.current() {
                b'\n' | b'\r' => self.cursor.advance(),
                _ if self.cursor.at_separator() => self.cursor.advance_n(3),
                _ => break,
            }
        }
        self.emit(start, RawTag::LineTerminator)
    }

    // ─── Comments ──────────────────────────────────────────────────

    /// Consume `prefix_len` bytes, then everything up to the next line
    /// terminator.
    fn line_comment(&mut self, start: u32, prefix_len: u32, tag: RawTag) -> RawToken {
        self.cursor.advance_n(prefix_len);
        self.cursor.eat_until_line_terminator_or_eof();
        self.emit(start, tag)
    }

    fn block_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance_n(2); // consume '/*'
        let mut multiline = false;
        loop {
            match self.cursor.skip_to_block_comment_delim() {
                b'*' if self.cursor.peek() == b'/' => {
                    self.cursor.advance_n(2);
                    break;
                }
                // Unterminated: the comment runs to the end of input.
                0 => break,
                b'\n' | b'\r' => {
                    multiline = true;
                    self.cursor.advance();
                }
                _ if self.cursor.at_separator() => {
                    multiline = true;
                    self.cursor.advance_n(3);
                }
                _ => self.cursor.advance(),
            }
        }
        let tag = if multiline {
            RawTag::MultiLineComment
        } else {
            RawTag::BlockComment
        };
        self.emit(start, tag)
    }

    // ─── Identifiers ───────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first char (already validated)
        self.eat_ident_continue();
        self.emit(start, RawTag::Ident)
    }

    /// Identifier starting with `\u` escape, or a stray backslash.
    fn escaped_identifier(&mut self, start: u32) -> RawToken {
        if !self.eat_ident_escape() {
            self.rewind(start + 1);
            return self.emit(start, RawTag::InvalidEscape);
        }
        self.eat_ident_continue();
        self.emit(start, RawTag::Ident)
    }

    fn eat_ident_continue(&mut self) {
        loop {
            self.cursor.eat_while(is_ascii_ident_continue);
            match self.cursor.current() {
                b'\\' => {
                    let escape_start = self.cursor.pos();
                    if !self.eat_ident_escape() {
                        self.rewind(escape_start);
                        return;
                    }
                }
                0x80..=0xFF => match self.cursor.current_char() {
                    Some((c, width)) if is_id_continue(c) => self.cursor.advance_n(width),
                    _ => return,
                },
                _ => return,
            }
        }
    }

    /// `\uHHHH` or `\u{H…}` at the cursor. The decoded code point is not
    /// checked against the identifier classes.
    ///
    /// On failure the cursor is left somewhere inside the escape; callers
    /// rewind.
    fn eat_ident_escape(&mut self) -> bool {
        if self.cursor.peek() != b'u' {
            return false;
        }
        self.cursor.advance_n(2); // consume '\u'
        self.eat_unicode_escape_body()
    }

    // ─── Escapes ───────────────────────────────────────────────────

    /// The part of a Unicode escape after `\u`.
    fn eat_unicode_escape_body(&mut self) -> bool {
        if self.cursor.current() != b'{' {
            return self.eat_hex_digits(4);
        }
        self.cursor.advance(); // consume '{'
        let mut value: u32 = 0;
        let mut digits = 0u32;
        while let Some(digit) = char::from(self.cursor.current()).to_digit(16) {
            value = value.saturating_mul(16).saturating_add(digit);
            digits += 1;
            self.cursor.advance();
        }
        if digits == 0 || value > MAX_CODE_POINT || self.cursor.current() != b'}' {
            return false;
        }
        self.cursor.advance(); // consume '}'
        true
    }

    fn eat_hex_digits(&mut self, count: u32) -> bool {
        for _ in 0..count {
            if !self.cursor.current().is_ascii_hexdigit() {
                return false;
            }
            self.cursor.advance();
        }
        true
    }

    // ─── Numeric Literals ──────────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        if self.cursor.current() == b'0' {
            return self.zero_prefixed(start);
        }
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.eat_fraction_and_exponent();
        self.emit(start, RawTag::Decimal)
    }

    /// `0x…`, `0o…`, `0b…`, or a decimal numeral starting with `0`.
    ///
    /// A radix prefix without a digit after it leaves the prefix letter to
    /// the next token, and so do decimal digits directly after the `0`.
    fn zero_prefixed(&mut self, start: u32) -> RawToken {
        let radix: Option<(RawTag, fn(u8) -> bool)> = match self.cursor.peek() {
            b'x' | b'X' => Some((RawTag::HexInt, is_hex_digit)),
            b'o' | b'O' => Some((RawTag::OctalInt, is_octal_digit)),
            b'b' | b'B' => Some((RawTag::BinInt, is_binary_digit)),
            _ => None,
        };
        if let Some((tag, is_digit)) = radix {
            if is_digit(self.cursor.peek2()) {
                self.cursor.advance_n(2);
                self.cursor.eat_while(is_digit);
                return self.emit(start, tag);
            }
        }
        self.cursor.advance(); // consume '0'
        if !self.cursor.current().is_ascii_digit() {
            self.eat_fraction_and_exponent();
        }
        self.emit(start, RawTag::Decimal)
    }

    /// Numeral starting with `.` (the caller saw a digit after it).
    fn leading_dot_number(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '.'
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.eat_exponent();
        self.emit(start, RawTag::Decimal)
    }

    fn eat_fraction_and_exponent(&mut self) {
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        self.eat_exponent();
    }

    /// `e`/`E`, optional sign, at least one digit. Anything shorter is left
    /// for the following tokens.
    fn eat_exponent(&mut self) {
        if !matches!(self.cursor.current(), b'e' | b'E') {
            return;
        }
        let signed = matches!(self.cursor.peek(), b'+' | b'-');
        let first_digit = if signed {
            self.cursor.peek2()
        } else {
            self.cursor.peek()
        };
        if first_digit.is_ascii_digit() {
            self.cursor.advance_n(1 + u32::from(signed));
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
    }

    // ─── String Literals ───────────────────────────────────────────

    fn string(&mut self, start: u32) -> RawToken {
        let quote = self.cursor.current();
        self.cursor.advance(); // consume opening quote
        loop {
            match self.cursor.skip_to_string_delim(quote) {
                b if b == quote => {
                    self.cursor.advance();
                    return self.emit(start, RawTag::String);
                }
                b'\\' => {
                    if !self.eat_string_escape() {
                        return self.failed_string(start);
                    }
                }
                // End of input.
                0 => return self.failed_string(start),
                _ if self.cursor.at_line_terminator() => return self.failed_string(start),
                // Lead byte of some other three-byte character.
                _ => self.cursor.advance(),
            }
        }
    }

    /// Only the opening quote is reported; scanning resumes right after it.
    fn failed_string(&mut self, start: u32) -> RawToken {
        self.rewind(start + 1);
        self.emit(start, RawTag::UnterminatedString)
    }

    /// Escape sequence at the cursor (on `\`) inside a string literal.
    fn eat_string_escape(&mut self) -> bool {
        self.cursor.advance(); // consume '\'
        match self.cursor.current() {
            b'x' => {
                self.cursor.advance();
                self.eat_hex_digits(2)
            }
            b'u' => {
                self.cursor.advance();
                self.eat_unicode_escape_body()
            }
            b'\r' => {
                self.cursor.advance();
                if self.cursor.current() == b'\n' {
                    self.cursor.advance();
                }
                true
            }
            _ if self.cursor.is_eof() => false,
            // Line continuations, legacy octal, single-character escapes and
            // escaped non-ASCII characters.
            _ => {
                self.cursor.advance_char();
                true
            }
        }
    }

    // ─── Template Literals ─────────────────────────────────────────

    fn template_literal(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '`'
        self.template_text(start, RawTag::TemplateComplete, RawTag::TemplateHead)
    }

    /// Template characters up to the closing backtick (`closed`) or the next
    /// `${` (`opened`, pushes a depth counter).
    fn template_text(&mut self, start: u32, closed: RawTag, opened: RawTag) -> RawToken {
        loop {
            match self.cursor.skip_to_template_delim() {
                b'`' => {
                    self.cursor.advance();
                    return self.emit(start, closed);
                }
                b'$' if self.cursor.peek() == b'{' => {
                    self.cursor.advance_n(2);
                    self.template_depth.push(0);
                    return self.emit(start, opened);
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    self.cursor.advance_char(); // no-op at end of input
                }
                0 => return self.emit(start, RawTag::UnterminatedTemplate),
                // Lone '$'.
                _ => self.cursor.advance(),
            }
        }
    }

    fn left_brace(&mut self, start: u32) -> RawToken {
        if let Some(depth) = self.template_depth.last_mut() {
            *depth += 1;
        }
        self.punct(start, 1, RawTag::LeftBrace)
    }

    fn right_brace(&mut self, start: u32) -> RawToken {
        if let Some(depth) = self.template_depth.last_mut() {
            if *depth > 0 {
                *depth -= 1;
            } else {
                // This `}` closes the interpolation.
                self.template_depth.pop();
                self.cursor.advance();
                return self.template_text(start, RawTag::TemplateTail, RawTag::TemplateMiddle);
            }
        }
        self.punct(start, 1, RawTag::RightBrace)
    }

    // ─── Punctuators ───────────────────────────────────────────────

    /// Fixed-width token: advance `len` bytes and emit the given tag.
    #[inline]
    fn punct(&mut self, start: u32, len: u32, tag: RawTag) -> RawToken {
        self.cursor.advance_n(len);
        self.emit(start, tag)
    }

    fn op_or_assign(&mut self, start: u32, op: RawTag, assign: RawTag) -> RawToken {
        if self.cursor.peek() == b'=' {
            self.punct(start, 2, assign)
        } else {
            self.punct(start, 1, op)
        }
    }

    fn dot(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'0'..=b'9', _) => self.leading_dot_number(start),
            (b'.', b'.') => self.punct(start, 3, RawTag::DotDotDot),
            _ => self.punct(start, 1, RawTag::Dot),
        }
    }

    fn less(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2(), self.cursor.peek3()) {
            (b'!', b'-', b'-') => self.line_comment(start, 4, RawTag::HtmlOpenComment),
            (b'<', b'=', _) => self.punct(start, 3, RawTag::ShlEqual),
            (b'<', _, _) => self.punct(start, 2, RawTag::Shl),
            (b'=', _, _) => self.punct(start, 2, RawTag::LessEqual),
            _ => self.punct(start, 1, RawTag::Less),
        }
    }

    fn greater(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2(), self.cursor.peek3()) {
            (b'>', b'>', b'=') => self.punct(start, 4, RawTag::UShrEqual),
            (b'>', b'>', _) => self.punct(start, 3, RawTag::UShr),
            (b'>', b'=', _) => self.punct(start, 3, RawTag::ShrEqual),
            (b'>', _, _) => self.punct(start, 2, RawTag::Shr),
            (b'=', _, _) => self.punct(start, 2, RawTag::GreaterEqual),
            _ => self.punct(start, 1, RawTag::Greater),
        }
    }

    fn equal(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'=', b'=') => self.punct(start, 3, RawTag::EqualEqualEqual),
            (b'=', _) => self.punct(start, 2, RawTag::EqualEqual),
            (b'>', _) => self.punct(start, 2, RawTag::FatArrow),
            _ => self.punct(start, 1, RawTag::Equal),
        }
    }

    fn bang(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'=', b'=') => self.punct(start, 3, RawTag::BangEqualEqual),
            (b'=', _) => self.punct(start, 2, RawTag::BangEqual),
            _ => self.punct(start, 1, RawTag::Bang),
        }
    }

    fn plus(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'+' => self.punct(start, 2, RawTag::PlusPlus),
            b'=' => self.punct(start, 2, RawTag::PlusEqual),
            _ => self.punct(start, 1, RawTag::Plus),
        }
    }

    /// `-->` opens a comment only at the start of a line.
    fn minus(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'-', b'>') if self.at_line_start => {
                self.line_comment(start, 3, RawTag::HtmlCloseComment)
            }
            (b'-', _) => self.punct(start, 2, RawTag::MinusMinus),
            (b'=', _) => self.punct(start, 2, RawTag::MinusEqual),
            _ => self.punct(start, 1, RawTag::Minus),
        }
    }

    fn star(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'*', b'=') => self.punct(start, 3, RawTag::StarStarEqual),
            (b'*', _) => self.punct(start, 2, RawTag::StarStar),
            (b'=', _) => self.punct(start, 2, RawTag::StarEqual),
            _ => self.punct(start, 1, RawTag::Star),
        }
    }

    fn ampersand(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'&', b'=') => self.punct(start, 3, RawTag::AmpersandAmpersandEqual),
            (b'&', _) => self.punct(start, 2, RawTag::AmpersandAmpersand),
            (b'=', _) => self.punct(start, 2, RawTag::AmpersandEqual),
            _ => self.punct(start, 1, RawTag::Ampersand),
        }
    }

    fn pipe(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'|', b'=') => self.punct(start, 3, RawTag::PipePipeEqual),
            (b'|', _) => self.punct(start, 2, RawTag::PipePipe),
            (b'=', _) => self.punct(start, 2, RawTag::PipeEqual),
            _ => self.punct(start, 1, RawTag::Pipe),
        }
    }

    /// `?.` followed by a digit is a conditional and a numeral (`a?.5:b`).
    fn question(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'?', b'=') => self.punct(start, 3, RawTag::QuestionQuestionEqual),
            (b'?', _) => self.punct(start, 2, RawTag::QuestionQuestion),
            (b'.', next) if !next.is_ascii_digit() => {
                self.punct(start, 2, RawTag::QuestionDot)
            }
            _ => self.punct(start, 1, RawTag::Question),
        }
    }

    /// `/` is always division here; regular expression literals are left to
    /// a parser that knows the syntactic context.
    fn slash(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'/' => self.line_comment(start, 2, RawTag::LineComment),
            b'*' => self.block_comment(start),
            b'=' => self.punct(start, 2, RawTag::SlashEqual),
            _ => self.punct(start, 1, RawTag::Slash),
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

fn is_binary_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

/// Convenience function: tokenize a byte slice and collect all raw tokens.
///
/// Returns every token except the final `Eof`. For streaming or iterator
/// access, construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &[u8]) -> Result<Vec<RawToken>, SourceTooLarge> {
    let buf = SourceBuffer::new(source)?;
    Ok(RawScanner::new(buf.cursor()).collect())
}
