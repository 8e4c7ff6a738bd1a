//! Public token vocabulary.
//!
//! [`TokenKind`] is the closed classification a parser consumes. Each
//! [`Token`] also keeps the fine-grained [`RawTag`] it was scanned as, so
//! callers that need the exact punctuator, numeric radix, template piece or
//! cause of an `Unknown` token can get it without rescanning.

use std::borrow::Cow;
use std::fmt;

use jslex_core::RawTag;

use crate::ident::decode_identifier;

/// Whether a comment spans a line break.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// `// …`, `<!-- …`, `--> …`, or a `/* … */` on one line.
    SingleLine,
    /// A `/* … */` containing at least one line terminator.
    MultiLine,
}

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    LineTerminator,
    Comment(CommentKind),
    Identifier,
    Numeric,
    String,
    /// A complete template or one piece of an interpolated template.
    Template,
    Punctuator,
    /// Malformed input; see [`Token::unknown_cause`].
    Unknown,
    EndOfInput,
}

impl TokenKind {
    /// Whitespace, line terminators and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineTerminator | TokenKind::Comment(_)
        )
    }

    /// Human-readable name for diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineTerminator => "line terminator",
            TokenKind::Comment(CommentKind::SingleLine) => "single-line comment",
            TokenKind::Comment(CommentKind::MultiLine) => "multi-line comment",
            TokenKind::Identifier => "identifier",
            TokenKind::Numeric => "numeric literal",
            TokenKind::String => "string literal",
            TokenKind::Template => "template literal",
            TokenKind::Punctuator => "punctuator",
            TokenKind::Unknown => "unknown",
            TokenKind::EndOfInput => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<RawTag> for TokenKind {
    fn from(tag: RawTag) -> Self {
        match tag {
            RawTag::Ident => TokenKind::Identifier,
            RawTag::String => TokenKind::String,
            RawTag::Whitespace => TokenKind::Whitespace,
            RawTag::LineTerminator => TokenKind::LineTerminator,
            RawTag::MultiLineComment => TokenKind::Comment(CommentKind::MultiLine),
            RawTag::Eof => TokenKind::EndOfInput,
            tag if tag.is_numeric() => TokenKind::Numeric,
            tag if tag.is_comment() => TokenKind::Comment(CommentKind::SingleLine),
            tag if tag.is_template() => TokenKind::Template,
            tag if tag.is_punctuator() => TokenKind::Punctuator,
            _ => TokenKind::Unknown,
        }
    }
}

/// Why a token was classified [`TokenKind::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnknownCause {
    /// ASCII byte with no place in the grammar (`#`, `@`, control bytes).
    DisallowedByte,
    /// Well-formed code point that cannot start any token.
    DisallowedChar,
    /// Byte that does not start a well-formed UTF-8 sequence.
    InvalidUtf8,
    /// Opening quote of a string that hit a line terminator, the end of
    /// input, or a malformed `\x`/`\u` escape.
    UnterminatedString,
    /// Backslash that does not begin a valid `\u` escape.
    InvalidEscape,
    /// NUL byte outside literals and comments.
    NullByte,
}

impl UnknownCause {
    fn from_tag(tag: RawTag) -> Option<Self> {
        let cause = match tag {
            RawTag::InvalidByte => UnknownCause::DisallowedByte,
            RawTag::InvalidChar => UnknownCause::DisallowedChar,
            RawTag::InvalidUtf8 => UnknownCause::InvalidUtf8,
            RawTag::UnterminatedString => UnknownCause::UnterminatedString,
            RawTag::InvalidEscape => UnknownCause::InvalidEscape,
            RawTag::InteriorNull => UnknownCause::NullByte,
            _ => return None,
        };
        Some(cause)
    }
}

/// One lexical unit.
///
/// `text` borrows the lexer's buffer; concatenating the text of every token
/// up to [`TokenKind::EndOfInput`] reproduces the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Exact source bytes of the token. Empty only at end of input.
    pub text: &'a [u8],
    /// Byte offset of the first byte of the token.
    pub offset: usize,
    raw: RawTag,
}

impl<'a> Token<'a> {
    pub(crate) fn new(raw: RawTag, text: &'a [u8], offset: usize) -> Self {
        Self {
            kind: TokenKind::from(raw),
            text,
            offset,
            raw,
        }
    }

    /// Fine-grained tag the scanner produced.
    pub fn raw_tag(&self) -> RawTag {
        self.raw
    }

    /// Length of the token in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// `true` only for the end-of-input token.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Offset one past the last byte of the token.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// The token text, if it is valid UTF-8.
    ///
    /// Only `Unknown` tokens for malformed UTF-8 (and string, template or
    /// comment bodies that contain it) fail.
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.text).ok()
    }

    /// Logical name of an identifier, with `\u` escapes decoded.
    ///
    /// Borrows the source when the identifier has no escapes.
    pub fn identifier_name(&self) -> Option<Cow<'a, str>> {
        if self.kind == TokenKind::Identifier {
            decode_identifier(self.text)
        } else {
            None
        }
    }

    /// Source text of a punctuator.
    pub fn punctuator(&self) -> Option<&'static str> {
        self.raw.lexeme()
    }

    /// Cause of an `Unknown` token.
    pub fn unknown_cause(&self) -> Option<UnknownCause> {
        if !self.raw.is_error() {
            return None;
        }
        UnknownCause::from_tag(self.raw)
    }
}

#[cfg(test)]
mod tests;
