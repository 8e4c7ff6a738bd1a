use std::borrow::Cow;

use jslex_core::RawTag;
use pretty_assertions::assert_eq;

use super::*;

// === Kind mapping ===

#[test]
fn raw_tags_map_onto_kinds() {
    let cases = [
        (RawTag::Ident, TokenKind::Identifier),
        (RawTag::Decimal, TokenKind::Numeric),
        (RawTag::HexInt, TokenKind::Numeric),
        (RawTag::OctalInt, TokenKind::Numeric),
        (RawTag::BinInt, TokenKind::Numeric),
        (RawTag::String, TokenKind::String),
        (RawTag::TemplateHead, TokenKind::Template),
        (RawTag::UnterminatedTemplate, TokenKind::Template),
        (RawTag::QuestionDot, TokenKind::Punctuator),
        (RawTag::SlashEqual, TokenKind::Punctuator),
        (RawTag::Whitespace, TokenKind::Whitespace),
        (RawTag::LineTerminator, TokenKind::LineTerminator),
        (RawTag::LineComment, TokenKind::Comment(CommentKind::SingleLine)),
        (RawTag::BlockComment, TokenKind::Comment(CommentKind::SingleLine)),
        (RawTag::HtmlOpenComment, TokenKind::Comment(CommentKind::SingleLine)),
        (RawTag::HtmlCloseComment, TokenKind::Comment(CommentKind::SingleLine)),
        (RawTag::MultiLineComment, TokenKind::Comment(CommentKind::MultiLine)),
        (RawTag::InvalidByte, TokenKind::Unknown),
        (RawTag::UnterminatedString, TokenKind::Unknown),
        (RawTag::InteriorNull, TokenKind::Unknown),
        (RawTag::Eof, TokenKind::EndOfInput),
    ];
    for (tag, kind) in cases {
        assert_eq!(TokenKind::from(tag), kind, "{tag:?}");
    }
}

#[test]
fn trivia_kinds() {
    assert!(TokenKind::Whitespace.is_trivia());
    assert!(TokenKind::LineTerminator.is_trivia());
    assert!(TokenKind::Comment(CommentKind::MultiLine).is_trivia());
    assert!(!TokenKind::Identifier.is_trivia());
    assert!(!TokenKind::Unknown.is_trivia());
    assert!(!TokenKind::EndOfInput.is_trivia());
}

#[test]
fn kind_display() {
    assert_eq!(TokenKind::Numeric.to_string(), "numeric literal");
    assert_eq!(
        TokenKind::Comment(CommentKind::SingleLine).to_string(),
        "single-line comment"
    );
    assert_eq!(TokenKind::EndOfInput.to_string(), "end of input");
}

// === Token accessors ===

#[test]
fn span_accessors() {
    let token = Token::new(RawTag::Ident, b"abc", 4);
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.len(), 3);
    assert_eq!(token.end(), 7);
    assert!(!token.is_empty());
    assert!(!token.is_eof());
    assert_eq!(token.as_str(), Some("abc"));
    assert_eq!(token.raw_tag(), RawTag::Ident);
}

#[test]
fn end_of_input_token() {
    let token = Token::new(RawTag::Eof, b"", 9);
    assert!(token.is_eof());
    assert!(token.is_empty());
    assert_eq!(token.end(), 9);
}

#[test]
fn identifier_name_only_for_identifiers() {
    let plain = Token::new(RawTag::Ident, b"name", 0);
    assert_eq!(plain.identifier_name(), Some(Cow::Borrowed("name")));

    let escaped = Token::new(RawTag::Ident, b"\\u0061b", 0);
    assert_eq!(escaped.identifier_name().as_deref(), Some("ab"));

    let string = Token::new(RawTag::String, b"'name'", 0);
    assert_eq!(string.identifier_name(), None);
}

#[test]
fn punctuator_text() {
    assert_eq!(Token::new(RawTag::UShrEqual, b">>>=", 0).punctuator(), Some(">>>="));
    assert_eq!(Token::new(RawTag::Ident, b"x", 0).punctuator(), None);
}

#[test]
fn unknown_causes() {
    let cases = [
        (RawTag::InvalidByte, UnknownCause::DisallowedByte),
        (RawTag::InvalidChar, UnknownCause::DisallowedChar),
        (RawTag::InvalidUtf8, UnknownCause::InvalidUtf8),
        (RawTag::UnterminatedString, UnknownCause::UnterminatedString),
        (RawTag::InvalidEscape, UnknownCause::InvalidEscape),
        (RawTag::InteriorNull, UnknownCause::NullByte),
    ];
    for (tag, cause) in cases {
        let token = Token::new(tag, b"?", 0);
        assert_eq!(token.kind, TokenKind::Unknown);
        assert_eq!(token.unknown_cause(), Some(cause));
    }
    assert_eq!(Token::new(RawTag::Ident, b"x", 0).unknown_cause(), None);
}

#[test]
fn only_error_tags_have_a_cause() {
    for tag in [
        RawTag::Ident,
        RawTag::Decimal,
        RawTag::TemplateTail,
        RawTag::Comma,
        RawTag::MultiLineComment,
        RawTag::Eof,
    ] {
        assert!(!tag.is_error());
        assert_eq!(Token::new(tag, b"", 0).unknown_cause(), None, "{tag:?}");
    }
}

#[test]
fn invalid_utf8_text_has_no_str() {
    let token = Token::new(RawTag::InvalidUtf8, &[0xFF], 0);
    assert_eq!(token.as_str(), None);
}
