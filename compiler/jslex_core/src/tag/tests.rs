use super::*;

// === RawTag discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    // Identifiers & Literals: 0-15
    assert_eq!(RawTag::Ident as u8, 0);
    assert_eq!(RawTag::Decimal as u8, 1);
    assert_eq!(RawTag::String as u8, 5);

    // Template Literals: 16-31
    assert_eq!(RawTag::TemplateComplete as u8, 16);
    assert_eq!(RawTag::UnterminatedTemplate as u8, 20);

    // Punctuators: 32-111
    assert_eq!(RawTag::LeftBrace as u8, 32);
    assert_eq!(RawTag::SlashEqual as u8, 88);

    // Trivia: 112-127
    assert_eq!(RawTag::Whitespace as u8, 112);
    assert_eq!(RawTag::HtmlCloseComment as u8, 118);

    // Errors: 240-254
    assert_eq!(RawTag::InvalidByte as u8, 240);
    assert_eq!(RawTag::InteriorNull as u8, 245);

    // Control: 255
    assert_eq!(RawTag::Eof as u8, 255);
}

#[test]
fn token_is_compact() {
    assert_eq!(std::mem::size_of::<RawTag>(), 1);
    assert!(std::mem::size_of::<RawToken>() <= 8);
}

// === Lexeme ===

#[test]
fn lexeme_of_punctuators() {
    assert_eq!(RawTag::LeftBrace.lexeme(), Some("{"));
    assert_eq!(RawTag::DotDotDot.lexeme(), Some("..."));
    assert_eq!(RawTag::UShrEqual.lexeme(), Some(">>>="));
    assert_eq!(RawTag::QuestionDot.lexeme(), Some("?."));
    assert_eq!(RawTag::QuestionQuestionEqual.lexeme(), Some("??="));
    assert_eq!(RawTag::FatArrow.lexeme(), Some("=>"));
    assert_eq!(RawTag::SlashEqual.lexeme(), Some("/="));
}

#[test]
fn variable_length_tags_have_no_lexeme() {
    for tag in [
        RawTag::Ident,
        RawTag::Decimal,
        RawTag::String,
        RawTag::TemplateHead,
        RawTag::Whitespace,
        RawTag::LineComment,
        RawTag::InvalidByte,
        RawTag::Eof,
    ] {
        assert_eq!(tag.lexeme(), None, "{tag:?}");
    }
}

#[test]
fn punctuator_lexemes_match_category() {
    // Every discriminant in the punctuator range that exists has a lexeme.
    let samples = [
        RawTag::LeftParen,
        RawTag::Comma,
        RawTag::BangEqualEqual,
        RawTag::StarStarEqual,
        RawTag::Tilde,
        RawTag::Slash,
    ];
    for tag in samples {
        assert!(tag.is_punctuator());
        assert!(tag.lexeme().is_some());
    }
}

// === Names ===

#[test]
fn names() {
    assert_eq!(RawTag::Ident.name(), "identifier");
    assert_eq!(RawTag::Plus.name(), "+");
    assert_eq!(RawTag::UnterminatedString.name(), "unterminated string");
    assert_eq!(RawTag::Eof.name(), "end of input");
}

// === Categories ===

#[test]
fn category_predicates() {
    assert!(RawTag::HexInt.is_numeric());
    assert!(!RawTag::String.is_numeric());

    assert!(RawTag::TemplateMiddle.is_template());
    assert!(!RawTag::LeftBrace.is_template());

    assert!(RawTag::MultiLineComment.is_trivia());
    assert!(RawTag::MultiLineComment.is_comment());
    assert!(RawTag::LineTerminator.is_trivia());
    assert!(!RawTag::LineTerminator.is_comment());
    assert!(!RawTag::Ident.is_trivia());

    assert!(RawTag::InvalidUtf8.is_error());
    assert!(!RawTag::Eof.is_error());
    assert!(!RawTag::Eof.is_trivia());
}

#[test]
fn line_start_survives_horizontal_trivia_only() {
    assert!(RawTag::Whitespace.keeps_line_start());
    assert!(RawTag::BlockComment.keeps_line_start());
    assert!(RawTag::LineComment.keeps_line_start());
    assert!(!RawTag::LineTerminator.keeps_line_start());
    assert!(!RawTag::MultiLineComment.keeps_line_start());
    assert!(!RawTag::Ident.keeps_line_start());
}
