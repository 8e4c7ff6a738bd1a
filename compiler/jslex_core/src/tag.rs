//! Raw token tags and the `(tag, len)` token pair.
//!
//! Tags are grouped into numeric ranges so category checks are a single
//! comparison:
//!
//! | Range     | Category                  |
//! |-----------|---------------------------|
//! | 0-15      | identifiers and literals  |
//! | 16-31     | template pieces           |
//! | 32-111    | punctuators               |
//! | 112-127   | trivia                    |
//! | 240-254   | malformed input           |
//! | 255       | end of input              |

/// Fine-grained token tag produced by the raw scanner.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    // === Identifiers & Literals: 0-15 ===
    /// Identifier name, possibly containing Unicode escapes.
    Ident = 0,
    /// Decimal numeral, with optional fraction and exponent.
    Decimal = 1,
    /// `0x`/`0X` numeral.
    HexInt = 2,
    /// `0o`/`0O` numeral.
    OctalInt = 3,
    /// `0b`/`0B` numeral.
    BinInt = 4,
    /// Terminated `'…'` or `"…"` string.
    String = 5,

    // === Template Literals: 16-31 ===
    /// `` `…` `` with no interpolation.
    TemplateComplete = 16,
    /// `` `…${ ``, opens an interpolation.
    TemplateHead = 17,
    /// `}…${`, between two interpolations.
    TemplateMiddle = 18,
    /// `` }…` ``, closes the template.
    TemplateTail = 19,
    /// Template text that ran into the end of input.
    UnterminatedTemplate = 20,

    // === Punctuators: 32-111 ===
    LeftBrace = 32,
    RightBrace = 33,
    LeftParen = 34,
    RightParen = 35,
    LeftBracket = 36,
    RightBracket = 37,
    Dot = 38,
    DotDotDot = 39,
    Semicolon = 40,
    Comma = 41,
    Less = 42,
    Greater = 43,
    LessEqual = 44,
    GreaterEqual = 45,
    EqualEqual = 46,
    BangEqual = 47,
    EqualEqualEqual = 48,
    BangEqualEqual = 49,
    Plus = 50,
    Minus = 51,
    Star = 52,
    Percent = 53,
    StarStar = 54,
    PlusPlus = 55,
    MinusMinus = 56,
    Shl = 57,
    Shr = 58,
    UShr = 59,
    Ampersand = 60,
    Pipe = 61,
    Caret = 62,
    Bang = 63,
    Tilde = 64,
    AmpersandAmpersand = 65,
    PipePipe = 66,
    QuestionQuestion = 67,
    Question = 68,
    QuestionDot = 69,
    Colon = 70,
    Equal = 71,
    PlusEqual = 72,
    MinusEqual = 73,
    StarEqual = 74,
    PercentEqual = 75,
    StarStarEqual = 76,
    ShlEqual = 77,
    ShrEqual = 78,
    UShrEqual = 79,
    AmpersandEqual = 80,
    PipeEqual = 81,
    CaretEqual = 82,
    AmpersandAmpersandEqual = 83,
    PipePipeEqual = 84,
    QuestionQuestionEqual = 85,
    FatArrow = 86,
    Slash = 87,
    SlashEqual = 88,

    // === Trivia: 112-127 ===
    /// Run of non-line-terminator whitespace.
    Whitespace = 112,
    /// Run of line terminators (LF, CR, CRLF, U+2028, U+2029).
    LineTerminator = 113,
    /// `// …` up to the next line terminator.
    LineComment = 114,
    /// `/* … */` without a line terminator inside (possibly unterminated).
    BlockComment = 115,
    /// `/* … */` spanning at least one line terminator.
    MultiLineComment = 116,
    /// `<!-- …` up to the next line terminator.
    HtmlOpenComment = 117,
    /// Line-initial `--> …` up to the next line terminator.
    HtmlCloseComment = 118,

    // === Errors: 240-254 ===
    /// ASCII byte with no place in the grammar (`#`, `@`, controls).
    InvalidByte = 240,
    /// Well-formed code point with no place in the grammar.
    InvalidChar = 241,
    /// Byte that does not start a well-formed UTF-8 sequence.
    InvalidUtf8 = 242,
    /// Opening quote of a string that failed to scan.
    UnterminatedString = 243,
    /// `\` that does not begin a valid identifier escape.
    InvalidEscape = 244,
    /// NUL byte outside literals and comments.
    InteriorNull = 245,

    // === Control: 255 ===
    /// End of input. Always has `len == 0`.
    Eof = 255,
}

/// Size assertion: the tag is one byte.
const _: () = assert!(std::mem::size_of::<RawTag>() == 1);

impl RawTag {
    /// Fixed source text for punctuators, `None` for variable-length tags.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            RawTag::LeftBrace => "{",
            RawTag::RightBrace => "}",
            RawTag::LeftParen => "(",
            RawTag::RightParen => ")",
            RawTag::LeftBracket => "[",
            RawTag::RightBracket => "]",
            RawTag::Dot => ".",
            RawTag::DotDotDot => "...",
            RawTag::Semicolon => ";",
            RawTag::Comma => ",",
            RawTag::Less => "<",
            RawTag::Greater => ">",
            RawTag::LessEqual => "<=",
            RawTag::GreaterEqual => ">=",
            RawTag::EqualEqual => "==",
            RawTag::BangEqual => "!=",
            RawTag::EqualEqualEqual => "===",
            RawTag::BangEqualEqual => "!==",
            RawTag::Plus => "+",
            RawTag::Minus => "-",
            RawTag::Star => "*",
            RawTag::Percent => "%",
            RawTag::StarStar => "**",
            RawTag::PlusPlus => "++",
            RawTag::MinusMinus => "--",
            RawTag::Shl => "<<",
            RawTag::Shr => ">>",
            RawTag::UShr => ">>>",
            RawTag::Ampersand => "&",
            RawTag::Pipe => "|",
            RawTag::Caret => "^",
            RawTag::Bang => "!",
            RawTag::Tilde => "~",
            RawTag::AmpersandAmpersand => "&&",
            RawTag::PipePipe => "||",
            RawTag::QuestionQuestion => "??",
            RawTag::Question => "?",
            RawTag::QuestionDot => "?.",
            RawTag::Colon => ":",
            RawTag::Equal => "=",
            RawTag::PlusEqual => "+=",
            RawTag::MinusEqual => "-=",
            RawTag::StarEqual => "*=",
            RawTag::PercentEqual => "%=",
            RawTag::StarStarEqual => "**=",
            RawTag::ShlEqual => "<<=",
            RawTag::ShrEqual => ">>=",
            RawTag::UShrEqual => ">>>=",
            RawTag::AmpersandEqual => "&=",
            RawTag::PipeEqual => "|=",
            RawTag::CaretEqual => "^=",
            RawTag::AmpersandAmpersandEqual => "&&=",
            RawTag::PipePipeEqual => "||=",
            RawTag::QuestionQuestionEqual => "??=",
            RawTag::FatArrow => "=>",
            RawTag::Slash => "/",
            RawTag::SlashEqual => "/=",
            _ => return None,
        };
        Some(text)
    }

    /// Human-readable name for diagnostics and debug output.
    pub fn name(self) -> &'static str {
        match self {
            RawTag::Ident => "identifier",
            RawTag::Decimal => "decimal numeral",
            RawTag::HexInt => "hex numeral",
            RawTag::OctalInt => "octal numeral",
            RawTag::BinInt => "binary numeral",
            RawTag::String => "string",
            RawTag::TemplateComplete => "template",
            RawTag::TemplateHead => "template head",
            RawTag::TemplateMiddle => "template middle",
            RawTag::TemplateTail => "template tail",
            RawTag::UnterminatedTemplate => "unterminated template",
            RawTag::Whitespace => "whitespace",
            RawTag::LineTerminator => "line terminator",
            RawTag::LineComment => "line comment",
            RawTag::BlockComment => "block comment",
            RawTag::MultiLineComment => "multi-line comment",
            RawTag::HtmlOpenComment => "`<!--` comment",
            RawTag::HtmlCloseComment => "`-->` comment",
            RawTag::InvalidByte => "invalid byte",
            RawTag::InvalidChar => "invalid character",
            RawTag::InvalidUtf8 => "malformed UTF-8",
            RawTag::UnterminatedString => "unterminated string",
            RawTag::InvalidEscape => "invalid escape",
            RawTag::InteriorNull => "null byte",
            RawTag::Eof => "end of input",
            punct => punct.lexeme().unwrap_or("punctuator"),
        }
    }

    /// Numeric literal of any radix.
    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            RawTag::Decimal | RawTag::HexInt | RawTag::OctalInt | RawTag::BinInt
        )
    }

    /// Any piece of a template literal.
    #[inline]
    pub fn is_template(self) -> bool {
        (16..32).contains(&(self as u8))
    }

    /// Any punctuator.
    #[inline]
    pub fn is_punctuator(self) -> bool {
        (32..112).contains(&(self as u8))
    }

    /// Whitespace, line terminators and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        (112..128).contains(&(self as u8))
    }

    /// Any comment form.
    #[inline]
    pub fn is_comment(self) -> bool {
        (114..=118).contains(&(self as u8))
    }

    /// Malformed input.
    #[inline]
    pub fn is_error(self) -> bool {
        (240..255).contains(&(self as u8))
    }

    /// Trivia after which a line-initial `-->` is still possible.
    ///
    /// Line terminators and multi-line comments start a new line; the other
    /// tags here leave the line-start state unchanged.
    #[inline]
    pub(crate) fn keeps_line_start(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace
                | RawTag::LineComment
                | RawTag::BlockComment
                | RawTag::HtmlOpenComment
                | RawTag::HtmlCloseComment
                | RawTag::Eof
        )
    }
}

/// A raw token: tag and byte length. Start offsets are tracked by the
/// caller (the running sum of lengths).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    /// What was scanned.
    pub tag: RawTag,
    /// Length in bytes. Zero only for [`RawTag::Eof`].
    pub len: u32,
}

/// Size assertion: `RawToken` packs into 8 bytes.
const _: () = assert!(std::mem::size_of::<RawToken>() <= 8);

#[cfg(test)]
mod tests;
