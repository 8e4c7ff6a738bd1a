//! Character classification for the lexical grammar.
//!
//! ASCII bytes are classified through 256-entry lookup tables; everything
//! else goes through the `char` predicates below, which the scanner calls
//! only after decoding a well-formed UTF-8 sequence.

use unicode_xid::UnicodeXID;

/// Zero width non-joiner: identifier-continue only.
const ZWNJ: char = '\u{200C}';
/// Zero width joiner: identifier-continue only.
const ZWJ: char = '\u{200D}';

/// 256-byte lookup table for ASCII identifier start bytes.
/// `true` for a-z, A-Z, `$` and `_`. Non-ASCII bytes map to `false`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_START_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(i as u8, b'a'..=b'z' | b'A'..=b'Z' | b'$' | b'_');
        i += 1;
    }
    table
};

/// 256-byte lookup table for ASCII identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, `$` and `_`. The sentinel byte (0x00) maps to
/// `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'$' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is an ASCII identifier start byte.
#[inline]
pub(crate) fn is_ascii_ident_start(b: u8) -> bool {
    IS_IDENT_START_TABLE[b as usize]
}

/// Returns `true` if `b` is an ASCII identifier continuation byte.
#[inline]
pub(crate) fn is_ascii_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Returns `true` for horizontal whitespace bytes: TAB, VT, FF and SPACE.
#[inline]
pub(crate) fn is_ascii_whitespace_byte(b: u8) -> bool {
    matches!(b, b'\t' | 0x0B | 0x0C | b' ')
}

/// Returns `true` if `c` may start an identifier.
pub fn is_id_start(c: char) -> bool {
    match u8::try_from(c) {
        Ok(b) if b.is_ascii() => is_ascii_ident_start(b),
        _ => c.is_xid_start(),
    }
}

/// Returns `true` if `c` may continue an identifier.
///
/// Includes ZWNJ and ZWJ, which may never start one.
pub fn is_id_continue(c: char) -> bool {
    match u8::try_from(c) {
        Ok(b) if b.is_ascii() => is_ascii_ident_continue(b),
        _ => c == ZWNJ || c == ZWJ || c.is_xid_continue(),
    }
}

/// Returns `true` for line terminators: LF, CR, LINE SEPARATOR and
/// PARAGRAPH SEPARATOR.
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Returns `true` for whitespace that is not a line terminator.
///
/// TAB, VT, FF, SPACE, NBSP, ZWNBSP (BOM) and the `Zs` space separators.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{000B}'
            | '\u{000C}'
            | ' '
            | '\u{00A0}'
            | '\u{FEFF}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Decode the UTF-8 sequence at the start of `bytes`.
///
/// Returns the character and its encoded width, or `None` if the sequence
/// is malformed, overlong, a surrogate, or truncated. Only the first four
/// bytes are inspected.
pub(crate) fn decode_utf8(bytes: &[u8]) -> Option<(char, u32)> {
    let width = utf8_width(*bytes.first()?);
    if width == 0 || bytes.len() < width {
        return None;
    }
    let c = std::str::from_utf8(&bytes[..width]).ok()?.chars().next()?;
    Some((c, u32::try_from(width).ok()?))
}

/// Encoded width announced by a UTF-8 leading byte, or 0 for bytes that
/// cannot start a well-formed sequence.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
