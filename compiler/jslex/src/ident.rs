//! Identifier-name decoding.

use std::borrow::Cow;

/// Decode the `\uHHHH` and `\u{H…}` escapes of an identifier's source text.
///
/// Returns the text unchanged (borrowed) when it contains no backslash.
/// Returns `None` if the bytes are not UTF-8, an escape is malformed, or an
/// escape names a surrogate or a value above U+10FFFF.
///
/// The decoded characters are not checked against the identifier classes;
/// `)` decodes to `)`.
pub fn decode_identifier(text: &[u8]) -> Option<Cow<'_, str>> {
    let text = std::str::from_utf8(text).ok()?;
    if !text.contains('\\') {
        return Some(Cow::Borrowed(text));
    }

    let mut name = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(at) = rest.find('\\') {
        name.push_str(&rest[..at]);
        let (c, consumed) = decode_escape(&rest[at..])?;
        name.push(c);
        rest = &rest[at + consumed..];
    }
    name.push_str(rest);
    Some(Cow::Owned(name))
}

/// Decode one escape at the start of `escape`, returning the character and
/// the number of bytes it spans.
fn decode_escape(escape: &str) -> Option<(char, usize)> {
    let body = escape.strip_prefix("\\u")?;
    let (digits, consumed) = match body.strip_prefix('{') {
        Some(braced) => {
            let close = braced.find('}')?;
            (&braced[..close], close + 4)
        }
        None => (body.get(..4)?, 6),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some((char::from_u32(value)?, consumed))
}
