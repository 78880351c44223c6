//! Character classification tables shared by the lexing readers and writers.

/// JSON whitespace is exactly tab, line feed, carriage return, and space.
#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r' | b' ')
}

#[inline]
pub(crate) fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Bytes that may appear in a number lexeme after the leading digits.
#[inline]
pub(crate) fn is_number_continuation(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-')
}

/// Value of an ASCII hex digit, case-insensitive.
#[inline]
pub(crate) fn hex_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some(u32::from(b - b'0')),
        b'a'..=b'f' => Some(u32::from(b - b'a') + 10),
        b'A'..=b'F' => Some(u32::from(b - b'A') + 10),
        _ => None,
    }
}

/// Replacement for a single-character escape, `\x` -> replacement.
///
/// `\uXXXX` is handled separately by the escape decoder.
#[inline]
pub(crate) fn escape_replacement(b: u8) -> Option<char> {
    match b {
        b'"' => Some('"'),
        b'\\' => Some('\\'),
        b'/' => Some('/'),
        b'b' => Some('\u{8}'),
        b'f' => Some('\u{c}'),
        b'n' => Some('\n'),
        b'r' => Some('\r'),
        b't' => Some('\t'),
        _ => None,
    }
}
