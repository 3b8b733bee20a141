//! First-character text decoding.
//!
//! A window is decoded leniently (invalid sequences become U+FFFD) and only
//! the first code point is kept, so every cell renders as a single glyph.

use super::reader::ByteOrder;

/// Decode `window` as UTF-8 and return its first character.
///
/// # Examples
/// ```
/// use hexlens_core::first_utf8_char;
///
/// assert_eq!(first_utf8_char(b"AB"), "A");
/// assert_eq!(first_utf8_char(&[0xE2, 0x82, 0xAC, 0x41]), "€");
/// assert_eq!(first_utf8_char(&[0xFF]), "\u{FFFD}");
/// ```
pub fn first_utf8_char(window: &[u8]) -> String {
    String::from_utf8_lossy(window)
        .chars()
        .next()
        .map(String::from)
        .unwrap_or_default()
}

/// Decode `window` as UTF-16 in the given byte order and return its first
/// character. A surrogate pair yields one character; a lone surrogate or a
/// dangling odd byte yields U+FFFD.
///
/// # Examples
/// ```
/// use hexlens_core::{ByteOrder, first_utf16_char};
///
/// assert_eq!(first_utf16_char(&[0x41, 0x00, 0x42, 0x00], ByteOrder::Little), "A");
/// assert_eq!(first_utf16_char(&[0xD8, 0x3D, 0xDE, 0x00], ByteOrder::Big), "😀");
/// ```
pub fn first_utf16_char(window: &[u8], order: ByteOrder) -> String {
    let units = window.chunks_exact(2).map(|pair| match order {
        ByteOrder::Little => u16::from_le_bytes([pair[0], pair[1]]),
        ByteOrder::Big => u16::from_be_bytes([pair[0], pair[1]]),
    });

    match char::decode_utf16(units).next() {
        Some(decoded) => decoded
            .unwrap_or(char::REPLACEMENT_CHARACTER)
            .to_string(),
        None if window.is_empty() => String::new(),
        None => char::REPLACEMENT_CHARACTER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{first_utf16_char, first_utf8_char};
    use crate::codecs::reader::ByteOrder;

    #[test]
    fn utf8_first_char_only() {
        assert_eq!(first_utf8_char(&[0x41, 0x42]), "A");
        assert_eq!(first_utf8_char(&[0xC3, 0xA9, 0x00]), "é");
    }

    #[test]
    fn utf8_truncated_sequence_is_replaced() {
        assert_eq!(first_utf8_char(&[0xE2, 0x82]), "\u{FFFD}");
    }

    #[test]
    fn utf8_leading_bom_is_kept() {
        assert_eq!(first_utf8_char(&[0xEF, 0xBB, 0xBF, 0x41]), "\u{FEFF}");
    }

    #[test]
    fn utf8_empty_window() {
        assert_eq!(first_utf8_char(&[]), "");
    }

    #[test]
    fn utf16_order() {
        assert_eq!(first_utf16_char(&[0x00, 0x41], ByteOrder::Big), "A");
        assert_eq!(first_utf16_char(&[0x00, 0x41], ByteOrder::Little), "\u{4100}");
    }

    #[test]
    fn utf16_surrogate_pair_is_one_char() {
        let window = [0x3D, 0xD8, 0x00, 0xDE];
        let decoded = first_utf16_char(&window, ByteOrder::Little);
        assert_eq!(decoded, "😀");
        assert_eq!(decoded.chars().count(), 1);
    }

    #[test]
    fn utf16_lone_surrogate_is_replaced() {
        assert_eq!(first_utf16_char(&[0xD8, 0x3D], ByteOrder::Big), "\u{FFFD}");
        assert_eq!(
            first_utf16_char(&[0xDE, 0x00, 0x00, 0x41], ByteOrder::Big),
            "\u{FFFD}"
        );
    }

    #[test]
    fn utf16_odd_or_empty_window() {
        assert_eq!(first_utf16_char(&[0x41], ByteOrder::Little), "\u{FFFD}");
        assert_eq!(first_utf16_char(&[], ByteOrder::Little), "");
    }
}
