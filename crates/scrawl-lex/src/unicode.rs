//! Hex-digit and codepoint utilities for the Scrawl lexer.
//!
//! Hex digits show up in three places in the grammar: `0x` integer
//! literals, `#RRGGBB` color literals, and `\u`/`\U+` escapes inside
//! strings. These helpers keep the digit classification in one place.

/// Converts a hex character to its numeric value.
///
/// # Example
///
/// ```
/// use scrawl_lex::unicode::hex_digit_to_value;
///
/// assert_eq!(hex_digit_to_value('0'), Some(0));
/// assert_eq!(hex_digit_to_value('a'), Some(10));
/// assert_eq!(hex_digit_to_value('F'), Some(15));
/// assert_eq!(hex_digit_to_value('g'), None);
/// ```
pub fn hex_digit_to_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// Checks if a character is a valid digit in the given numeric base.
///
/// Only the bases the grammar uses are supported: 2 (`0b` literals),
/// 10, and 16 (`0x` literals and colors).
///
/// # Example
///
/// ```
/// use scrawl_lex::unicode::is_digit_in_base;
///
/// assert!(is_digit_in_base('1', 2));
/// assert!(!is_digit_in_base('2', 2));
/// assert!(is_digit_in_base('f', 16));
/// assert!(!is_digit_in_base('f', 10));
/// ```
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    match base {
        2 => matches!(c, '0' | '1'),
        10 => c.is_ascii_digit(),
        16 => c.is_ascii_hexdigit(),
        _ => false,
    }
}

/// Converts a codepoint to a `char` if it is a valid Unicode scalar
/// value (at most U+10FFFF and outside the surrogate range).
///
/// # Example
///
/// ```
/// use scrawl_lex::unicode::codepoint_to_char;
///
/// assert_eq!(codepoint_to_char(0x41), Some('A'));
/// assert_eq!(codepoint_to_char(0x10000), Some('\u{10000}'));
/// assert_eq!(codepoint_to_char(0xD800), None);
/// assert_eq!(codepoint_to_char(0x110000), None);
/// ```
pub fn codepoint_to_char(codepoint: u32) -> Option<char> {
    char::from_u32(codepoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_digit_to_value() {
        for (c, expected) in [('0', 0), ('9', 9), ('a', 10), ('f', 15), ('A', 10), ('F', 15)] {
            assert_eq!(hex_digit_to_value(c), Some(expected));
        }
        assert_eq!(hex_digit_to_value('g'), None);
        assert_eq!(hex_digit_to_value('G'), None);
        assert_eq!(hex_digit_to_value('_'), None);
        assert_eq!(hex_digit_to_value(' '), None);
    }

    #[test]
    fn test_is_digit_in_base_binary() {
        assert!(is_digit_in_base('0', 2));
        assert!(is_digit_in_base('1', 2));
        assert!(!is_digit_in_base('2', 2));
        assert!(!is_digit_in_base('a', 2));
    }

    #[test]
    fn test_is_digit_in_base_decimal() {
        for c in '0'..='9' {
            assert!(is_digit_in_base(c, 10), "{} should be a decimal digit", c);
        }
        assert!(!is_digit_in_base('a', 10));
    }

    #[test]
    fn test_is_digit_in_base_hex() {
        for c in ('0'..='9').chain('a'..='f').chain('A'..='F') {
            assert!(is_digit_in_base(c, 16), "{} should be a hex digit", c);
        }
        assert!(!is_digit_in_base('g', 16));
    }

    #[test]
    fn test_is_digit_in_base_unsupported() {
        assert!(!is_digit_in_base('0', 8));
        assert!(!is_digit_in_base('0', 0));
    }

    #[test]
    fn test_codepoint_to_char() {
        assert_eq!(codepoint_to_char(0x61), Some('a'));
        assert_eq!(codepoint_to_char(0x10FFFF), Some('\u{10FFFF}'));
        assert_eq!(codepoint_to_char(0xD800), None);
        assert_eq!(codepoint_to_char(0xDFFF), None);
        assert_eq!(codepoint_to_char(0x110000), None);
    }
}
