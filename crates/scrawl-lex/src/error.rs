//! Lexical error types.
//!
//! Every malformed literal aborts the current scan call with one of the
//! variants below instead of producing a partial token. Scan-time
//! errors carry the text accumulated so far (including the offending
//! character where one was read) together with the span of the failing
//! token; decode-time errors carry the literal text only.

use scrawl_util::Span;
use thiserror::Error;

/// Error type for lexing and token-value decoding.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// Malformed hex digits after `\u` or `\U+` in a string literal.
    #[error("invalid unicode escape sequence {text}: must be \\uXXXX, \\uXXXXXX, \\U+XXXX, or \\U+XXXXXX")]
    InvalidUnicodeEscape {
        /// The escape source read so far, starting at the backslash.
        text: String,
        /// Location of the failing token.
        span: Span,
    },

    /// Unrecognized character after `\` in a string literal.
    #[error("invalid escape sequence {text}: must be \\\\, \\', \\n, \\uXXXX, \\uXXXXXX, \\U+XXXX, or \\U+XXXXXX")]
    InvalidEscape {
        /// The two-character escape source, e.g. `\z`.
        text: String,
        /// Location of the failing token.
        span: Span,
    },

    /// ASCII control character other than CR/LF inside a string literal.
    #[error("illegal string {text:?}: a string cannot contain ASCII control characters except for \\r and \\n")]
    IllegalStringChar {
        /// The string text accumulated so far, ending at the offender.
        text: String,
        /// Location of the failing token.
        span: Span,
    },

    /// Input ended inside an unterminated string literal.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput {
        /// Location of the failing token.
        span: Span,
    },

    /// Non-hex character within the six expected after `#`.
    #[error("invalid color {text}: there must be six hex characters after the #")]
    InvalidColor {
        /// The color text accumulated so far, ending at the offender.
        text: String,
        /// Location of the failing token.
        span: Span,
    },

    /// Numeric literal ended with `.`, `e`, or `E` and no digit.
    #[error("incomplete float number {text}: a float cannot end with a ., e, or E")]
    IncompleteFloat {
        /// The literal text accumulated so far.
        text: String,
        /// Location of the failing token.
        span: Span,
    },

    /// Identifier longer than the maximum name length.
    #[error("name too long {text:?}: a name can be a max of 16 chars")]
    NameTooLong {
        /// The complete over-length name.
        text: String,
        /// Location of the failing token.
        span: Span,
    },

    /// Integer or color literal whose value does not fit in 64 bits.
    #[error("integer value out of range in {text:?}: must fit in an unsigned 64-bit value")]
    IntegerOutOfRange {
        /// The literal text of the token being decoded.
        text: String,
    },

    /// Float literal whose value does not fit in a 32-bit float.
    #[error("float value out of range in {text:?}: must fit in a 32-bit float")]
    FloatOutOfRange {
        /// The literal text of the token being decoded.
        text: String,
    },
}

impl LexError {
    /// Returns the span of a scan-time error, or `None` for the
    /// decode-time variants.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::InvalidUnicodeEscape { span, .. }
            | LexError::InvalidEscape { span, .. }
            | LexError::IllegalStringChar { span, .. }
            | LexError::UnexpectedEndOfInput { span }
            | LexError::InvalidColor { span, .. }
            | LexError::IncompleteFloat { span, .. }
            | LexError::NameTooLong { span, .. } => Some(*span),
            LexError::IntegerOutOfRange { .. } | LexError::FloatOutOfRange { .. } => None,
        }
    }

    /// Returns the input fragment the error was raised on, where the
    /// variant carries one.
    pub fn text(&self) -> Option<&str> {
        match self {
            LexError::InvalidUnicodeEscape { text, .. }
            | LexError::InvalidEscape { text, .. }
            | LexError::IllegalStringChar { text, .. }
            | LexError::InvalidColor { text, .. }
            | LexError::IncompleteFloat { text, .. }
            | LexError::NameTooLong { text, .. }
            | LexError::IntegerOutOfRange { text }
            | LexError::FloatOutOfRange { text } => Some(text),
            LexError::UnexpectedEndOfInput { .. } => None,
        }
    }
}

/// Result type alias for lexing operations.
pub type LexResult<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_fragment() {
        let err = LexError::IncompleteFloat {
            text: "12.".to_string(),
            span: Span::DUMMY,
        };
        assert_eq!(
            err.to_string(),
            "incomplete float number 12.: a float cannot end with a ., e, or E"
        );

        let err = LexError::InvalidEscape {
            text: "\\z".to_string(),
            span: Span::DUMMY,
        };
        assert!(err.to_string().contains("\\z"));
    }

    #[test]
    fn test_span_accessor() {
        let span = Span::new(3, 7, 1, 4);
        let err = LexError::InvalidColor {
            text: "#12G".to_string(),
            span,
        };
        assert_eq!(err.span(), Some(span));

        let err = LexError::IntegerOutOfRange {
            text: "18446744073709551616".to_string(),
        };
        assert_eq!(err.span(), None);
    }

    #[test]
    fn test_text_accessor() {
        let err = LexError::NameTooLong {
            text: "abcdef1234567890_".to_string(),
            span: Span::DUMMY,
        };
        assert_eq!(err.text(), Some("abcdef1234567890_"));

        let err = LexError::UnexpectedEndOfInput { span: Span::DUMMY };
        assert_eq!(err.text(), None);
    }
}
