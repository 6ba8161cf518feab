//! Token type definitions and literal value decoding.

use crate::error::{LexError, LexResult};

/// The kind of a lexical token.
///
/// This is the closed set of variants the dispatcher can produce; the
/// parser drives its decisions off this enum and only consults
/// [`Token::text`] for the literal-carrying kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of line; all of `\n`, `\r`, and `\r\n` canonicalize to this.
    Newline,
    /// `%`
    Percent,
    /// `%=`
    AssignModulus,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `*`
    Star,
    /// `*=`
    AssignMultiply,
    /// `+`
    Plus,
    /// `+=`
    AssignAdd,
    /// `++`
    Increment,
    /// `,`
    Comma,
    /// `-`
    Minus,
    /// `-=`
    AssignSubtract,
    /// `--`
    Decrement,
    /// `/`
    Slash,
    /// `/=`
    AssignDivide,
    /// `:`
    Colon,
    /// `<`
    LessThan,
    /// `=`
    Equals,
    /// `>`
    GreaterThan,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// End of input; emitted again on every call once reached.
    EndOfInput,
    /// A single unrecognized character, consumed and discarded.
    Undefined,
    /// `#RRGGBB` color literal.
    Color,
    /// Floating-point literal.
    Float,
    /// Binary, hex, or decimal integer literal.
    Integer,
    /// Identifier.
    Name,
    /// Single-quoted string literal.
    String,
}

impl TokenKind {
    /// Returns the literal text of a fixed-shape token, or `None` for
    /// the kinds whose text depends on the input.
    pub fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Newline => "\n",
            TokenKind::Percent => "%",
            TokenKind::AssignModulus => "%=",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Star => "*",
            TokenKind::AssignMultiply => "*=",
            TokenKind::Plus => "+",
            TokenKind::AssignAdd => "+=",
            TokenKind::Increment => "++",
            TokenKind::Comma => ",",
            TokenKind::Minus => "-",
            TokenKind::AssignSubtract => "-=",
            TokenKind::Decrement => "--",
            TokenKind::Slash => "/",
            TokenKind::AssignDivide => "/=",
            TokenKind::Colon => ":",
            TokenKind::LessThan => "<",
            TokenKind::Equals => "=",
            TokenKind::GreaterThan => ">",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::EndOfInput | TokenKind::Undefined => "",
            TokenKind::Color
            | TokenKind::Float
            | TokenKind::Integer
            | TokenKind::Name
            | TokenKind::String => return None,
        };
        Some(text)
    }
}

/// A single lexical token: a kind and the literal source text that
/// produced it.
///
/// The text includes any prefix or marker characters (`0b`, `0x`, `#`,
/// surrounding quotes). Newline canonicalization and string-escape
/// decoding are the only places text differs from the raw input.
///
/// # Example
///
/// ```
/// use scrawl_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Color, "#123456");
/// assert_eq!(token.int_value().unwrap(), 0x123456);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The literal text.
    pub text: String,
}

impl Token {
    /// Creates a token from a kind and its literal text.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Creates a fixed-shape token (operator, punctuation, newline,
    /// end-of-input, undefined) from its kind alone.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is a literal-carrying kind, which has no fixed
    /// text. All call sites in this crate pass fixed kinds.
    pub fn fixed(kind: TokenKind) -> Self {
        match kind.fixed_text() {
            Some(text) => Self::new(kind, text),
            None => panic!("token kind {:?} has no fixed text", kind),
        }
    }

    /// Decodes the integer value of an [`Integer`](TokenKind::Integer)
    /// or [`Color`](TokenKind::Color) token.
    ///
    /// Strips the `0b`, `0x`, or `#` prefix and all `_` separators,
    /// then parses the remaining digits in the prefix's base (10 when
    /// there is no prefix). Case is preserved as written in the token
    /// text but does not affect the value.
    ///
    /// # Errors
    ///
    /// [`LexError::IntegerOutOfRange`] if the value does not fit in 64
    /// bits or the digit run is empty.
    pub fn int_value(&self) -> LexResult<u64> {
        let (digits, base) = if let Some(rest) = self.text.strip_prefix("0b") {
            (rest, 2)
        } else if let Some(rest) = self.text.strip_prefix("0x") {
            (rest, 16)
        } else if let Some(rest) = self.text.strip_prefix('#') {
            (rest, 16)
        } else {
            (self.text.as_str(), 10)
        };

        let digits: String = digits.chars().filter(|&c| c != '_').collect();

        u64::from_str_radix(&digits, base).map_err(|_| LexError::IntegerOutOfRange {
            text: self.text.clone(),
        })
    }

    /// Decodes the value of a [`Float`](TokenKind::Float) token.
    ///
    /// There is no prefix to strip; `_` separators are removed and the
    /// text is parsed as a 32-bit float.
    ///
    /// # Errors
    ///
    /// [`LexError::FloatOutOfRange`] if the magnitude does not fit in a
    /// 32-bit float. Rust's parser saturates oversized literals to
    /// infinity instead of failing, so the range check is explicit.
    pub fn float_value(&self) -> LexResult<f32> {
        let digits: String = self.text.chars().filter(|&c| c != '_').collect();

        let value: f32 = digits.parse().map_err(|_| LexError::FloatOutOfRange {
            text: self.text.clone(),
        })?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(LexError::FloatOutOfRange {
                text: self.text.clone(),
            })
        }
    }
}
