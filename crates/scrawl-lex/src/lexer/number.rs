//! Number literal lexing.
//!
//! Three literal shapes share this module: binary (`0b`), hexadecimal
//! (`0x`), and decimal, where a decimal literal switches to float mode
//! on the first `.`, `e`, or `E`. Underscores are digit separators with
//! no semantic value and are not validated; they may appear anywhere in
//! a digit run, including leading, trailing, or doubled.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::is_digit_in_base;
use crate::Lexer;

/// Where a float scan currently is. The `*Start` states mean the
/// marker (`.` or `e`/`E`) has been read but no digit has followed yet,
/// which is the only position where the literal can still turn out
/// malformed.
#[derive(Clone, Copy, PartialEq, Eq)]
enum FloatPart {
    /// After `.`, before the first fractional digit.
    FractionStart,
    /// Reading fractional digits.
    Fraction,
    /// After `e`/`E`, before the first exponent digit.
    ExponentStart,
    /// Reading exponent digits.
    Exponent,
}

impl<'a> Lexer<'a> {
    /// Lexes the token following a leading `0`.
    ///
    /// `0b` and `0x` select the prefixed integer shapes, a second digit
    /// selects a leading-zero decimal, and anything else terminates the
    /// literal as the single-digit integer `0`.
    pub(crate) fn lex_zero(&mut self) -> LexResult<Token> {
        match self.cursor.next_char() {
            Some('b') => Ok(self.lex_radix_number('b', 2)),
            Some('x') => Ok(self.lex_radix_number('x', 16)),
            Some(c) if c.is_ascii_digit() => {
                self.cursor.put_back(c);
                self.lex_decimal_number('0')
            }
            other => {
                if let Some(c) = other {
                    self.cursor.put_back(c);
                }
                Ok(Token::new(TokenKind::Integer, "0"))
            }
        }
    }

    /// Lexes the body of a `0b` or `0x` integer literal.
    ///
    /// The marker character has already been consumed; scanning stops
    /// (with pushback) at the first character that is neither a digit
    /// of `base` nor `_`.
    fn lex_radix_number(&mut self, marker: char, base: u32) -> Token {
        let mut text = String::from("0");
        text.push(marker);

        while let Some(c) = self.cursor.next_char() {
            if c == '_' || is_digit_in_base(c, base) {
                text.push(c);
            } else {
                // first char of the next token
                self.cursor.put_back(c);
                break;
            }
        }

        Token::new(TokenKind::Integer, text)
    }

    /// Lexes a decimal literal, which may turn out to be an integer or
    /// a float.
    ///
    /// `first_digit` has already been consumed by the dispatcher. The
    /// mantissa may contain `_` separators; the first `.`, `e`, or `E`
    /// hands control to float mode.
    pub(crate) fn lex_decimal_number(&mut self, first_digit: char) -> LexResult<Token> {
        let mut text = String::new();
        text.push(first_digit);

        loop {
            match self.cursor.next_char() {
                Some(c) if c.is_ascii_digit() || c == '_' => text.push(c),
                Some(c @ ('.' | 'e' | 'E')) => {
                    text.push(c);
                    return self.lex_float_number(text, c);
                }
                other => {
                    // first char of the next token
                    if let Some(c) = other {
                        self.cursor.put_back(c);
                    }
                    return Ok(Token::new(TokenKind::Integer, text));
                }
            }
        }
    }

    /// Continues a decimal literal in float mode.
    ///
    /// `trigger` is the `.`, `e`, or `E` that switched modes, already
    /// appended to `text`. A marker with no digit after it is an
    /// incomplete float; the error text carries the literal read so
    /// far, plus the offending character where the original grammar
    /// recorded one (a stray character after `.`, but not a second
    /// exponent marker after `e`).
    fn lex_float_number(&mut self, mut text: String, trigger: char) -> LexResult<Token> {
        let mut part = if trigger == '.' {
            FloatPart::FractionStart
        } else {
            FloatPart::ExponentStart
        };

        loop {
            match self.cursor.next_char() {
                Some(c) if c.is_ascii_digit() => {
                    text.push(c);
                    part = match part {
                        FloatPart::FractionStart => FloatPart::Fraction,
                        FloatPart::ExponentStart => FloatPart::Exponent,
                        part => part,
                    };
                }
                Some(c @ ('e' | 'E')) => match part {
                    FloatPart::FractionStart => {
                        // after `.` a digit is required, not an exponent
                        text.push(c);
                        return Err(LexError::IncompleteFloat {
                            text,
                            span: self.token_span(),
                        });
                    }
                    FloatPart::Fraction => {
                        text.push(c);
                        part = FloatPart::ExponentStart;
                    }
                    FloatPart::ExponentStart => {
                        return Err(LexError::IncompleteFloat {
                            text,
                            span: self.token_span(),
                        });
                    }
                    FloatPart::Exponent => {
                        // first char of the next token
                        self.cursor.put_back(c);
                        return Ok(Token::new(TokenKind::Float, text));
                    }
                },
                other => match part {
                    FloatPart::FractionStart | FloatPart::ExponentStart => {
                        if let Some(c) = other {
                            text.push(c);
                        }
                        return Err(LexError::IncompleteFloat {
                            text,
                            span: self.token_span(),
                        });
                    }
                    FloatPart::Fraction | FloatPart::Exponent => {
                        // first char of the next token
                        if let Some(c) = other {
                            self.cursor.put_back(c);
                        }
                        return Ok(Token::new(TokenKind::Float, text));
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{LexError, Lexer, Token, TokenKind};

    fn lex_one(source: &str) -> Token {
        Lexer::new(source).next_token().unwrap()
    }

    fn incomplete_float_text(source: &str) -> String {
        match Lexer::new(source).next_token().unwrap_err() {
            LexError::IncompleteFloat { text, .. } => text,
            err => panic!("expected incomplete float, got {:?}", err),
        }
    }

    #[test]
    fn test_decimal_integer() {
        assert_eq!(lex_one("12"), Token::new(TokenKind::Integer, "12"));
        assert_eq!(lex_one("1_234"), Token::new(TokenKind::Integer, "1_234"));
    }

    #[test]
    fn test_decimal_integer_stops_at_next_token() {
        let mut lexer = Lexer::new("12%");
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Integer, "12")
        );
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Percent);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn test_leading_zero_decimal() {
        let token = lex_one("012");
        assert_eq!(token, Token::new(TokenKind::Integer, "012"));
        assert_eq!(token.int_value().unwrap(), 12);
    }

    #[test]
    fn test_bare_zero() {
        assert_eq!(lex_one("0"), Token::new(TokenKind::Integer, "0"));

        let mut lexer = Lexer::new("0%");
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Integer, "0")
        );
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Percent);
    }

    #[test]
    fn test_binary_number() {
        let token = lex_one("0b1_01");
        assert_eq!(token, Token::new(TokenKind::Integer, "0b1_01"));
        assert_eq!(token.int_value().unwrap(), 5);

        // separators are not validated
        assert_eq!(lex_one("0b__"), Token::new(TokenKind::Integer, "0b__"));
    }

    #[test]
    fn test_binary_number_stops_at_non_binary_digit() {
        let mut lexer = Lexer::new("0b102");
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Integer, "0b10")
        );
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Integer, "2")
        );
    }

    #[test]
    fn test_hex_number() {
        let token = lex_one("0x_ab_CD");
        assert_eq!(token, Token::new(TokenKind::Integer, "0x_ab_CD"));
        assert_eq!(token.int_value().unwrap(), 0xABCD);
    }

    #[test]
    fn test_hex_number_stops_at_next_token() {
        let mut lexer = Lexer::new("0xFF%");
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Integer, "0xFF")
        );
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Percent);
    }

    #[test]
    fn test_float_fraction() {
        let token = lex_one("12.34");
        assert_eq!(token, Token::new(TokenKind::Float, "12.34"));
        assert_eq!(token.float_value().unwrap(), 12.34_f32);
    }

    #[test]
    fn test_float_exponent() {
        assert_eq!(lex_one("12e26"), Token::new(TokenKind::Float, "12e26"));
        assert_eq!(lex_one("12E26"), Token::new(TokenKind::Float, "12E26"));
        assert_eq!(
            lex_one("12.34e26"),
            Token::new(TokenKind::Float, "12.34e26")
        );
        assert_eq!(
            lex_one("12.34E26"),
            Token::new(TokenKind::Float, "12.34E26")
        );
    }

    #[test]
    fn test_float_case_preserved() {
        assert_eq!(lex_one("12E26").text, "12E26");
    }

    #[test]
    fn test_float_stops_at_next_token() {
        let mut lexer = Lexer::new("12.34%");
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Float, "12.34")
        );
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Percent);

        let mut lexer = Lexer::new("12e26%");
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Float, "12e26")
        );
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Percent);
    }

    #[test]
    fn test_float_second_dot_starts_next_token() {
        let mut lexer = Lexer::new("12.34.");
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Float, "12.34")
        );
        // a bare `.` is not part of any token
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Undefined);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn test_exponent_not_extended_by_marker() {
        let mut lexer = Lexer::new("12E26.");
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Float, "12E26")
        );
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Undefined);
    }

    #[test]
    fn test_incomplete_float_at_end_of_input() {
        assert_eq!(incomplete_float_text("12."), "12.");
        assert_eq!(incomplete_float_text("12e"), "12e");
        assert_eq!(incomplete_float_text("12E"), "12E");
    }

    #[test]
    fn test_incomplete_float_with_offending_char() {
        // a stray character right after `.` lands in the error text
        assert_eq!(incomplete_float_text("12.x"), "12.x");
        assert_eq!(incomplete_float_text("12.e5"), "12.e");
        // a second marker right after `e` does not
        assert_eq!(incomplete_float_text("12ee"), "12e");
        assert_eq!(incomplete_float_text("12e%"), "12e%");
    }

    #[test]
    fn test_separator_ends_float_mode() {
        // `_` is only a separator in the mantissa
        let mut lexer = Lexer::new("1.2_");
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Float, "1.2")
        );
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Undefined);
    }
}
