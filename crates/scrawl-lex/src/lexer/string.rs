//! Single-quoted string literal lexing.
//!
//! A string runs from `'` to the next unescaped `'` and may span
//! multiple lines. The token text keeps the surrounding quotes but
//! holds the decoded form of every escape sequence, so the parser never
//! sees a backslash that was not written as `\\`.
//!
//! Escapes:
//! - `\\`, `\'`, `\n`
//! - `\uXXXX` / `\uXXXXXX`
//! - `\U+XXXX` / `\U+XXXXXX`
//!
//! A unicode escape has four mandatory hex digits. If a fifth hex digit
//! follows, a sixth is mandatory too; a non-hex fifth character is
//! pushed back and belongs to the string body.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::{codepoint_to_char, hex_digit_to_value};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal. The opening `'` has already been
    /// consumed.
    pub(crate) fn lex_string(&mut self) -> LexResult<Token> {
        let mut text = String::from("'");

        loop {
            let (c, escaped) = self.read_string_char()?;
            text.push(c);

            // catches NUL produced by a unicode escape as well
            if c < ' ' && c != '\r' && c != '\n' {
                return Err(LexError::IllegalStringChar {
                    text,
                    span: self.token_span(),
                });
            }

            if c == '\'' && !escaped {
                return Ok(Token::new(TokenKind::String, text));
            }
        }
    }

    /// Reads one logical string character, decoding escapes. The flag
    /// is true when the character came from an escape sequence, which
    /// lets the caller tell `\'` apart from the closing quote.
    fn read_string_char(&mut self) -> LexResult<(char, bool)> {
        let c = match self.cursor.next_char() {
            Some(c) => c,
            None => {
                return Err(LexError::UnexpectedEndOfInput {
                    span: self.token_span(),
                })
            }
        };

        if c != '\\' {
            return Ok((c, false));
        }

        match self.cursor.next_char() {
            Some('\\') => Ok(('\\', true)),
            Some('\'') => Ok(('\'', true)),
            Some('n') => Ok(('\n', true)),
            Some('u') => Ok((self.read_unicode_escape("\\u")?, true)),
            Some('U') => match self.cursor.next_char() {
                Some('+') => Ok((self.read_unicode_escape("\\U+")?, true)),
                other => {
                    let mut text = String::from("\\U");
                    if let Some(c) = other {
                        text.push(c);
                    }
                    Err(LexError::InvalidUnicodeEscape {
                        text,
                        span: self.token_span(),
                    })
                }
            },
            Some(c) => Err(LexError::InvalidEscape {
                text: format!("\\{}", c),
                span: self.token_span(),
            }),
            None => Err(LexError::UnexpectedEndOfInput {
                span: self.token_span(),
            }),
        }
    }

    /// Reads the hex digits of a `\u` or `\U+` escape. `prefix` is the
    /// escape source already consumed; the error text is the prefix
    /// plus the digits accepted so far, without the character that
    /// broke the sequence.
    fn read_unicode_escape(&mut self, prefix: &str) -> LexResult<char> {
        let mut text = String::from(prefix);
        let mut value: u32 = 0;

        for _ in 0..4 {
            match self.cursor.next_char().map(|c| (c, hex_digit_to_value(c))) {
                Some((c, Some(digit))) => {
                    text.push(c);
                    value = value * 16 + u32::from(digit);
                }
                _ => {
                    return Err(LexError::InvalidUnicodeEscape {
                        text,
                        span: self.token_span(),
                    })
                }
            }
        }

        // A fifth hex digit commits to the six-digit form
        match self.cursor.next_char() {
            Some(c) => match hex_digit_to_value(c) {
                Some(digit) => {
                    text.push(c);
                    value = value * 16 + u32::from(digit);
                }
                None => {
                    // first char of the string body
                    self.cursor.put_back(c);
                    return self.finish_unicode_escape(value, text);
                }
            },
            None => return self.finish_unicode_escape(value, text),
        }

        match self.cursor.next_char().map(|c| (c, hex_digit_to_value(c))) {
            Some((c, Some(digit))) => {
                text.push(c);
                value = value * 16 + u32::from(digit);
                self.finish_unicode_escape(value, text)
            }
            _ => Err(LexError::InvalidUnicodeEscape {
                text,
                span: self.token_span(),
            }),
        }
    }

    /// Converts an escape's codepoint, rejecting surrogates and values
    /// above U+10FFFF.
    fn finish_unicode_escape(&self, value: u32, text: String) -> LexResult<char> {
        codepoint_to_char(value).ok_or_else(|| LexError::InvalidUnicodeEscape {
            text,
            span: self.token_span(),
        })
    }
}
