//! Color literal lexing.
//!
//! A color is `#` followed by exactly six hex digits, `#RRGGBB`. There
//! is no three-digit short form and no pushback: the six characters
//! after `#` must all be hex digits or the literal is malformed.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::hex_digit_to_value;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a color literal. The `#` has already been consumed.
    pub(crate) fn lex_color(&mut self) -> LexResult<Token> {
        let mut text = String::from("#");

        for _ in 0..6 {
            match self.cursor.next_char() {
                Some(c) => {
                    text.push(c);
                    if hex_digit_to_value(c).is_none() {
                        return Err(LexError::InvalidColor {
                            text,
                            span: self.token_span(),
                        });
                    }
                }
                None => {
                    return Err(LexError::InvalidColor {
                        text,
                        span: self.token_span(),
                    })
                }
            }
        }

        Ok(Token::new(TokenKind::Color, text))
    }
}
