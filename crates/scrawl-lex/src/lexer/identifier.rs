//! Name lexing.
//!
//! A name starts with an ASCII letter and continues with ASCII letters,
//! digits, and underscores. The terminating character is pushed back so
//! it starts the next token.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Maximum length of a name in characters.
pub const MAX_NAME_LEN: usize = 16;

impl<'a> Lexer<'a> {
    /// Lexes a name. `first` is the leading letter, already consumed by
    /// the dispatcher.
    ///
    /// The whole name is scanned before the length check, so an
    /// over-length name reports its complete text.
    pub(crate) fn lex_name(&mut self, first: char) -> LexResult<Token> {
        let mut text = String::new();
        text.push(first);

        while let Some(c) = self.cursor.next_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                text.push(c);
            } else {
                // first char of the next token
                self.cursor.put_back(c);
                break;
            }
        }

        if text.len() > MAX_NAME_LEN {
            return Err(LexError::NameTooLong {
                text,
                span: self.token_span(),
            });
        }

        Ok(Token::new(TokenKind::Name, text))
    }
}
