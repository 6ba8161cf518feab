//! Operator and punctuation lexing.
//!
//! Two-character operators are resolved greedily with one character of
//! lookahead; a non-matching lookahead character is pushed back so it
//! starts the next token.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes percent or assign-modulus.
    ///
    /// Handles: `%`, `%=`
    pub(crate) fn lex_percent(&mut self) -> Token {
        match self.cursor.next_char() {
            Some('=') => Token::fixed(TokenKind::AssignModulus),
            other => {
                if let Some(c) = other {
                    self.cursor.put_back(c);
                }
                Token::fixed(TokenKind::Percent)
            }
        }
    }

    /// Lexes star or assign-multiply.
    ///
    /// Handles: `*`, `*=`
    pub(crate) fn lex_star(&mut self) -> Token {
        match self.cursor.next_char() {
            Some('=') => Token::fixed(TokenKind::AssignMultiply),
            other => {
                if let Some(c) = other {
                    self.cursor.put_back(c);
                }
                Token::fixed(TokenKind::Star)
            }
        }
    }

    /// Lexes plus, assign-add, or increment.
    ///
    /// Handles: `+`, `+=`, `++`
    pub(crate) fn lex_plus(&mut self) -> Token {
        match self.cursor.next_char() {
            Some('=') => Token::fixed(TokenKind::AssignAdd),
            Some('+') => Token::fixed(TokenKind::Increment),
            other => {
                if let Some(c) = other {
                    self.cursor.put_back(c);
                }
                Token::fixed(TokenKind::Plus)
            }
        }
    }

    /// Lexes minus, assign-subtract, or decrement.
    ///
    /// Handles: `-`, `-=`, `--`
    pub(crate) fn lex_minus(&mut self) -> Token {
        match self.cursor.next_char() {
            Some('=') => Token::fixed(TokenKind::AssignSubtract),
            Some('-') => Token::fixed(TokenKind::Decrement),
            other => {
                if let Some(c) = other {
                    self.cursor.put_back(c);
                }
                Token::fixed(TokenKind::Minus)
            }
        }
    }

    /// Lexes slash or assign-divide.
    ///
    /// Handles: `/`, `/=`
    pub(crate) fn lex_slash(&mut self) -> Token {
        match self.cursor.next_char() {
            Some('=') => Token::fixed(TokenKind::AssignDivide),
            other => {
                if let Some(c) = other {
                    self.cursor.put_back(c);
                }
                Token::fixed(TokenKind::Slash)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};

    /// Lexes `source` and asserts the token stream, closing with
    /// end-of-input. Appending a `%` sentinel after a two-character
    /// operator proves the lookahead character was pushed back.
    fn assert_tokens(source: &str, expected: &[TokenKind]) {
        let mut lexer = Lexer::new(source);
        for kind in expected {
            assert_eq!(
                lexer.next_token().unwrap(),
                Token::fixed(*kind),
                "in {:?}",
                source
            );
        }
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn test_percent_family() {
        assert_tokens("%", &[TokenKind::Percent]);
        assert_tokens("%%", &[TokenKind::Percent, TokenKind::Percent]);
        assert_tokens("%=", &[TokenKind::AssignModulus]);
        assert_tokens("%=%", &[TokenKind::AssignModulus, TokenKind::Percent]);
    }

    #[test]
    fn test_star_family() {
        assert_tokens("*", &[TokenKind::Star]);
        assert_tokens("*%", &[TokenKind::Star, TokenKind::Percent]);
        assert_tokens("*=", &[TokenKind::AssignMultiply]);
        assert_tokens("*=%", &[TokenKind::AssignMultiply, TokenKind::Percent]);
    }

    #[test]
    fn test_plus_family() {
        assert_tokens("+", &[TokenKind::Plus]);
        assert_tokens("+%", &[TokenKind::Plus, TokenKind::Percent]);
        assert_tokens("+=", &[TokenKind::AssignAdd]);
        assert_tokens("+=%", &[TokenKind::AssignAdd, TokenKind::Percent]);
        assert_tokens("++", &[TokenKind::Increment]);
        assert_tokens("++%", &[TokenKind::Increment, TokenKind::Percent]);
    }

    #[test]
    fn test_minus_family() {
        assert_tokens("-", &[TokenKind::Minus]);
        assert_tokens("-%", &[TokenKind::Minus, TokenKind::Percent]);
        assert_tokens("-=", &[TokenKind::AssignSubtract]);
        assert_tokens("-=%", &[TokenKind::AssignSubtract, TokenKind::Percent]);
        assert_tokens("--", &[TokenKind::Decrement]);
        assert_tokens("--%", &[TokenKind::Decrement, TokenKind::Percent]);
    }

    #[test]
    fn test_slash_family() {
        assert_tokens("/", &[TokenKind::Slash]);
        assert_tokens("/%", &[TokenKind::Slash, TokenKind::Percent]);
        assert_tokens("/=", &[TokenKind::AssignDivide]);
        assert_tokens("/=%", &[TokenKind::AssignDivide, TokenKind::Percent]);
    }

    #[test]
    fn test_single_char_followed_by_sentinel() {
        assert_tokens("(%", &[TokenKind::OpenParen, TokenKind::Percent]);
        assert_tokens(")%", &[TokenKind::CloseParen, TokenKind::Percent]);
        assert_tokens(",%", &[TokenKind::Comma, TokenKind::Percent]);
        assert_tokens(":%", &[TokenKind::Colon, TokenKind::Percent]);
        assert_tokens("<%", &[TokenKind::LessThan, TokenKind::Percent]);
        assert_tokens("=%", &[TokenKind::Equals, TokenKind::Percent]);
        assert_tokens(">%", &[TokenKind::GreaterThan, TokenKind::Percent]);
        assert_tokens("[%", &[TokenKind::OpenBracket, TokenKind::Percent]);
        assert_tokens("]%", &[TokenKind::CloseBracket, TokenKind::Percent]);
        assert_tokens("{%", &[TokenKind::OpenBrace, TokenKind::Percent]);
        assert_tokens("}%", &[TokenKind::CloseBrace, TokenKind::Percent]);
    }
}
