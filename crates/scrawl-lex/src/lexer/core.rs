//! Core lexer implementation.
//!
//! This module contains the main `Lexer` struct and the token
//! dispatcher: given the first character of a token it decides which
//! sub-scanner takes over.

use scrawl_util::Span;

use crate::cursor::Cursor;
use crate::error::LexResult;
use crate::token::{Token, TokenKind};

/// Lexer for the Scrawl drawing language.
///
/// The lexer produces one token per [`next_token`](Lexer::next_token)
/// call, leaving the cursor positioned at the first character of the
/// following token. Tokens are matched greedily (longest match) with at
/// most one character of pushback. Once the end of input is reached,
/// every further call returns the end-of-input token again.
///
/// # Example
///
/// ```
/// use scrawl_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("pen: #FF0000\n");
/// let token = lexer.next_token().unwrap();
/// assert_eq!(token.kind, TokenKind::Name);
/// assert_eq!(token.text, "pen");
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting byte offset of the current token.
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source.
    ///
    /// This is the main entry point for tokenization. Each call starts
    /// fresh: the first character read decides which sub-scanner
    /// handles the rest of the token.
    ///
    /// # Errors
    ///
    /// A malformed literal (see [`LexError`](crate::LexError)) aborts
    /// the call. The cursor keeps its position, so a caller may keep
    /// lexing after an error, but the aborted token is lost.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let first = match self.cursor.next_char() {
            Some(c) => c,
            None => return Ok(Token::fixed(TokenKind::EndOfInput)),
        };

        match first {
            '\n' => Ok(Token::fixed(TokenKind::Newline)),
            '\r' => {
                // \r\n collapses to one newline; a lone \r stands alone
                if let Some(c) = self.cursor.next_char() {
                    if c != '\n' {
                        self.cursor.put_back(c);
                    }
                }
                Ok(Token::fixed(TokenKind::Newline))
            }
            '#' => self.lex_color(),
            '\'' => self.lex_string(),
            '%' => Ok(self.lex_percent()),
            '(' => Ok(Token::fixed(TokenKind::OpenParen)),
            ')' => Ok(Token::fixed(TokenKind::CloseParen)),
            '*' => Ok(self.lex_star()),
            '+' => Ok(self.lex_plus()),
            ',' => Ok(Token::fixed(TokenKind::Comma)),
            '-' => Ok(self.lex_minus()),
            '/' => Ok(self.lex_slash()),
            ':' => Ok(Token::fixed(TokenKind::Colon)),
            '<' => Ok(Token::fixed(TokenKind::LessThan)),
            '=' => Ok(Token::fixed(TokenKind::Equals)),
            '>' => Ok(Token::fixed(TokenKind::GreaterThan)),
            '[' => Ok(Token::fixed(TokenKind::OpenBracket)),
            ']' => Ok(Token::fixed(TokenKind::CloseBracket)),
            '{' => Ok(Token::fixed(TokenKind::OpenBrace)),
            '}' => Ok(Token::fixed(TokenKind::CloseBrace)),
            '0' => self.lex_zero(),
            '1'..='9' => self.lex_decimal_number(first),
            c if c.is_ascii_alphabetic() => self.lex_name(c),
            _ => Ok(Token::fixed(TokenKind::Undefined)),
        }
    }

    /// Span of the token currently being scanned, from its start to the
    /// cursor's position.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::EndOfInput => None,
            other => Some(other),
        }
    }
}
