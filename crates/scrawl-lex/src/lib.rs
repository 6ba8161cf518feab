//! scrawl-lex - Lexical Analyzer for the Scrawl Drawing Language
//!
//! This crate provides a complete lexer (tokenizer) for the Scrawl
//! drawing language. It transforms source code into a stream of tokens
//! that can be consumed by the parser.
//!
//! # Overview
//!
//! The lexer works one token per call: each call to
//! [`Lexer::next_token`] reads exactly one token and leaves the cursor
//! at the first character of the next one. Tokens are matched greedily
//! (longest match) with at most one character of pushback. There is no
//! whitespace skipping; newlines are significant and every other
//! unrecognized character becomes an [`TokenKind::Undefined`] token the
//! parser can discard or report.
//!
//! # Example Usage
//!
//! ```
//! use scrawl_lex::{Lexer, TokenKind};
//!
//! let source = "pen:#FF0000\n";
//! let mut lexer = Lexer::new(source);
//!
//! let token = lexer.next_token().unwrap();
//! assert_eq!(token.kind, TokenKind::Name);
//! assert_eq!(token.text, "pen");
//!
//! // Or iterate until end of input
//! let tokens: Vec<_> = Lexer::new(source).collect::<Result<_, _>>().unwrap();
//! assert_eq!(tokens.len(), 4);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and literal value decoding
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Hex digit and codepoint utilities
//! - [`error`] - Lexical error types
//!
//! # Token Categories
//!
//! ## Literals
//!
//! - **Integer**: `42`, `1_000`, `0xFF`, `0b1010`
//! - **Float**: `3.14`, `1e10`, `2.5E6`
//! - **Color**: `#FF0000`
//! - **String**: `'hello'`, `'a\nb'`, `'A'`
//! - **Name**: `pen`, `Line_2` (16 characters max)
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Assignment**: `=`, `+=`, `-=`, `*=`, `/=`, `%=`
//! - **Step**: `++`, `--`
//! - **Comparison**: `<`, `>`
//!
//! ## Delimiters
//!
//! - **Grouping**: `()`, `{}`, `[]`
//! - **Separation**: `,`, `:`
//!
//! ## Special
//!
//! - **Newline**: `\n`, `\r`, and `\r\n`, all canonicalized to `\n`
//! - **EndOfInput**: end of input marker, repeated on every further call
//! - **Undefined**: a single unrecognized character

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::{Lexer, MAX_NAME_LEN};
pub use token::{Token, TokenKind};
pub use unicode::{codepoint_to_char, hex_digit_to_value, is_digit_in_base};
