//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused
//! components:
//! - `core` - Main Lexer struct and token dispatch
//! - `operator` - One- and two-character operator lexing
//! - `number` - Binary, hex, decimal, and float literal lexing
//! - `string` - Single-quoted string literal lexing with escapes
//! - `identifier` - Name lexing
//! - `color` - `#RRGGBB` color literal lexing

mod color;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
pub use self::identifier::MAX_NAME_LEN;
