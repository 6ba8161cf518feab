//! Edge case tests for scrawl-lex
