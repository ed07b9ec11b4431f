//! Lexical analysis for Dium source files.
//!
//! This module contains the lexer (tokenizer) that converts source bytes
//! into a stream of tokens. It handles:
//!
//! - Reading the source one byte at a time while tracking line and column
//! - Skipping whitespace, `//` line comments and nested `/- ... -/` comments
//! - Recognition of reserved words, identifiers, integers and operators
//! - Identifier length and integer overflow limits

pub mod lexer;
pub mod source;
pub mod tokens;
