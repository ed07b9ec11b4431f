//! Error types and diagnostic reporting for the lexer.
//!
//! This module defines:
//!
//! - The lexer error type, carrying the source name and the position the
//!   problem is reported at
//! - The diagnostic reporter that renders errors and warnings as
//!   `<source>: <line>:<column> Error: <message>`

pub mod errors;
pub mod reporter;

#[cfg(test)]
mod tests;
