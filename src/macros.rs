//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SINGLE_TOKEN!` - Consumes one character and creates a payload-free token
//!
//! These macros reduce boilerplate in the dispatch of the lexer.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's payload
/// * `$position` - Where the lexeme starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, TokenValue::Integer(42), start);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Consumes the current character of the lexer's source and creates a
/// token of the given kind without payload.
///
/// # Example
///
/// ```ignore
/// b'+' => MK_SINGLE_TOKEN!(self, TokenKind::Plus, start),
/// ```
#[macro_export]
macro_rules! MK_SINGLE_TOKEN {
    ($lexer:expr, $kind:expr, $position:expr) => {{
        $lexer.source.advance();
        $crate::MK_TOKEN!($kind, $crate::lexer::tokens::TokenValue::None, $position)
    }};
}
