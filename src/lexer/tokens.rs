use lazy_static::lazy_static;
use std::{collections::BTreeMap, fmt::Display};

use crate::SourcePosition;

/// Maximum length of an identifier.
pub const MAX_ID_LENGTH: usize = 32;

lazy_static! {
    /// Reserved words ordered by spelling.
    pub static ref RESERVED_LOOKUP: BTreeMap<&'static str, TokenKind> = {
        let mut map = BTreeMap::new();
        map.insert("and", TokenKind::And);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("else", TokenKind::Else);
        map.insert("elsif", TokenKind::Elsif);
        map.insert("exit", TokenKind::Exit);
        map.insert("false", TokenKind::False);
        map.insert("for", TokenKind::For);
        map.insert("func", TokenKind::Func);
        map.insert("if", TokenKind::If);
        map.insert("in", TokenKind::In);
        map.insert("or", TokenKind::Or);
        map.insert("print", TokenKind::Print);
        map.insert("println", TokenKind::Println);
        map.insert("range", TokenKind::Range);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::True);
        map.insert("void", TokenKind::Void);
        map.insert("while", TokenKind::While);
        map
    };
}

/// Classifies a word, returning the reserved kind for its spelling if it
/// has one.
pub fn lookup_reserved(spelling: &str) -> Option<TokenKind> {
    RESERVED_LOOKUP.get(spelling).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,

    // Literals
    Boolean,
    Character,
    String,
    Number,
    Decimal,
    Array, // []

    // Reserved
    And,
    Break,
    Continue,
    Else,
    Elsif,
    Exit,
    False,
    For,
    Func,
    If,
    In,
    Or,
    Print,
    Println,
    Range,
    Return,
    True,
    Void,
    While,

    Assign,        // =
    Equals,        // ==
    GreaterEquals, // >=
    Greater,       // >
    LessEquals,    // <=
    Less,          // <
    NotEquals,     // !=
    Not,           // !

    Minus,
    Plus,
    Div,
    Mul,
    Mod,

    Dot,
    OpenBracket,
    CloseBracket,
    Comma,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Arrow, // =>
    At,
}

impl TokenKind {
    /// Human readable name used in diagnostics and token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end-of-file",
            TokenKind::Identifier => "identifier",
            TokenKind::Boolean => "boolean",
            TokenKind::Character => "character",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Decimal => "decimal",
            TokenKind::Array => "array",
            TokenKind::And => "'and'",
            TokenKind::Break => "'break'",
            TokenKind::Continue => "'continue'",
            TokenKind::Else => "'else'",
            TokenKind::Elsif => "'elsif'",
            TokenKind::Exit => "'exit'",
            TokenKind::False => "'false'",
            TokenKind::For => "'for'",
            TokenKind::Func => "'func'",
            TokenKind::If => "'if'",
            TokenKind::In => "'in'",
            TokenKind::Or => "'or'",
            TokenKind::Print => "'print'",
            TokenKind::Println => "'println'",
            TokenKind::Range => "'range'",
            TokenKind::Return => "'return'",
            TokenKind::True => "'true'",
            TokenKind::Void => "'void'",
            TokenKind::While => "'while'",
            TokenKind::Assign => "'='",
            TokenKind::Equals => "'=='",
            TokenKind::GreaterEquals => "'>='",
            TokenKind::Greater => "'>'",
            TokenKind::LessEquals => "'<='",
            TokenKind::Less => "'<'",
            TokenKind::NotEquals => "'!='",
            TokenKind::Not => "'!'",
            TokenKind::Minus => "'-'",
            TokenKind::Plus => "'+'",
            TokenKind::Div => "'/'",
            TokenKind::Mul => "'*'",
            TokenKind::Mod => "'%'",
            TokenKind::Dot => "'.'",
            TokenKind::OpenBracket => "'['",
            TokenKind::CloseBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::OpenCurly => "'{'",
            TokenKind::CloseCurly => "'}'",
            TokenKind::Arrow => "'=>'",
            TokenKind::At => "'@'",
        }
    }

    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Else
                | TokenKind::Elsif
                | TokenKind::Exit
                | TokenKind::False
                | TokenKind::For
                | TokenKind::Func
                | TokenKind::If
                | TokenKind::In
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Println
                | TokenKind::Range
                | TokenKind::Return
                | TokenKind::True
                | TokenKind::Void
                | TokenKind::While
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Payload carried by a token. Which variant is present depends on the kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Identifier(String),
    String(String),
    Character(u8),
    Integer(i32),
    Decimal(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub position: SourcePosition,
}

impl Display for Token {
    /// Identifiers print as their spelling, reserved words as `[spelling]`,
    /// literals as their value and everything else as the kind name.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            TokenValue::Identifier(spelling) if self.kind == TokenKind::Identifier => {
                write!(f, "{}", spelling)
            }
            TokenValue::Identifier(spelling) => write!(f, "[{}]", spelling),
            TokenValue::String(text) => write!(f, "{}", text),
            TokenValue::Character(c) => write!(f, "{}", *c as char),
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::Decimal(value) => write!(f, "{}", value),
            TokenValue::None => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    pub fn spelling(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Identifier(spelling) => Some(spelling),
            _ => None,
        }
    }

    pub fn integer(&self) -> Option<i32> {
        match self.value {
            TokenValue::Integer(value) => Some(value),
            _ => None,
        }
    }
}
