#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod errors;
pub mod lexer;
pub mod macros;

/// Line and column of a character in a source file. Both are 1-based once
/// the first character has been read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
}

impl SourcePosition {
    pub fn new(line: u32, column: u32) -> Self {
        SourcePosition { line, column }
    }

    /// Position before anything has been read.
    pub fn start() -> Self {
        SourcePosition { line: 1, column: 0 }
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        SourcePosition::start()
    }
}

impl Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` in `content`, without its line
/// terminator. Lines break at `\n`, `\r` or `\r\n`, the same way the lexer
/// counts them.
pub fn get_line(content: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    let bytes = content.as_bytes();
    let mut current = 1;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if lexer::source::is_new_line(bytes[i]) {
            if current == line {
                return Some(&content[start..i]);
            }
            if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                i += 1;
            }
            current += 1;
            start = i + 1;
        }
        i += 1;
    }

    if current == line && start < bytes.len() {
        return Some(&content[start..]);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::{get_line, SourcePosition};

    #[test]
    fn test_get_line() {
        let content = "Hello, world!\nsecond\r\n\nTesting { }\n";

        assert_eq!(get_line(content, 1), Some("Hello, world!"));
        assert_eq!(get_line(content, 2), Some("second"));
        assert_eq!(get_line(content, 3), Some(""));
        assert_eq!(get_line(content, 4), Some("Testing { }"));
        assert_eq!(get_line(content, 5), None);
        assert_eq!(get_line(content, 0), None);
    }

    #[test]
    fn test_get_line_carriage_returns() {
        let content = "x\ry\r#\r";

        assert_eq!(get_line(content, 1), Some("x"));
        assert_eq!(get_line(content, 3), Some("#"));
        assert_eq!(get_line(content, 4), None);

        let mixed = "a\r\nb\rc\nd";
        assert_eq!(get_line(mixed, 2), Some("b"));
        assert_eq!(get_line(mixed, 3), Some("c"));
        assert_eq!(get_line(mixed, 4), Some("d"));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(SourcePosition::new(3, 14).to_string(), "3:14");
        assert_eq!(SourcePosition::default(), SourcePosition::new(1, 0));
    }
}
