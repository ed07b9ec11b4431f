use std::{fs, io, path::Path};

use tracing::trace;

use crate::SourcePosition;

/// Sequential single-byte reader over a source file.
///
/// The reader starts *before* the first byte: call [`Source::advance`] once
/// before looking at [`Source::current`].
#[derive(Debug, Clone)]
pub struct Source {
    bytes: Vec<u8>,
    // Index of the next unread byte.
    next: usize,
    current: Option<u8>,
    position: SourcePosition,
}

impl Source {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Source {
            bytes: bytes.into(),
            next: 0,
            current: None,
            position: SourcePosition::start(),
        }
    }

    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        trace!(path = %path.as_ref().display(), len = bytes.len(), "read source file");
        Ok(Source::new(bytes))
    }

    /// Moves to the next byte. Past the end of input this does nothing.
    pub fn advance(&mut self) {
        if self.next >= self.bytes.len() {
            if self.current.is_some() {
                self.move_past(self.current);
                self.current = None;
            }
            return;
        }

        let last = self.current;
        self.move_past(last);
        self.current = Some(self.bytes[self.next]);
        self.next += 1;
    }

    fn move_past(&mut self, last: Option<u8>) {
        match last {
            // `\r\n` is a single line break, counted at the `\n`.
            Some(b'\r') if self.bytes.get(self.next) == Some(&b'\n') => self.position.column += 1,
            Some(c) if is_new_line(c) => {
                self.position.line += 1;
                self.position.column = 1;
            }
            _ => self.position.column += 1,
        }
    }

    pub fn current(&self) -> Option<u8> {
        self.current
    }

    /// The byte after the current one, without consuming anything.
    pub fn peek(&self) -> Option<u8> {
        if self.current.is_none() {
            return None;
        }
        self.bytes.get(self.next).copied()
    }

    pub fn at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Position of the current byte.
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

pub fn is_new_line(c: u8) -> bool {
    c == b'\n' || c == b'\r'
}
