use std::{path::Path, rc::Rc};

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    SourcePosition, MK_SINGLE_TOKEN, MK_TOKEN,
};

use super::{
    source::Source,
    tokens::{lookup_reserved, Token, TokenKind, TokenValue, MAX_ID_LENGTH},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `// ...` up to the end of the line
    Single,
    /// `/- ... -/`, may nest
    Multi,
}

/// Produces one token per call from a [`Source`].
///
/// After the first error the lexer stops: every later call to
/// [`Lexer::next_token`] returns that same error.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: Source,
    file: Rc<String>,
    failed: Option<Error>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: Source, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        debug!(file = %file_name, bytes = source.bytes().len(), "starting lexer");

        let mut lexer = Lexer {
            source,
            file: file_name,
            failed: None,
            finished: false,
        };
        lexer.source.advance();
        lexer
    }

    /// Opens the file at `path`. Diagnostics use `name` if given, otherwise
    /// the file name of `path`.
    pub fn open(path: impl AsRef<Path>, name: Option<String>) -> Result<Lexer, Error> {
        let path = path.as_ref();
        let name = name.unwrap_or_else(|| {
            path.file_name()
                .map(|file_name| file_name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned())
        });

        match Source::open(path) {
            Ok(source) => Ok(Lexer::new(source, Some(name))),
            Err(err) => Err(Error::unpositioned(
                ErrorImpl::FileOpenError {
                    path: path.to_string_lossy().into_owned(),
                    reason: err.to_string(),
                },
                Rc::new(name),
            )),
        }
    }

    pub fn source_bytes(&self) -> &[u8] {
        self.source.bytes()
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        if let Some(error) = &self.failed {
            return Err(error.clone());
        }

        match self.scan_token() {
            Ok(token) => {
                trace!(kind = %token.kind, position = %token.position, "token");
                Ok(token)
            }
            Err(error) => {
                debug!(error = error.get_error_name(), "lexer stopped");
                self.failed = Some(error.clone());
                Err(error)
            }
        }
    }

    fn error(&self, error_impl: ErrorImpl, position: SourcePosition) -> Error {
        Error::new(error_impl, position, Rc::clone(&self.file))
    }

    fn scan_token(&mut self) -> Result<Token, Error> {
        self.skip_whitespace_and_comments()?;

        let start = self.source.position();
        let c = match self.source.current() {
            Some(c) => c,
            None => return Ok(MK_TOKEN!(TokenKind::EOF, TokenValue::None, start)),
        };

        if c.is_ascii_alphabetic() || c == b'_' {
            return self.scan_word();
        }

        if c.is_ascii_digit() {
            return self.scan_number();
        }

        let token = match c {
            b'=' => {
                self.source.advance();
                match self.source.current() {
                    Some(b'>') => MK_SINGLE_TOKEN!(self, TokenKind::Arrow, start),
                    Some(b'=') => MK_SINGLE_TOKEN!(self, TokenKind::Equals, start),
                    _ => MK_TOKEN!(TokenKind::Assign, TokenValue::None, start),
                }
            }
            b'>' => self.composite(b'=', TokenKind::GreaterEquals, TokenKind::Greater, start),
            b'<' => self.composite(b'=', TokenKind::LessEquals, TokenKind::Less, start),
            b'!' => self.composite(b'=', TokenKind::NotEquals, TokenKind::Not, start),
            b'[' => self.composite(b']', TokenKind::Array, TokenKind::OpenBracket, start),
            // Comment openers were consumed above, so this is division.
            b'/' => MK_SINGLE_TOKEN!(self, TokenKind::Div, start),
            b'-' => MK_SINGLE_TOKEN!(self, TokenKind::Minus, start),
            b'+' => MK_SINGLE_TOKEN!(self, TokenKind::Plus, start),
            b'*' => MK_SINGLE_TOKEN!(self, TokenKind::Mul, start),
            b'%' => MK_SINGLE_TOKEN!(self, TokenKind::Mod, start),
            b'.' => MK_SINGLE_TOKEN!(self, TokenKind::Dot, start),
            b']' => MK_SINGLE_TOKEN!(self, TokenKind::CloseBracket, start),
            b',' => MK_SINGLE_TOKEN!(self, TokenKind::Comma, start),
            b'(' => MK_SINGLE_TOKEN!(self, TokenKind::OpenParen, start),
            b')' => MK_SINGLE_TOKEN!(self, TokenKind::CloseParen, start),
            b'{' => MK_SINGLE_TOKEN!(self, TokenKind::OpenCurly, start),
            b'}' => MK_SINGLE_TOKEN!(self, TokenKind::CloseCurly, start),
            b'@' => MK_SINGLE_TOKEN!(self, TokenKind::At, start),
            _ => {
                return Err(self.error(
                    ErrorImpl::IllegalCharacter {
                        character: c as char,
                        code: c,
                    },
                    start,
                ))
            }
        };

        Ok(token)
    }

    /// Consumes the current character, then `second` as well if it follows.
    fn composite(
        &mut self,
        second: u8,
        joined: TokenKind,
        single: TokenKind,
        start: SourcePosition,
    ) -> Token {
        self.source.advance();
        if self.source.current() == Some(second) {
            MK_SINGLE_TOKEN!(self, joined, start)
        } else {
            MK_TOKEN!(single, TokenValue::None, start)
        }
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), Error> {
        loop {
            while self.source.current().is_some_and(is_whitespace) {
                self.source.advance();
            }

            match (self.source.current(), self.source.peek()) {
                (Some(b'/'), Some(b'/')) => self.skip_comment(CommentKind::Single)?,
                (Some(b'/'), Some(b'-')) => self.skip_comment(CommentKind::Multi)?,
                _ => return Ok(()),
            }
        }
    }

    /// Skips a comment whose opening marker starts at the current character.
    pub fn skip_comment(&mut self, kind: CommentKind) -> Result<(), Error> {
        let start = self.source.position();

        match kind {
            CommentKind::Single => {
                while self.source.current().is_some_and(|c| c != b'\n' && c != b'\r') {
                    self.source.advance();
                }
            }
            CommentKind::Multi => {
                self.source.advance();
                self.source.advance();
                // Openers still waiting for their `-/`, innermost last.
                let mut open = vec![start];

                while let Some(&innermost) = open.last() {
                    match (self.source.current(), self.source.peek()) {
                        (None, _) => {
                            return Err(self.error(ErrorImpl::UnterminatedComment, innermost));
                        }
                        (Some(b'-'), Some(b'/')) => {
                            self.source.advance();
                            self.source.advance();
                            open.pop();
                        }
                        (Some(b'/'), Some(b'-')) => {
                            open.push(self.source.position());
                            self.source.advance();
                            self.source.advance();
                        }
                        _ => self.source.advance(),
                    }
                }
            }
        }

        trace!(?kind, from = %start, to = %self.source.position(), "skipped comment");
        Ok(())
    }

    /// Scans an identifier or reserved word starting at the current
    /// character.
    pub fn scan_word(&mut self) -> Result<Token, Error> {
        let start = self.source.position();
        let mut spelling = String::new();

        while let Some(c) = self.source.current() {
            if !(c.is_ascii_alphanumeric() || c == b'_') {
                break;
            }
            spelling.push(c as char);
            self.source.advance();
        }

        if spelling.len() > MAX_ID_LENGTH {
            return Err(self.error(
                ErrorImpl::IdentifierTooLong {
                    identifier: spelling,
                    max: MAX_ID_LENGTH,
                },
                start,
            ));
        }

        let kind = lookup_reserved(&spelling).unwrap_or(TokenKind::Identifier);
        Ok(MK_TOKEN!(kind, TokenValue::Identifier(spelling), start))
    }

    /// Scans a decimal integer literal starting at the current character.
    pub fn scan_number(&mut self) -> Result<Token, Error> {
        let start = self.source.position();
        let mut literal = String::new();
        let mut value: i32 = 0;
        let mut overflowed = false;

        while let Some(c) = self.source.current() {
            if !c.is_ascii_digit() {
                break;
            }

            let digit = (c - b'0') as i32;
            if !overflowed && value > (i32::MAX - digit) / 10 {
                overflowed = true;
            }
            if !overflowed {
                value = value * 10 + digit;
            }

            literal.push(c as char);
            self.source.advance();
        }

        if overflowed {
            return Err(self.error(ErrorImpl::NumericOverflow { literal }, start));
        }

        Ok(MK_TOKEN!(TokenKind::Number, TokenValue::Integer(value), start))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    /// Yields tokens up to, not including, the end of input. Stops after the
    /// first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.kind == TokenKind::EOF => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    collect_tokens(Lexer::new(Source::new(source), file))
}

pub fn tokenize_file(path: impl AsRef<Path>) -> Result<Vec<Token>, Error> {
    collect_tokens(Lexer::open(path, None)?)
}

fn collect_tokens(mut lex: Lexer) -> Result<Vec<Token>, Error> {
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
