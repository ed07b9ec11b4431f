use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::SourcePosition;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<SourcePosition>,
    source_name: Rc<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: SourcePosition, source_name: Rc<String>) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
            source_name,
        }
    }

    /// An error that is not tied to a place in the source, such as a file
    /// that could not be opened.
    pub fn unpositioned(error_impl: ErrorImpl, source_name: Rc<String>) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
            source_name,
        }
    }

    pub fn get_position(&self) -> Option<SourcePosition> {
        self.position
    }

    pub fn get_source_name(&self) -> &str {
        &self.source_name
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::FileOpenError { .. } => "FileOpenError",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::IdentifierTooLong { .. } => "IdentifierTooLong",
            ErrorImpl::NumericOverflow { .. } => "NumericOverflow",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::FileOpenError { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedComment => ErrorTip::Suggestion(String::from(
                "Every `/-` needs a matching `-/`, including nested comments",
            )),
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::IdentifierTooLong { max, .. } => ErrorTip::Suggestion(format!(
                "Identifiers may be at most {} characters long",
                max
            )),
            ErrorImpl::NumericOverflow { .. } => ErrorTip::Suggestion(format!(
                "Number literals may not be larger than {}",
                i32::MAX
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(position) => write!(
                f,
                "{}: {} Error: {}",
                self.source_name, position, self.internal_error
            ),
            None => write!(f, "{}: Error: {}", self.source_name, self.internal_error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("could not open source file {path:?}: {reason}")]
    FileOpenError { path: String, reason: String },
    #[error("Comment not closed")]
    UnterminatedComment,
    #[error("Illegal character '{character}' (ASCII #{code}) found")]
    IllegalCharacter { character: char, code: u8 },
    #[error("Identifier {identifier:?} is longer than {max} characters")]
    IdentifierTooLong { identifier: String, max: usize },
    #[error("Number {literal} is too large")]
    NumericOverflow { literal: String },
}
