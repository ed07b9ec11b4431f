use std::{fmt::Display, io::Write};

use crate::{get_line, SourcePosition};

use super::errors::{Error, ErrorTip};

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Errors end the run, warnings are informational.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Severity::Error)
    }

    fn colour(&self) -> &'static str {
        match self {
            Severity::Error => RED,
            Severity::Warning => YELLOW,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
        }
    }
}

/// A single message about a source file, ready to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub source_name: String,
    pub position: Option<SourcePosition>,
    pub message: String,
}

impl Diagnostic {
    pub fn error(source_name: &str, position: Option<SourcePosition>, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            source_name: source_name.to_string(),
            position,
            message: message.into(),
        }
    }

    pub fn warning(source_name: &str, position: Option<SourcePosition>, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            source_name: source_name.to_string(),
            position,
            message: message.into(),
        }
    }
}

impl From<&Error> for Diagnostic {
    fn from(error: &Error) -> Self {
        Diagnostic::error(
            error.get_source_name(),
            error.get_position(),
            error.get_kind().to_string(),
        )
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(position) => write!(
                f,
                "{}: {} {}: {}",
                self.source_name, position, self.severity, self.message
            ),
            None => write!(f, "{}: {}: {}", self.source_name, self.severity, self.message),
        }
    }
}

/// Writes diagnostics to an output stream, optionally with ANSI colours and
/// an excerpt of the offending line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    colour: bool,
}

impl Reporter {
    pub fn new(colour: bool) -> Self {
        Reporter { colour }
    }

    pub fn report<W: Write>(&self, out: &mut W, diagnostic: &Diagnostic) -> std::io::Result<()> {
        let prefix = match diagnostic.position {
            Some(position) => format!("{}: {} ", diagnostic.source_name, position),
            None => format!("{}: ", diagnostic.source_name),
        };

        if self.colour {
            writeln!(
                out,
                "{}{}{}{}: {}",
                prefix,
                diagnostic.severity.colour(),
                diagnostic.severity,
                RESET,
                diagnostic.message
            )
        } else {
            writeln!(out, "{}{}: {}", prefix, diagnostic.severity, diagnostic.message)
        }
    }

    /// Reports a lexer error, followed by the source line it points at and a
    /// caret under the column when `content` is available.
    ///
    /// ```text
    /// main.dm: 2:9 Error: Illegal character '#' (ASCII #35) found
    ///   |
    /// 2 | let a = #
    ///   | --------^
    /// ```
    pub fn report_error<W: Write>(
        &self,
        out: &mut W,
        error: &Error,
        content: Option<&str>,
    ) -> std::io::Result<()> {
        self.report(out, &Diagnostic::from(error))?;

        if let (Some(position), Some(content)) = (error.get_position(), content) {
            if let Some(line_text) = get_line(content, position.line) {
                let line_string = position.line.to_string();
                let padding = line_string.len() + 2;
                // Tabs are copied so the caret lines up with the excerpt.
                let lead: String = line_text
                    .chars()
                    .take(position.column.saturating_sub(1) as usize)
                    .map(|c| if c == '\t' { '\t' } else { '-' })
                    .collect();

                writeln!(out, "{:>padding$}", "|")?;
                writeln!(out, "{} | {}", line_string, line_text)?;
                writeln!(out, "{:>padding$} {}^", "|", lead)?;
            }
        }

        if let ErrorTip::Suggestion(tip) = error.get_tip() {
            writeln!(out, "tip: {}", tip)?;
        }

        Ok(())
    }
}
