//! Unit tests for error handling.
//!
//! This module contains tests for error types and diagnostic reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::errors::reporter::{Diagnostic, Reporter, Severity};
use crate::SourcePosition;
use std::rc::Rc;

fn name() -> Rc<String> {
    Rc::new("test.dm".to_string())
}

fn render(reporter: Reporter, diagnostic: &Diagnostic) -> String {
    let mut out = Vec::new();
    reporter.report(&mut out, diagnostic).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            character: '#',
            code: 35,
        },
        SourcePosition::new(1, 10),
        name(),
    );

    assert_eq!(error.get_error_name(), "IllegalCharacter");
    assert_eq!(error.get_source_name(), "test.dm");
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnterminatedComment, SourcePosition::new(4, 2), name());

    assert_eq!(error.get_position(), Some(SourcePosition::new(4, 2)));
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            character: '$',
            code: 36,
        },
        SourcePosition::new(2, 7),
        name(),
    );

    assert_eq!(
        error.to_string(),
        "test.dm: 2:7 Error: Illegal character '$' (ASCII #36) found"
    );
}

#[test]
fn test_file_open_error_has_no_position() {
    let error = Error::unpositioned(
        ErrorImpl::FileOpenError {
            path: "missing.dm".to_string(),
            reason: "No such file or directory".to_string(),
        },
        Rc::new("missing.dm".to_string()),
    );

    assert_eq!(error.get_error_name(), "FileOpenError");
    assert_eq!(error.get_position(), None);
    assert_eq!(
        error.to_string(),
        "missing.dm: Error: could not open source file \"missing.dm\": No such file or directory"
    );
}

#[test]
fn test_error_names() {
    let cases = vec![
        (ErrorImpl::UnterminatedComment, "UnterminatedComment"),
        (
            ErrorImpl::IdentifierTooLong {
                identifier: "a".repeat(33),
                max: 32,
            },
            "IdentifierTooLong",
        ),
        (
            ErrorImpl::NumericOverflow {
                literal: "99999999999".to_string(),
            },
            "NumericOverflow",
        ),
    ];

    for (kind, expected) in cases {
        let error = Error::new(kind, SourcePosition::new(1, 1), name());
        assert_eq!(error.get_error_name(), expected);
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            character: '@',
            code: 64,
        },
        SourcePosition::new(1, 1),
        name(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::IdentifierTooLong {
            identifier: "x".repeat(40),
            max: 32,
        },
        SourcePosition::new(1, 1),
        name(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("32")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_severity() {
    assert!(Severity::Error.is_fatal());
    assert!(!Severity::Warning.is_fatal());
    assert_eq!(Severity::Warning.to_string(), "Warning");
}

#[test]
fn test_diagnostic_from_error() {
    let error = Error::new(ErrorImpl::UnterminatedComment, SourcePosition::new(3, 5), name());
    let diagnostic = Diagnostic::from(&error);

    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.to_string(), "test.dm: 3:5 Error: Comment not closed");
    assert_eq!(diagnostic.to_string(), error.to_string());
}

#[test]
fn test_report_plain() {
    let diagnostic = Diagnostic::warning("test.dm", Some(SourcePosition::new(1, 4)), "unused");

    assert_eq!(
        render(Reporter::new(false), &diagnostic),
        "test.dm: 1:4 Warning: unused\n"
    );
}

#[test]
fn test_report_coloured() {
    let diagnostic = Diagnostic::error("test.dm", None, "boom");

    assert_eq!(
        render(Reporter::new(true), &diagnostic),
        "test.dm: \x1b[31mError\x1b[0m: boom\n"
    );
}

#[test]
fn test_report_error_with_excerpt() {
    let content = "x = 1\nlet a = #\n";
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            character: '#',
            code: 35,
        },
        SourcePosition::new(2, 9),
        name(),
    );

    let mut out = Vec::new();
    Reporter::new(false)
        .report_error(&mut out, &error, Some(content))
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text,
        "test.dm: 2:9 Error: Illegal character '#' (ASCII #35) found\n  |\n2 | let a = #\n  | --------^\n"
    );
}

#[test]
fn test_report_error_with_carriage_return_lines() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            character: '#',
            code: 35,
        },
        SourcePosition::new(3, 1),
        Rc::new("cr.dm".to_string()),
    );

    let mut out = Vec::new();
    Reporter::new(false)
        .report_error(&mut out, &error, Some("x\ry\r#\r"))
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text,
        "cr.dm: 3:1 Error: Illegal character '#' (ASCII #35) found\n  |\n3 | #\n  | ^\n"
    );
}

#[test]
fn test_report_error_caret_after_tabs() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            character: '$',
            code: 36,
        },
        SourcePosition::new(1, 5),
        name(),
    );

    let mut out = Vec::new();
    Reporter::new(false)
        .report_error(&mut out, &error, Some("\t\tx $\n"))
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.ends_with("1 | \t\tx $\n  | \t\t--^\n"));
}
