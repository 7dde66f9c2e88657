//! Diagnostic records for the Structura front end.
//!
//! Two independent families:
//! - [`LexError`]: a lexical problem. The scanner never raises these; it emits an error token carrying a
//!   [`LexErrorKind`] and keeps going. [`crate::lexer::lexical_errors`] lifts them back out of a token sequence.
//! - [`SyntaxError`]: a structural problem found by the parser. Accumulated in encounter (source) order, never
//!   deduplicated.
//!
//! Both implement [`miette::Diagnostic`] so a front end can render them against the source text.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::{Position, Span};
use crate::lexer::Token;

/// Placeholder used as the "found" text when the offending token is the end-of-input sentinel.
pub const EOF_PLACEHOLDER: &str = "EOF";

// ============================================================================
// Lexical errors
// ============================================================================

/// The kind of lexical error. `Display` is the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("Unterminated string")]
    UnterminatedString,

    #[error("Unterminated multi-line comment")]
    UnterminatedComment,

    #[error("Invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
}

/// A lexical error lifted out of an error token.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("Lexical error at line {}, column {}: {kind}", .position.line, .position.column)]
#[diagnostic(code(structura::lex))]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: Position,
    #[label("here")]
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: Position, span: Span) -> Self {
        Self { kind, position, span }
    }

    /// Lift the payload of an error token; `None` for any other token.
    pub fn from_token(token: &Token) -> Option<Self> {
        token
            .error()
            .map(|kind| Self::new(kind.clone(), token.position(), token.span()))
    }
}

// ============================================================================
// Syntax errors
// ============================================================================

/// A structural defect reported by the parser.
///
/// ## Notes
/// - `found` is the offending token's lexeme, or [`EOF_PLACEHOLDER`] at end of input.
/// - Renders as `Error at line L, column C: MESSAGE (expected: EXPECTED, found: FOUND)`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error(
    "Error at line {}, column {}: {message} (expected: {expected}, found: {found})",
    .position.line,
    .position.column
)]
#[diagnostic(code(structura::syntax))]
pub struct SyntaxError {
    pub message: String,
    pub position: Position,
    pub expected: String,
    pub found: String,
    #[label("{expected} expected here")]
    pub span: Span,
}

impl SyntaxError {
    pub fn new(
        message: impl Into<String>,
        position: Position,
        expected: impl Into<String>,
        found: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            message: message.into(),
            position,
            expected: expected.into(),
            found: found.into(),
            span,
        }
    }

    /// Build a diagnostic positioned at `token`.
    pub fn at_token(message: impl Into<String>, token: &Token, expected: impl Into<String>) -> Self {
        Self::new(message, token.position(), expected, found_text(token), token.span())
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}

/// Text reported as "found" for a token.
pub fn found_text(token: &Token) -> String {
    if token.is_eof() {
        EOF_PLACEHOLDER.to_string()
    } else {
        token.lexeme().to_string()
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a diagnostic against its source text (file name, code, labelled snippet), for terminal output.
pub fn format_error<E>(file_name: &str, source: &str, err: &E) -> String
where
    E: Diagnostic + Clone + Send + Sync + 'static,
{
    let report = miette::Report::new(err.clone())
        .with_source_code(miette::NamedSource::new(file_name, source.to_string()));
    let handler = miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor());

    let mut out = String::new();
    match handler.render_report(&mut out, &*report) {
        Ok(()) => out,
        // Rendering only fails if the label points outside the source; fall back to the one-line form.
        Err(_) => format!("{file_name}: {err}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Token, TokenKind};

    #[test]
    fn test_syntax_error_display() {
        let err = SyntaxError::new("Missing semicolon", Position::new(3, 14), "';'", ")", Span::new(40, 41));
        insta::assert_snapshot!(
            err.to_string(),
            @"Error at line 3, column 14: Missing semicolon (expected: ';', found: ))"
        );
    }

    #[test]
    fn test_found_placeholder_at_eof() {
        let eof = Token::eof(Position::new(7, 2), 90);
        let err = SyntaxError::at_token("Unexpected end of input", &eof, "')'");
        assert_eq!(err.found, "EOF");
        assert_eq!(err.line(), 7);
        assert_eq!(err.column(), 2);
    }

    #[test]
    fn test_lex_error_messages() {
        assert_eq!(
            LexErrorKind::UnexpectedCharacter('&').to_string(),
            "Unexpected character '&'"
        );
        assert_eq!(LexErrorKind::InvalidEscape('q').to_string(), "Invalid escape sequence '\\q'");
        assert_eq!(LexErrorKind::UnterminatedComment.to_string(), "Unterminated multi-line comment");
    }

    #[test]
    fn test_lex_error_from_token() {
        let token = Token::new(
            TokenKind::Error(LexErrorKind::UnterminatedString),
            "\"abc",
            Position::new(2, 5),
            Span::new(10, 14),
        );
        let err = LexError::from_token(&token).expect("error token");
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!(err.position, Position::new(2, 5));
        assert_eq!(err.to_string(), "Lexical error at line 2, column 5: Unterminated string");

        let ident = Token::new(TokenKind::Ident, "x", Position::new(1, 1), Span::new(0, 1));
        assert!(LexError::from_token(&ident).is_none());
    }

    #[test]
    fn test_format_error_includes_file_message_and_snippet() {
        let source = "structure Foo (\n  int x\n)\n";
        let err = SyntaxError::new("Expected ';' after declaration", Position::new(3, 1), "';'", ")", Span::new(24, 25));
        let rendered = format_error("foo.sta", source, &err);

        assert!(rendered.contains("foo.sta"));
        assert!(rendered.contains("Expected ';' after declaration"));
        assert!(rendered.contains("structura::syntax"));
        assert!(rendered.contains("';' expected here"));
    }
}
