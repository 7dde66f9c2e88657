//! Token types for the Structura scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for delimiters
//!
//! ## Notes
//! - The lexical [`Category`] (and its legacy numeric code) is derived from the kind, never stored separately, so a
//!   token can't disagree with the registries.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::{Position, Span};
use crate::diagnostics::LexErrorKind;
use structura_core::lang::categories::Category;
use structura_core::lang::keywords::{self, KeywordId};
use structura_core::lang::operators::{self, OperatorId};
use structura_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Integer,
    Decimal,
    /// String literal; carries the delimiter it was written with (`"` or `'`).
    Str(char),

    // ========== Special ==========
    /// A lexical error standing in for the span it could not recognize.
    Error(LexErrorKind),
    Eof,
}

impl TokenKind {
    /// Lexical category for this kind.
    pub fn category(&self) -> Category {
        match self {
            TokenKind::Keyword(id) => keywords::category(*id),
            TokenKind::Operator(id) => operators::category(*id),
            TokenKind::Punctuation(id) => punctuation::category(*id),
            TokenKind::Ident => Category::Identifier,
            TokenKind::Integer => Category::IntegerLiteral,
            TokenKind::Decimal => Category::DecimalLiteral,
            TokenKind::Str(_) => Category::StringLiteral,
            TokenKind::Error(_) => Category::Error,
            TokenKind::Eof => Category::Eof,
        }
    }
}

/// A scanned token: kind, text, 1-based position and byte span.
///
/// Tokens are immutable once the scanner emits them.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    position: Position,
    span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
            span,
        }
    }

    /// The end-of-input sentinel (empty lexeme).
    pub fn eof(position: Position, offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", position, Span::new(offset, offset))
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Legacy numeric code of this token's category.
    pub fn code(&self) -> u16 {
        self.category().code()
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Lexical diagnostic carried by an error token.
    pub fn error(&self) -> Option<&LexErrorKind> {
        match &self.kind {
            TokenKind::Error(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error(_))
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
