//! Scanner for the Structura language
//!
//! Handles tokenization including:
//! - Reserved words and identifiers (including Latin-1 accented letters)
//! - Integer and decimal literals (with scientific notation)
//! - Single- and double-quoted string literals with escapes
//! - Operators, delimiters, line comments and nested block comments
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String literal scanning
//! - `numbers` - Numeric literal scanning
//! - `comments` - `/` disambiguation and comment skipping
//!
//! ## Notes
//! - Scanning is total: malformed spans become [`TokenKind::Error`] tokens and the scan continues.
//! - The returned sequence always ends with exactly one [`TokenKind::Eof`] sentinel.

mod comments;
mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::{Position, Span};
use crate::diagnostics::{LexError, LexErrorKind};
use structura_core::lang::operators::OperatorId;
use structura_core::lang::punctuation::PunctuationId;

// ============================================================================
// SCANNER STATE
// ----------------------------------------------------------------------------
// Scanner state diagram (simplified):
//
// [Start] → digit        → [Integer] → '.'digit → [Decimal] → e[+-]digit → [Exponent]
//         → letter / '_' → [Identifier] → keyword lookup
//         → quote        → [String] → '\' → [Escape] → [String]
//         → '/'          → '/' → [LineComment] | '*' → [BlockComment(depth)]
//         → operator     → peek one more for the two-character form
//         → other        → [Error]
// ============================================================================

/// Scanner for Structura source code.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

/// Saved cursor used to undo a speculative read (e.g. a dangling exponent marker).
#[derive(Clone)]
struct Checkpoint<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.scan_token();
        }

        let eof = Token::eof(self.position(), self.current_pos);
        self.tokens.push(eof);
        self.tokens
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn checkpoint(&self) -> Checkpoint<'a> {
        Checkpoint {
            chars: self.chars.clone(),
            current_pos: self.current_pos,
            line: self.line,
            column: self.column,
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint<'a>) {
        self.chars = checkpoint.chars;
        self.current_pos = checkpoint.current_pos;
        self.line = checkpoint.line;
        self.column = checkpoint.column;
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;
        let start_pos = self.position();

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Whitespace (newline bookkeeping happens in `advance`)
            ' ' | '\t' | '\r' | '\n' => {}

            // Operators
            '+' => self.add_op(OperatorId::Plus, start, start_pos),
            '-' => self.add_op(OperatorId::Minus, start, start_pos),
            '*' => self.add_op(OperatorId::Star, start, start_pos),
            '/' => self.scan_slash(start, start_pos),
            '=' => self.operator(start, start_pos, OperatorId::Assign, '=', OperatorId::EqEq),
            '!' => self.operator(start, start_pos, OperatorId::Not, '=', OperatorId::NotEq),
            '<' => self.operator(start, start_pos, OperatorId::Lt, '=', OperatorId::LtEq),
            '>' => self.operator(start, start_pos, OperatorId::Gt, '=', OperatorId::GtEq),
            '&' => self.doubled(c, start, start_pos, OperatorId::AndAnd),
            '|' => self.doubled(c, start, start_pos, OperatorId::OrOr),

            // Delimiters
            '(' => self.add_punct(PunctuationId::LParen, start, start_pos),
            ')' => self.add_punct(PunctuationId::RParen, start, start_pos),
            '[' => self.add_punct(PunctuationId::LBracket, start, start_pos),
            ']' => self.add_punct(PunctuationId::RBracket, start, start_pos),
            ';' => self.add_punct(PunctuationId::Semicolon, start, start_pos),
            ',' => self.add_punct(PunctuationId::Comma, start, start_pos),

            // Strings
            '"' | '\'' => self.scan_string(start, start_pos, c),

            // Numbers
            '0'..='9' => self.scan_number(start, start_pos),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start, start_pos),

            _ => self.add_error(LexErrorKind::UnexpectedCharacter(c), start, start_pos),
        }
    }

    // ========================================================================
    // Token emission
    // ========================================================================

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Emit a token whose lexeme is the raw source text since `start`.
    fn add_token(&mut self, kind: TokenKind, start: usize, start_pos: Position) {
        let lexeme = &self.source[start..self.current_pos];
        self.tokens
            .push(Token::new(kind, lexeme, start_pos, Span::new(start, self.current_pos)));
    }

    fn add_op(&mut self, id: OperatorId, start: usize, start_pos: Position) {
        self.add_token(TokenKind::Operator(id), start, start_pos);
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize, start_pos: Position) {
        self.add_token(TokenKind::Punctuation(id), start, start_pos);
    }

    fn add_error(&mut self, kind: LexErrorKind, start: usize, start_pos: Position) {
        self.add_token(TokenKind::Error(kind), start, start_pos);
    }

    /// Emit the two-character operator if `second` follows, otherwise the simple one.
    fn operator(&mut self, start: usize, start_pos: Position, simple: OperatorId, second: char, long: OperatorId) {
        if self.match_char(second) {
            self.add_op(long, start, start_pos);
        } else {
            self.add_op(simple, start, start_pos);
        }
    }

    /// `&&` / `||`: the single-character form is not an operator.
    fn doubled(&mut self, c: char, start: usize, start_pos: Position, id: OperatorId) {
        if self.match_char(c) {
            self.add_op(id, start, start_pos);
        } else {
            self.add_error(LexErrorKind::UnexpectedCharacter(c), start, start_pos);
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize, start_pos: Position) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];
        match keyword_id(spelling) {
            Some(id) => self.add_token(TokenKind::Keyword(id), start, start_pos),
            None => self.add_token(TokenKind::Ident, start, start_pos),
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier.
///
/// Accepts ASCII letters, `_`, the accented ranges `á..=ú` / `Á..=Ú`, and `ñ` / `Ñ`.
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || ('á'..='ú').contains(&c) || ('Á'..='Ú').contains(&c) || c == 'ñ' || c == 'Ñ'
}

/// Check if a character can continue an identifier.
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Convenience function to scan a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    let tokens = Lexer::new(source).tokenize();
    tracing::trace!(token_count = tokens.len(), "scan complete");
    tokens
}

/// Collect the lexical errors carried by error tokens, in sequence order.
pub fn lexical_errors(tokens: &[Token]) -> Vec<LexError> {
    tokens.iter().filter_map(LexError::from_token).collect()
}

// ============================================================================
// TESTS
// ============================================================================
