//! Legacy adapter: flat `(lexeme, category name, numeric code)` listings.
//!
//! Older presentation tooling consumed one row per token keyed on the numeric category code. This module produces
//! that shape from the real scanner, so the tooling keeps working while everything else moves to typed tokens.
//!
//! ## Notes
//! - Codes are not unique (`(`, `)` and the brackets all carry `9`). Rows keep the category name for that reason.
//! - [`classify_word`] is the whitespace-split word classifier that predates the scanner. It is kept only for
//!   compatibility and reproduces that classifier's answers exactly, quirks included.

mod word_classifier;

#[allow(deprecated)]
pub use word_classifier::classify_word;
pub use word_classifier::{STRING_ERROR, UNKNOWN_ERROR};

use std::fmt;

use structura_syntax::lexer::{self, Token};

/// One row of a legacy token listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyEntry {
    pub lexeme: String,
    pub category_name: &'static str,
    pub code: u16,
}

impl LegacyEntry {
    pub fn new(lexeme: impl Into<String>, category_name: &'static str, code: u16) -> Self {
        Self {
            lexeme: lexeme.into(),
            category_name,
            code,
        }
    }

    /// Row for a scanner token.
    pub fn from_token(token: &Token) -> Self {
        let category = token.category();
        Self::new(token.lexeme(), category.name(), category.code())
    }
}

impl fmt::Display for LegacyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.lexeme, self.category_name, self.code)
    }
}

/// Scan `source` and map every token except the end-of-input sentinel to a legacy row.
pub fn scan_to_legacy(source: &str) -> Vec<LegacyEntry> {
    lexer::lex(source)
        .iter()
        .filter(|token| !token.is_eof())
        .map(LegacyEntry::from_token)
        .collect()
}
