//! Punctuation vocabulary: delimiters and separators.
//!
//! ## Notes
//! - `[` and `]` share the single [`Category::Bracket`] category; `(` and `)` each get their own.
//!
//! ## Examples
//! ```rust
//! use structura_core::lang::categories::Category;
//! use structura_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(";"), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::category(PunctuationId::RBracket), Category::Bracket);
//! ```

use super::categories::Category;

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: Category,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::LParen, "(", Category::OpenParen),
    info(PunctuationId::RParen, ")", Category::CloseParen),
    info(PunctuationId::LBracket, "[", Category::Bracket),
    info(PunctuationId::RBracket, "]", Category::Bracket),
    info(PunctuationId::Semicolon, ";", Category::Semicolon),
    info(PunctuationId::Comma, ",", Category::Comma),
];

pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .unwrap_or(&PUNCTUATION[0])
}

pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

pub fn category(id: PunctuationId) -> Category {
    info_for(id).category
}

pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, category: Category) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}
