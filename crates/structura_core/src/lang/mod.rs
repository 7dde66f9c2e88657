//! Structura language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved words, operators, punctuation, and the
//! lexical categories they map to.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`, `PunctuationId`, `Category`) and look up spellings,
//! categories and legacy codes via the registry tables, instead of scattering string comparisons.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no syntax tree types, no IO, no side effects.
//! - The scanner enforces lexical rules; registries only provide spellings and metadata.
//!
//! ## Examples
//! ```rust
//! use structura_core::lang::{self, categories::Category};
//!
//! assert_eq!(lang::lookup("structure"), Some(Category::ReservedWord));
//! assert_eq!(lang::lookup("&&"), Some(Category::Logical));
//! assert_eq!(lang::lookup("]"), Some(Category::Bracket));
//! assert_eq!(lang::lookup("counter"), None);
//! ```

pub mod categories;
pub mod keywords;
pub mod operators;
pub mod punctuation;

use categories::Category;

/// Look up a fixed spelling across all registries.
///
/// Keywords are consulted first, then operators, then punctuation. Returns `None` for anything that is not a fixed
/// spelling (identifiers, literals).
pub fn lookup(spelling: &str) -> Option<Category> {
    if let Some(id) = keywords::from_str(spelling) {
        return Some(keywords::category(id));
    }
    if let Some(id) = operators::from_str(spelling) {
        return Some(operators::category(id));
    }
    punctuation::from_str(spelling).map(punctuation::category)
}

/// Iterate every fixed spelling with its category, in registry order.
pub fn fixed_spellings() -> impl Iterator<Item = (&'static str, Category)> {
    keywords::KEYWORDS
        .iter()
        .map(|k| (k.canonical, k.category))
        .chain(operators::OPERATORS.iter().map(|o| (o.spelling, o.category)))
        .chain(punctuation::PUNCTUATION.iter().map(|p| (p.canonical, p.category)))
}
