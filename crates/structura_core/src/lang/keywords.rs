//! Reserved-word vocabulary for the Structura language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) mapping each canonical spelling to its lexical [`Category`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**; `While` is an identifier.
//! - Several spellings share a category (e.g. `float` and `double` are both [`Category::FloatType`]); the parser
//!   distinguishes them by [`KeywordId`], never by category alone.
//!
//! ## Examples
//! ```rust
//! use structura_core::lang::categories::Category;
//! use structura_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("elseif"), Some(KeywordId::Elseif));
//! assert_eq!(keywords::category(KeywordId::Double), Category::FloatType);
//! assert_eq!(keywords::from_str("Main"), None);
//! ```

use super::categories::Category;

/// Stable identifier for every reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Structure / members
    Structure,
    Public,
    Private,
    Const,
    Void,
    Main,

    // Builtin calls
    Print,
    Input,

    // Control flow
    If,
    Else,
    Elseif,
    While,
    For,
    Break,
    Continue,
    Return,

    // Literals
    True,
    False,

    // Types
    Number,
    Int,
    Float,
    Double,
    String,
    Char,
    Bool,
    Array,

    // Exception handling
    Try,
    Catch,
    Throw,
    Finally,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: Category,
}

/// Registry of all keywords.
///
/// ## Notes
/// - Grouped by category for readability; the order is not semantically meaningful.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Structure, "structure", Category::ReservedWord),
    info(KeywordId::Public, "public", Category::ReservedWord),
    info(KeywordId::Private, "private", Category::ReservedWord),
    info(KeywordId::Const, "const", Category::ReservedWord),
    info(KeywordId::Void, "void", Category::ReservedWord),
    info(KeywordId::Main, "main", Category::ReservedWord),
    info(KeywordId::Print, "print", Category::OutputCall),
    info(KeywordId::Input, "input", Category::InputCall),
    info(KeywordId::Number, "number", Category::NumericType),
    info(KeywordId::If, "if", Category::Conditional),
    info(KeywordId::Else, "else", Category::Conditional),
    info(KeywordId::Elseif, "elseif", Category::Conditional),
    info(KeywordId::While, "while", Category::Loop),
    info(KeywordId::For, "for", Category::Loop),
    info(KeywordId::Break, "break", Category::Jump),
    info(KeywordId::Continue, "continue", Category::Jump),
    info(KeywordId::Return, "return", Category::Jump),
    info(KeywordId::True, "true", Category::Boolean),
    info(KeywordId::False, "false", Category::Boolean),
    info(KeywordId::Int, "int", Category::IntType),
    info(KeywordId::Float, "float", Category::FloatType),
    info(KeywordId::Double, "double", Category::FloatType),
    info(KeywordId::String, "string", Category::StringType),
    info(KeywordId::Char, "char", Category::CharType),
    info(KeywordId::Bool, "bool", Category::BoolType),
    info(KeywordId::Array, "array", Category::ArrayType),
    info(KeywordId::Try, "try", Category::Exception),
    info(KeywordId::Catch, "catch", Category::Exception),
    info(KeywordId::Throw, "throw", Category::Exception),
    info(KeywordId::Finally, "finally", Category::Exception),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for the keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Lexical category of a keyword.
pub fn category(id: KeywordId) -> Category {
    info_for(id).category
}

/// Full metadata.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .unwrap_or(&KEYWORDS[0])
}

/// Resolve a spelling to a keyword id (case-sensitive).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

impl KeywordId {
    /// Return `true` if this keyword names a type usable in declarations and function signatures.
    ///
    /// `void` is the only reserved word (as opposed to a type category) accepted here.
    pub fn is_type(self) -> bool {
        self == KeywordId::Void || category(self).is_type()
    }

    /// Return `true` for the member access modifiers.
    pub fn is_access_modifier(self) -> bool {
        matches!(self, KeywordId::Public | KeywordId::Private)
    }
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: Category) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_spellings() {
        for k in KEYWORDS {
            assert_eq!(from_str(k.canonical), Some(k.id));
            assert_eq!(as_str(k.id), k.canonical);
        }
    }

    #[test]
    fn test_type_keywords() {
        assert!(KeywordId::Void.is_type());
        assert!(KeywordId::Double.is_type());
        assert!(KeywordId::Number.is_type());
        assert!(!KeywordId::Main.is_type());
        assert!(!KeywordId::Const.is_type());
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(from_str("IF"), None);
        assert_eq!(from_str("If"), None);
    }
}
