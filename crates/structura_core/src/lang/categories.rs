//! Lexical categories and their legacy numeric codes.
//!
//! Every token the scanner produces is classified into exactly one [`Category`]. Each category carries a numeric
//! code that downstream (older) presentation tooling keys on, plus a stable SCREAMING_SNAKE display name.
//!
//! ## Notes
//! - Codes are **not unique**: [`Category::OpenParen`], [`Category::CloseParen`] and [`Category::Bracket`] all carry
//!   code `9`. Consumers that need to tell them apart must use the category itself, never the code.
//! - The ordering of [`CATEGORIES`] follows the declaration order of [`Category`].
//!
//! ## Examples
//! ```rust
//! use structura_core::lang::categories::{self, Category};
//!
//! assert_eq!(Category::CloseParen.code(), 9);
//! assert_eq!(Category::Bracket.code(), 9);
//! assert_eq!(categories::name(Category::IntegerLiteral), "INTEGER");
//! ```

use std::fmt;

/// Closed set of lexical categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    // ========== Keyword families ==========
    ReservedWord,
    OutputCall,
    InputCall,
    NumericType,
    Conditional,
    Loop,
    Jump,
    Boolean,

    // ========== Concrete types ==========
    IntType,
    FloatType,
    StringType,
    CharType,
    BoolType,
    ArrayType,

    Exception,

    // ========== Literals ==========
    NumericLiteral,
    StringLiteral,

    // ========== Operators ==========
    Assignment,
    Arithmetic,
    Comparison,
    Logical,

    // ========== Delimiters ==========
    OpenParen,
    CloseParen,
    Bracket,
    Semicolon,
    Comma,

    Identifier,

    // ========== Numbers recognized by the scanner automaton ==========
    IntegerLiteral,
    DecimalLiteral,

    // ========== Special ==========
    Error,
    Eof,
}

/// Metadata for a category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub id: Category,
    /// Stable display name (also the name exposed by the legacy adapter).
    pub name: &'static str,
    /// Legacy numeric code. Not unique across categories.
    pub code: u16,
    pub description: &'static str,
}

/// Registry of all categories, in declaration order.
pub const CATEGORIES: &[CategoryInfo] = &[
    info(Category::ReservedWord, "RESERVED_WORD", 1, "structure, public, private, const, void, main"),
    info(Category::OutputCall, "OUTPUT_CALL", 2, "print"),
    info(Category::InputCall, "INPUT_CALL", 3, "input"),
    info(Category::NumericType, "NUMERIC_TYPE", 4, "number"),
    info(Category::Conditional, "CONDITIONAL", 30, "if, else, elseif"),
    info(Category::Loop, "LOOP", 31, "while, for"),
    info(Category::Jump, "JUMP", 32, "break, continue, return"),
    info(Category::Boolean, "BOOLEAN", 33, "true, false"),
    info(Category::IntType, "INT_TYPE", 40, "int"),
    info(Category::FloatType, "FLOAT_TYPE", 41, "float, double"),
    info(Category::StringType, "STRING_TYPE", 42, "string"),
    info(Category::CharType, "CHAR_TYPE", 43, "char"),
    info(Category::BoolType, "BOOL_TYPE", 44, "bool"),
    info(Category::ArrayType, "ARRAY_TYPE", 45, "array"),
    info(Category::Exception, "EXCEPTION", 60, "try, catch, throw, finally"),
    info(Category::NumericLiteral, "NUMERIC_LITERAL", 5, "numeric literal (dictionary form)"),
    info(Category::StringLiteral, "STRING_LITERAL", 6, "string literal"),
    info(Category::Assignment, "ASSIGNMENT_OPERATOR", 7, "="),
    info(Category::Arithmetic, "ARITHMETIC_OPERATOR", 8, "+ - * /"),
    info(Category::Comparison, "COMPARISON_OPERATOR", 20, "== != < > <= >="),
    info(Category::Logical, "LOGICAL_OPERATOR", 21, "&& || !"),
    info(Category::OpenParen, "OPEN_PAREN", 9, "("),
    info(Category::CloseParen, "CLOSE_PAREN", 9, ")"),
    info(Category::Bracket, "BRACKET", 9, "[ ]"),
    info(Category::Semicolon, "SEMICOLON", 10, ";"),
    info(Category::Comma, "COMMA", 22, ","),
    info(Category::Identifier, "IDENTIFIER", 11, "identifier"),
    info(Category::IntegerLiteral, "INTEGER", 50, "integer literal"),
    info(Category::DecimalLiteral, "DECIMAL", 51, "decimal literal"),
    info(Category::Error, "ERROR", 100, "lexical error"),
    info(Category::Eof, "EOF", 999, "end of input"),
];

/// Full metadata for a category.
pub fn info_for(id: Category) -> &'static CategoryInfo {
    // Every variant has exactly one row; the guardrail tests enforce it.
    CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .unwrap_or(&CATEGORIES[CATEGORIES.len() - 1])
}

/// Legacy numeric code for a category.
pub fn code(id: Category) -> u16 {
    info_for(id).code
}

/// Stable display name for a category.
pub fn name(id: Category) -> &'static str {
    info_for(id).name
}

impl Category {
    /// Legacy numeric code. See the module notes on non-uniqueness.
    pub fn code(self) -> u16 {
        code(self)
    }

    pub fn name(self) -> &'static str {
        name(self)
    }

    /// Return `true` for the categories that can begin a type in a declaration (`void` is a reserved word and is
    /// handled by the keyword registry instead).
    pub fn is_type(self) -> bool {
        matches!(
            self,
            Category::NumericType
                | Category::IntType
                | Category::FloatType
                | Category::StringType
                | Category::CharType
                | Category::BoolType
                | Category::ArrayType
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const fn info(id: Category, name: &'static str, code: u16, description: &'static str) -> CategoryInfo {
    CategoryInfo {
        id,
        name,
        code,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiters_share_legacy_code() {
        assert_eq!(Category::OpenParen.code(), 9);
        assert_eq!(Category::CloseParen.code(), 9);
        assert_eq!(Category::Bracket.code(), 9);
        assert_ne!(Category::OpenParen, Category::CloseParen);
    }

    #[test]
    fn test_special_codes() {
        assert_eq!(Category::Error.code(), 100);
        assert_eq!(Category::Eof.code(), 999);
        assert_eq!(Category::IntegerLiteral.code(), 50);
        assert_eq!(Category::DecimalLiteral.code(), 51);
    }

    #[test]
    fn test_type_categories() {
        assert!(Category::IntType.is_type());
        assert!(Category::NumericType.is_type());
        assert!(!Category::ReservedWord.is_type());
        assert!(!Category::Identifier.is_type());
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Category::Comparison.to_string(), "COMPARISON_OPERATOR");
    }
}
