//! Operator vocabulary.
//!
//! Spellings and categories for every operator the scanner recognizes. Precedence is a parser concern and is not
//! recorded here: the grammar deliberately puts additive, comparison and logical operators in one tier.
//!
//! ## Examples
//! ```rust
//! use structura_core::lang::categories::Category;
//! use structura_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LtEq));
//! assert_eq!(operators::category(OperatorId::Not), Category::Logical);
//! ```

use super::categories::Category;

/// Stable identifier for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Assign,

    Plus,
    Minus,
    Star,
    Slash,

    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    AndAnd,
    OrOr,
    Not,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub category: Category,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    info(OperatorId::Assign, "=", Category::Assignment),
    info(OperatorId::Plus, "+", Category::Arithmetic),
    info(OperatorId::Minus, "-", Category::Arithmetic),
    info(OperatorId::Star, "*", Category::Arithmetic),
    info(OperatorId::Slash, "/", Category::Arithmetic),
    info(OperatorId::EqEq, "==", Category::Comparison),
    info(OperatorId::NotEq, "!=", Category::Comparison),
    info(OperatorId::Lt, "<", Category::Comparison),
    info(OperatorId::Gt, ">", Category::Comparison),
    info(OperatorId::LtEq, "<=", Category::Comparison),
    info(OperatorId::GtEq, ">=", Category::Comparison),
    info(OperatorId::AndAnd, "&&", Category::Logical),
    info(OperatorId::OrOr, "||", Category::Logical),
    info(OperatorId::Not, "!", Category::Logical),
];

pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .unwrap_or(&OPERATORS[0])
}

pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

pub fn category(id: OperatorId) -> Category {
    info_for(id).category
}

/// Resolve an operator spelling.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == s).map(|o| o.id)
}

impl OperatorId {
    /// Operators that combine two operands at the expression tier (`+ - == != < > <= >= && ||`).
    pub fn is_expression_tier(self) -> bool {
        matches!(
            self,
            OperatorId::Plus
                | OperatorId::Minus
                | OperatorId::EqEq
                | OperatorId::NotEq
                | OperatorId::Lt
                | OperatorId::Gt
                | OperatorId::LtEq
                | OperatorId::GtEq
                | OperatorId::AndAnd
                | OperatorId::OrOr
        )
    }

    /// Operators that combine two operands at the term tier (`* /`).
    pub fn is_term_tier(self) -> bool {
        matches!(self, OperatorId::Star | OperatorId::Slash)
    }
}

const fn info(id: OperatorId, spelling: &'static str, category: Category) -> OperatorInfo {
    OperatorInfo { id, spelling, category }
}
