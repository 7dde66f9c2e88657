//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use structura_core::lang::keywords::KeywordId;
use structura_core::lang::operators::OperatorId;
use structura_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` for a keyword naming a type (`void` included).
    pub fn is_type_keyword(&self) -> bool {
        self.keyword_id().is_some_and(KeywordId::is_type)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind().keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind().keyword_id()
    }

    /// Convenience wrapper for `self.kind().operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind().operator_id()
    }

    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.kind().is_keyword(id)
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        self.kind().is_operator(id)
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        self.kind().is_punctuation(id)
    }

    pub fn is_ident(&self) -> bool {
        matches!(self.kind(), TokenKind::Ident)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::lex;
    use structura_core::lang::keywords::KeywordId;

    #[test]
    fn test_type_keyword_detection() {
        let tokens = lex("void double main x");
        assert!(tokens[0].kind().is_type_keyword());
        assert!(tokens[1].kind().is_type_keyword());
        assert!(!tokens[2].kind().is_type_keyword());
        assert!(tokens[2].is_keyword(KeywordId::Main));
        assert!(tokens[3].is_ident());
    }
}
