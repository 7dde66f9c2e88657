//! Parse tree definitions for Structura.
//!
//! The tree is deliberately uniform: every node is a [`Node`] tagged with a [`NodeKind`] from a closed set, an
//! optional originating [`Token`], and an ordered list of children. Child order carries meaning (for an `if` node:
//! condition, then-branch, optional else branch).
//!
//! ## Notes
//! - Position is fixed at construction. The only later mutation the parser performs is relabeling a node's kind
//!   (the `elseif` → `if` rewrite), which never touches position, value, or children.
//! - Nodes are attached to exactly one parent, by value, so the tree is acyclic by construction.

use std::fmt;

use crate::lexer::Token;

/// Source location span (byte offsets into the scanned text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// 1-based line/column position. `Position::default()` (0, 0) marks "no position".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

// ============================================================================
// Node kinds
// ============================================================================

/// Closed set of syntactic kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    Structure,
    Function,
    ParameterList,
    StatementList,
    Declaration,
    Assignment,
    If,
    While,
    For,
    TryCatch,
    Throw,
    Break,
    Continue,
    Return,
    Expression,
    Term,
    Factor,
    Identifier,
    NumberLiteral,
    StringLiteral,
    CharLiteral,
    BoolLiteral,
    FunctionCall,
    ArgumentList,
    Type,
    AccessModifier,
    Error,
}

impl NodeKind {
    /// Stable display name used by tree dumps.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Program => "PROGRAM",
            NodeKind::Structure => "STRUCTURE",
            NodeKind::Function => "FUNCTION",
            NodeKind::ParameterList => "PARAMETER_LIST",
            NodeKind::StatementList => "STATEMENT_LIST",
            NodeKind::Declaration => "DECLARATION",
            NodeKind::Assignment => "ASSIGNMENT",
            NodeKind::If => "IF",
            NodeKind::While => "WHILE",
            NodeKind::For => "FOR",
            NodeKind::TryCatch => "TRY_CATCH",
            NodeKind::Throw => "THROW",
            NodeKind::Break => "BREAK",
            NodeKind::Continue => "CONTINUE",
            NodeKind::Return => "RETURN",
            NodeKind::Expression => "EXPRESSION",
            NodeKind::Term => "TERM",
            NodeKind::Factor => "FACTOR",
            NodeKind::Identifier => "IDENTIFIER",
            NodeKind::NumberLiteral => "NUMBER_LITERAL",
            NodeKind::StringLiteral => "STRING_LITERAL",
            NodeKind::CharLiteral => "CHAR_LITERAL",
            NodeKind::BoolLiteral => "BOOL_LITERAL",
            NodeKind::FunctionCall => "FUNCTION_CALL",
            NodeKind::ArgumentList => "ARGUMENT_LIST",
            NodeKind::Type => "TYPE",
            NodeKind::AccessModifier => "ACCESS_MODIFIER",
            NodeKind::Error => "ERROR",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// A parse tree node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    token: Option<Token>,
    children: Vec<Node>,
    position: Position,
    value: Option<String>,
}

impl Node {
    /// A node with no token and no position (e.g. the synthetic program root of an empty input).
    pub fn new(kind: NodeKind) -> Self {
        Self::at(kind, Position::default())
    }

    /// A structural node positioned at the token that introduced it, without taking that token as its value.
    pub fn at(kind: NodeKind, position: Position) -> Self {
        Self {
            kind,
            token: None,
            children: Vec::new(),
            position,
            value: None,
        }
    }

    /// A node originating from `token`; position and value are copied from it.
    pub fn with_token(kind: NodeKind, token: &Token) -> Self {
        Self {
            kind,
            token: Some(token.clone()),
            children: Vec::new(),
            position: token.position(),
            value: Some(token.lexeme().to_string()),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
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

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.kind == NodeKind::Error
    }

    /// Append a child. Children are never reordered once attached.
    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Append a child if one was produced; an absent piece leaves no trace in the tree.
    pub fn push_opt(&mut self, child: Option<Node>) {
        if let Some(child) = child {
            self.children.push(child);
        }
    }

    /// Change the kind tag only.
    pub(crate) fn relabel(&mut self, kind: NodeKind) {
        self.kind = kind;
    }

    /// Pre-order traversal starting at (and including) this node.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Return `true` if this node or any descendant has the given kind.
    pub fn contains_kind(&self, kind: NodeKind) -> bool {
        self.walk().any(|n| n.kind == kind)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(value) = self.value.as_deref().filter(|v| !v.is_empty()) {
            write!(f, " [{}]", value)?;
        }
        write!(f, " (line:{})", self.position.line)
    }
}

/// Pre-order iterator over a subtree.
pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
