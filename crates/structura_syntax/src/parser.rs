//! Parser for the Structura language
//!
//! Converts a token sequence into a parse tree by recursive descent, collecting every structural defect it can find
//! instead of stopping at the first one.
//!
//! ## Examples
//!
//! ```rust
//! use structura_syntax::ast::NodeKind;
//! use structura_syntax::{lexer, parser};
//!
//! let source = "structure Demo ( public const void main [] ( print [\"hi\"]; ) )";
//! let tokens = lexer::lex(source);
//! let output = parser::parse(&tokens);
//! assert!(output.is_success());
//! assert!(output.tree.is_some_and(|tree| tree.contains_kind(NodeKind::Function)));
//! ```

use std::borrow::Cow;

use crate::ast::{Node, NodeKind, Position};
use crate::diagnostics::SyntaxError;
use crate::lexer::{Token, TokenKind};
use structura_core::lang::keywords::{self, KeywordId};
use structura_core::lang::operators::OperatorId;
use structura_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
