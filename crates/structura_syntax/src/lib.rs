//! Syntax frontend for the Structura language: scanner, parse tree, parser, diagnostics.
//!
//! The pipeline is strictly one-way: source text → [`lexer::lex`] → token sequence → [`parser::parse`] →
//! (tree, diagnostics). The scanner never depends on the parser, and the parser only ever sees tokens.
//!
//! ## Notes
//! - This crate is "syntax-only": no symbol tables, no type checking, no evaluation.
//! - Neither stage fails on malformed input. Lexical problems become error tokens; structural problems become
//!   [`diagnostics::SyntaxError`] records next to a best-effort tree.
//! - Vocabulary identity (keywords/operators/punctuation/categories) comes from `structura_core::lang`.
//!
//! ## Examples
//! ```rust
//! use structura_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("structure Foo ( int x ; )");
//! let output = parser::parse(&tokens);
//! assert!(output.diagnostics.is_empty());
//! assert!(output.tree.is_some());
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
