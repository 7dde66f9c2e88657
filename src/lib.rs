#![forbid(unsafe_code)]
//! Structura front end
//!
//! Structura is a small teaching language: one `structure` holding typed declarations and functions, with C-like
//! statements written in parentheses. This crate ties the front end together: scanning and parsing live in
//! `structura_syntax`, the vocabulary in `structura_core`, and this crate adds the analysis pipeline, text rendering,
//! the legacy token-listing adapter and the `structura` CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Malformed input never panics**: lexical problems become error tokens and syntax problems become diagnostics.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod analysis;
pub mod cli;
pub mod legacy;
pub mod render;

pub use structura_syntax::ast;
pub use structura_syntax::diagnostics;
pub use structura_syntax::lexer;
pub use structura_syntax::parser;

pub use analysis::{Analysis, analyze};
pub use render::RenderConfig;
