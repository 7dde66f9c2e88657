//! Canonical vocabulary for the Structura language.
//!
//! This crate is intentionally small and dependency-free. It owns the fixed spellings of the language (reserved
//! words, operators, punctuation) and the closed set of lexical categories those spellings map to, together with the
//! numeric category codes older tooling still depends on.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global mutable state, no syntax-tree types.
//! - Every table is `const` data, so it is built at compile time and shared read-only.
//!
//! ## Examples
//! ```rust
//! use structura_core::lang::{self, categories::Category};
//!
//! assert_eq!(lang::lookup("while"), Some(Category::Loop));
//! assert_eq!(Category::Loop.code(), 31);
//! ```

pub mod lang;
