//! One-call front-end pipeline: scan, parse, and collect every diagnostic.
//!
//! ## Examples
//! ```rust
//! use structura::analysis;
//!
//! let analysis = analysis::analyze("structure S ( public const void main[] ( x = 1; ) )");
//! assert!(analysis.is_success());
//! assert_eq!(analysis.error_count(), 0);
//! ```

use structura_syntax::ast::Node;
use structura_syntax::diagnostics::{LexError, SyntaxError, format_error};
use structura_syntax::lexer::{self, Token};
use structura_syntax::parser::{self, ParserConfig};

use crate::render::{self, RenderConfig};

/// Everything the front end learned about one source text.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    /// `None` only when the parse was abandoned.
    pub tree: Option<Node>,
    pub diagnostics: Vec<SyntaxError>,
    pub lexical_errors: Vec<LexError>,
}

/// Analyze `source` with the default parser configuration.
pub fn analyze(source: &str) -> Analysis {
    analyze_with_config(source, &ParserConfig::default())
}

#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn analyze_with_config(source: &str, config: &ParserConfig) -> Analysis {
    let tokens = lexer::lex(source);
    let lexical_errors = lexer::lexical_errors(&tokens);
    let output = parser::parse_with_config(&tokens, config);

    tracing::debug!(
        tokens = tokens.len(),
        lexical_errors = lexical_errors.len(),
        syntax_errors = output.diagnostics.len(),
        "analysis finished"
    );

    Analysis {
        tokens,
        tree: output.tree,
        diagnostics: output.diagnostics,
        lexical_errors,
    }
}

impl Analysis {
    /// No lexical and no syntactic errors.
    pub fn is_success(&self) -> bool {
        self.tree.is_some() && self.diagnostics.is_empty() && self.lexical_errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len() + self.lexical_errors.len()
    }

    /// The tree rendered with `config`, or an empty string if the parse was abandoned.
    pub fn render_tree(&self, config: &RenderConfig) -> String {
        self.tree
            .as_ref()
            .map(|tree| render::render_tree(tree, config))
            .unwrap_or_default()
    }

    /// Every diagnostic as its one-line message: lexical errors first, then syntax errors, each in source order.
    pub fn render_diagnostics(&self) -> String {
        let mut out = String::new();
        for err in &self.lexical_errors {
            out.push_str(&err.to_string());
            out.push('\n');
        }
        for err in &self.diagnostics {
            out.push_str(&err.to_string());
            out.push('\n');
        }
        out
    }

    /// Every diagnostic rendered against `source` with labelled snippets.
    pub fn render_reports(&self, file_name: &str, source: &str) -> String {
        let mut out = String::new();
        for err in &self.lexical_errors {
            out.push_str(&format_error(file_name, source, err));
        }
        for err in &self.diagnostics {
            out.push_str(&format_error(file_name, source, err));
        }
        out
    }
}
