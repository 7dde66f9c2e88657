//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use structura_syntax::diagnostics;
use structura_syntax::lexer;
use structura_syntax::parser;

use crate::analysis;
use crate::legacy;
use crate::render::{self, RenderConfig};

use super::{CliError, CliResult, ExitCode};

// ============================================================================
// Source loading
// ============================================================================

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while scanning.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Failure to load a source file.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Cannot access file '{path}': {source}")]
    Access {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Source file '{path}' is too large ({size} bytes, max {max} bytes)")]
    TooLarge { path: String, size: u64, max: u64 },

    #[error("Error reading file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        CliError::failure(err.to_string())
    }
}

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> Result<String, SourceError> {
    if Path::new(file_path).is_absolute() {
        tracing::warn!("Reading source from absolute path: {}. Consider using a relative path.", file_path);
    }

    let metadata = fs::metadata(file_path).map_err(|source| SourceError::Access {
        path: file_path.to_string(),
        source,
    })?;

    if metadata.len() > MAX_SOURCE_SIZE {
        tracing::warn!(file_path, size = metadata.len(), "rejecting oversized source file");
        return Err(SourceError::TooLarge {
            path: file_path.to_string(),
            size: metadata.len(),
            max: MAX_SOURCE_SIZE,
        });
    }

    fs::read_to_string(file_path).map_err(|source| SourceError::Read {
        path: file_path.to_string(),
        source,
    })
}

// ============================================================================
// Commands
// ============================================================================

/// Lex and display tokens (debug form).
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source);

    for tok in &tokens {
        println!("{:?}", tok);
    }

    let errors = lexer::lexical_errors(&tokens);
    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        let mut msg = String::new();
        for err in &errors {
            msg.push_str(&diagnostics::format_error(file_path, &source, err));
        }
        Err(CliError::failure(msg.trim_end()))
    }
}

/// Parse and display the tree (debug form).
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source);
    let output = parser::parse(&tokens);

    if let Some(tree) = &output.tree {
        println!("{:#?}", tree);
    }

    if output.diagnostics.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        let mut msg = String::new();
        for err in &output.diagnostics {
            msg.push_str(&diagnostics::format_error(file_path, &source, err));
        }
        Err(CliError::failure(msg.trim_end()))
    }
}

/// Scan and parse a file, reporting every lexical and syntax error.
pub fn check_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let analysis = analysis::analyze(&source);

    if analysis.is_success() {
        println!("✓ No errors found");
        return Ok(ExitCode::SUCCESS);
    }

    let mut msg = analysis.render_reports(file_path, &source);
    msg.push_str(&format!("{} error(s) found", analysis.error_count()));
    Err(CliError::failure(msg))
}

/// Print the token sequence as a table, or as legacy rows.
pub fn tokens_file(file_path: &str, legacy_rows: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;

    if legacy_rows {
        for entry in legacy::scan_to_legacy(&source) {
            println!("{entry}");
        }
    } else {
        let tokens = lexer::lex(&source);
        print!("{}", render::render_tokens(&tokens, &RenderConfig::default()));
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the parse tree, followed by any diagnostics.
pub fn tree_file(file_path: &str, indent: usize, columns: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let analysis = analysis::analyze(&source);

    let config = RenderConfig::new().with_indent_width(indent).with_columns(columns);
    print!("{}", analysis.render_tree(&config));

    if analysis.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(analysis.render_diagnostics().trim_end()))
    }
}

/// Classify one word with the legacy word classifier.
#[allow(deprecated)]
pub fn classify(word: &str) -> CliResult<ExitCode> {
    tracing::warn!("`classify` uses the deprecated word classifier; prefer `tokens --legacy`");
    println!("{}", legacy::classify_word(word));
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("definitely/not/here.sta").unwrap_err();
        assert!(matches!(err, SourceError::Access { .. }));
        assert!(err.to_string().starts_with("Cannot access file 'definitely/not/here.sta'"));
    }

    #[test]
    fn test_source_error_converts_to_failure() {
        let err: CliError = SourceError::TooLarge {
            path: "big.sta".to_string(),
            size: 10,
            max: 5,
        }
        .into();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert_eq!(err.message, "Source file 'big.sta' is too large (10 bytes, max 5 bytes)");
    }

    #[test]
    fn test_check_fixture_files() {
        let valid = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/valid/minimal.sta");
        assert_eq!(check_file(valid).unwrap(), ExitCode::SUCCESS);

        let invalid = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/invalid/missing_semicolons.sta");
        let err = check_file(invalid).unwrap_err();
        assert!(err.message.ends_with("2 error(s) found"));
    }
}
