//! CLI module for the Structura front end
//!
//! ## Commands
//!
//! - `check <file>` - Scan and parse, report every diagnostic
//! - `tokens <file>` - Print the token sequence (optionally in the legacy row format)
//! - `tree <file>` - Print the parse tree
//! - `classify <word>` - Classify one word with the legacy word classifier
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Scanner and parser for the Structura language
#[derive(Parser, Debug)]
#[command(name = "structura")]
#[command(version = VERSION)]
#[command(about = "Scanner and parser for the Structura language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan and parse a file, reporting every diagnostic
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the token sequence
    Tokens {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print legacy `lexeme -> CATEGORY (code)` rows
        #[arg(long)]
        legacy: bool,
    },

    /// Print the parse tree
    Tree {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Spaces per depth level
        #[arg(long, value_name = "N", default_value_t = 2)]
        indent: usize,
        /// Show columns next to line numbers
        #[arg(long)]
        columns: bool,
    },

    /// Classify a single word with the legacy word classifier (deprecated)
    Classify {
        #[arg(value_name = "WORD")]
        word: String,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy());
    }

    match cli.command {
        Some(Command::Check { file }) => commands::check_file(&file.to_string_lossy()),
        Some(Command::Tokens { file, legacy }) => commands::tokens_file(&file.to_string_lossy(), legacy),
        Some(Command::Tree { file, indent, columns }) => commands::tree_file(&file.to_string_lossy(), indent, columns),
        Some(Command::Classify { word }) => commands::classify(&word),
        None => {
            // Default: check the file if provided
            if let Some(file) = cli.file {
                commands::check_file(&file.to_string_lossy())
            } else {
                Err(CliError::failure("No input file. Run `structura --help` for usage."))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
