//! Whitespace-word classifier kept for compatibility with older tooling.
//!
//! A word is first looked up in a fixed dictionary (every fixed spelling of the language plus two sample literal
//! entries). Anything not in the dictionary runs through a six-state automaton:
//!
//! ```text
//! [Start] → digit → [Integer] → '.' digit → [Decimal] → e/E (+|-|digit) → [Decimal]
//!         → '"'   → [String]  → '"' → [Start]
//!         → letter / '_' → [Identifier]
//!         → other → [Error]
//! ```
//!
//! ## Notes
//! - A complete `"..."` word ends back in `Start` and classifies as [`UNKNOWN_ERROR`]. That is the historical answer
//!   and it is preserved.
//! - An integer followed directly by an exponent (`3e5`) is an error; only decimals take exponents here.

use std::collections::HashMap;
use std::sync::OnceLock;

use structura_core::lang::{self, categories::Category};
use structura_syntax::lexer::{is_ident_continue, is_ident_start};

use super::LegacyEntry;

/// Name and code reported for a word whose string literal never closes.
pub const STRING_ERROR: (&str, u16) = ("STRING_ERROR", 102);

/// Name and code reported for any word the automaton rejects.
pub const UNKNOWN_ERROR: (&str, u16) = ("UNKNOWN_ERROR", 100);

static DICTIONARY: OnceLock<HashMap<&'static str, Category>> = OnceLock::new();

fn dictionary() -> &'static HashMap<&'static str, Category> {
    DICTIONARY.get_or_init(|| {
        let mut table: HashMap<_, _> = lang::fixed_spellings().collect();
        table.insert("10", Category::NumericLiteral);
        table.insert("\"..\"", Category::StringLiteral);
        table
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Integer,
    Decimal,
    Str,
    Identifier,
    Error,
}

/// Classify a single whitespace-delimited word.
#[deprecated(note = "classifies isolated words only; use `structura_syntax::lexer::lex` or `scan_to_legacy`")]
pub fn classify_word(word: &str) -> LegacyEntry {
    if let Some(category) = dictionary().get(word) {
        return LegacyEntry::new(word, category.name(), category.code());
    }

    let (name, code) = match run_automaton(word) {
        State::Integer => (Category::IntegerLiteral.name(), Category::IntegerLiteral.code()),
        State::Decimal => (Category::DecimalLiteral.name(), Category::DecimalLiteral.code()),
        State::Str if word.chars().count() > 1 && word.ends_with('"') => {
            (Category::StringLiteral.name(), Category::StringLiteral.code())
        }
        State::Str => STRING_ERROR,
        State::Identifier => (Category::Identifier.name(), Category::Identifier.code()),
        State::Start | State::Error => UNKNOWN_ERROR,
    };
    LegacyEntry::new(word, name, code)
}

fn run_automaton(word: &str) -> State {
    let chars: Vec<char> = word.chars().collect();
    let mut state = State::Start;

    for (i, &c) in chars.iter().enumerate() {
        let next = chars.get(i + 1).copied();
        let prev = i.checked_sub(1).map(|p| chars[p]);

        state = match state {
            State::Start if c.is_ascii_digit() => State::Integer,
            State::Start if c == '"' => State::Str,
            State::Start if is_ident_start(c) => State::Identifier,
            State::Start => State::Error,

            State::Integer if c.is_ascii_digit() => State::Integer,
            State::Integer if c == '.' && next.is_some_and(|n| n.is_ascii_digit()) => State::Decimal,
            State::Integer => State::Error,

            State::Decimal if c.is_ascii_digit() => State::Decimal,
            State::Decimal if matches!(c, 'e' | 'E') && next.is_some_and(|n| n == '+' || n == '-' || n.is_ascii_digit()) => {
                State::Decimal
            }
            State::Decimal if matches!(c, '+' | '-') && matches!(prev, Some('e' | 'E')) => State::Decimal,
            State::Decimal => State::Error,

            State::Str if c == '"' => State::Start,
            State::Str => State::Str,

            State::Identifier if is_ident_continue(c) => State::Identifier,
            State::Identifier => State::Error,

            State::Error => State::Error,
        };
    }

    state
}
