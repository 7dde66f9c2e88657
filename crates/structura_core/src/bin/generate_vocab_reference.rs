//! Generate a Markdown reference of the Structura vocabulary from `structura_core::lang` registries.
//!
//! ## Examples
//! Print to stdout, or write to a file when a path is given:
//! ```bash
//! cargo run -p structura_core --bin generate_vocab_reference
//! cargo run -p structura_core --bin generate_vocab_reference -- docs/vocabulary.md
//! ```
//!
//! ## Panics
//! - If the output file cannot be written.

use std::fs;

use structura_core::lang::{categories, keywords, operators, punctuation};

fn main() {
    let out = render_reference();
    match std::env::args().nth(1) {
        Some(path) => fs::write(&path, out).expect("write vocabulary reference"),
        None => print!("{out}"),
    }
}

fn render_reference() -> String {
    let mut out = String::new();
    out.push_str("# Structura vocabulary reference\n\n");
    out.push_str("Generated from `structura_core::lang`; do not edit by hand.\n\n");

    out.push_str("## Categories\n\n");
    out.push_str("| Category | Name | Code | Covers |\n");
    out.push_str("|---|---|---|---|\n");
    for c in categories::CATEGORIES {
        out.push_str(&format!("| {:?} | `{}` | {} | {} |\n", c.id, c.name, c.code, c.description));
    }

    out.push_str("\n## Keywords\n\n");
    out.push_str("| Id | Spelling | Category |\n");
    out.push_str("|---|---|---|\n");
    for k in keywords::KEYWORDS {
        out.push_str(&format!("| {:?} | `{}` | {} |\n", k.id, k.canonical, k.category));
    }

    out.push_str("\n## Operators\n\n");
    out.push_str("| Id | Spelling | Category |\n");
    out.push_str("|---|---|---|\n");
    for o in operators::OPERATORS {
        out.push_str(&format!("| {:?} | `{}` | {} |\n", o.id, o.spelling, o.category));
    }

    out.push_str("\n## Punctuation\n\n");
    out.push_str("| Id | Spelling | Category |\n");
    out.push_str("|---|---|---|\n");
    for p in punctuation::PUNCTUATION {
        out.push_str(&format!("| {:?} | `{}` | {} |\n", p.id, p.canonical, p.category));
    }

    out
}
