use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use structura_core::lang::keywords;

/// Guardrail against reintroducing stringly-typed keyword checks.
///
/// This is intentionally a **coarse** safety net. It looks for suspicious patterns like `== "while"` or
/// `match word { "while" => ... }` in Rust source files where we expect callers to go through
/// `structura_core::lang` registries (or `KeywordId`) instead.
///
/// Notes:
/// - We allow occurrences in `crates/structura_core/src/lang/**` (registries themselves), in docgen, and in tests.
/// - This is not meant to be perfect; it’s meant to catch “oops I added a string match”.
#[test]
fn no_new_stringly_keyword_checks_in_rust_sources() {
    let root = repo_root();
    let spellings = keyword_spellings();
    let mut offenders: Vec<(PathBuf, usize, String)> = Vec::new();

    let targets = [root.join("src"), root.join("crates")];
    for dir in targets {
        if dir.exists() {
            scan_dir(&root, &dir, &spellings, &mut offenders);
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::new();
        msg.push_str("Found potential stringly-typed keyword checks. Prefer structura_core registries.\n\n");
        for (path, line_no, line) in offenders.into_iter().take(80) {
            msg.push_str(&format!(
                "- {}:{}: {}\n",
                path.strip_prefix(&root).unwrap_or(&path).display(),
                line_no,
                line.trim()
            ));
        }
        panic!("{msg}");
    }
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn keyword_spellings() -> Vec<&'static str> {
    let set: BTreeSet<&'static str> = keywords::KEYWORDS.iter().map(|k| k.canonical).collect();
    set.into_iter().collect()
}

fn is_allowed_file(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    if !rel.ends_with(".rs") {
        return true;
    }
    // Registries define the spellings; allow them.
    if rel.starts_with("crates/structura_core/src/lang/") {
        return true;
    }
    if rel == "crates/structura_core/src/bin/generate_vocab_reference.rs" {
        return true;
    }
    // Tests can mention spellings directly.
    if rel.starts_with("tests/") || rel.contains("/tests/") || rel.ends_with("/tests.rs") {
        return true;
    }
    false
}

/// Every `.rs` file under `dir`, recursively.
fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
}

fn scan_dir(root: &Path, dir: &Path, spellings: &[&'static str], offenders: &mut Vec<(PathBuf, usize, String)>) {
    let mut files = Vec::new();
    rust_sources(dir, &mut files);

    for path in files.into_iter().filter(|p| !is_allowed_file(root, p)) {
        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        offenders.extend(
            contents
                .lines()
                .enumerate()
                .filter(|(_, line)| is_suspicious_line(line, spellings))
                .map(|(idx, line)| (path.clone(), idx + 1, line.to_string())),
        );
    }
}

fn is_suspicious_line(line: &str, spellings: &[&'static str]) -> bool {
    // Avoid false positives in comments/docstrings.
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return false;
    }

    // Only flag explicit equality checks or match arms for keyword spellings:
    // - `... == "spelling"`
    // - `"spelling" => ...`
    spellings
        .iter()
        .any(|s| line.contains(&format!("== \"{s}\"")) || line.contains(&format!("\"{s}\" =>")))
}
