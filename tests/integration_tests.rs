//! Integration tests for the Structura front end

use std::fs;
use std::path::{Path, PathBuf};

use structura::analysis::{self, Analysis};
use structura::ast::NodeKind;
use structura::diagnostics::LexErrorKind;
use structura::render::RenderConfig;

fn fixtures_dir(kind: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind)
}

fn fixture_paths(kind: &str) -> Vec<PathBuf> {
    let mut paths: Vec<_> = fs::read_dir(fixtures_dir(kind))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "sta"))
        .collect();
    paths.sort();
    paths
}

fn analyze_fixture(kind: &str, name: &str) -> Analysis {
    let source = fs::read_to_string(fixtures_dir(kind).join(name)).unwrap();
    analysis::analyze(&source)
}

fn messages(analysis: &Analysis) -> Vec<&str> {
    analysis.diagnostics.iter().map(|d| d.message.as_str()).collect()
}

/// Test that all valid fixtures scan and parse without a single diagnostic
#[test]
fn test_valid_fixtures() {
    let paths = fixture_paths("valid");
    assert!(!paths.is_empty());

    for path in paths {
        let source = fs::read_to_string(&path).unwrap();
        let analysis = analysis::analyze(&source);
        assert!(
            analysis.is_success(),
            "Expected {} to be valid, got:\n{}",
            path.display(),
            analysis.render_diagnostics()
        );
        let tree = analysis.tree.as_ref().unwrap();
        assert!(!tree.contains_kind(NodeKind::Error));
    }
}

/// Test that invalid fixtures produce diagnostics but still yield a tree
#[test]
fn test_invalid_fixtures() {
    let paths = fixture_paths("invalid");
    assert!(!paths.is_empty());

    for path in paths {
        let source = fs::read_to_string(&path).unwrap();
        let analysis = analysis::analyze(&source);
        assert!(!analysis.is_success(), "Expected {} to fail", path.display());
        assert!(analysis.error_count() > 0);
        assert!(analysis.tree.is_some(), "{} should still produce a tree", path.display());
    }
}

#[test]
fn test_minimal_program_tree() {
    let analysis = analyze_fixture("valid", "minimal.sta");
    insta::assert_snapshot!(analysis.render_tree(&RenderConfig::default()), @r"
    PROGRAM (line:1)
      STRUCTURE (line:1)
        IDENTIFIER [Minimal] (line:1)
        STATEMENT_LIST (line:2)
          FUNCTION (line:2)
            ACCESS_MODIFIER [public] (line:2)
            TYPE [void] (line:2)
            IDENTIFIER [main] (line:2)
            STATEMENT_LIST (line:3)
    ");
}

#[test]
fn test_full_program_covers_every_statement_form() {
    let analysis = analyze_fixture("valid", "full_program.sta");
    let tree = analysis.tree.as_ref().unwrap();

    for kind in [
        NodeKind::Declaration,
        NodeKind::Function,
        NodeKind::For,
        NodeKind::If,
        NodeKind::While,
        NodeKind::TryCatch,
        NodeKind::Throw,
        NodeKind::Break,
        NodeKind::Continue,
        NodeKind::Return,
        NodeKind::FunctionCall,
        NodeKind::ArgumentList,
        NodeKind::StringLiteral,
        NodeKind::CharLiteral,
        NodeKind::BoolLiteral,
        NodeKind::Term,
    ] {
        assert!(tree.contains_kind(kind), "missing {kind}");
    }

    let members = tree.child(0).and_then(|s| s.child(1)).unwrap();
    assert_eq!(members.kind(), NodeKind::StatementList);
    assert_eq!(members.child_count(), 7);
}

#[test]
fn test_accented_identifiers() {
    let analysis = analyze_fixture("valid", "accents.sta");
    let names: Vec<_> = analysis
        .tokens
        .iter()
        .filter(|t| t.is_ident())
        .map(|t| t.lexeme())
        .collect();
    assert_eq!(names, vec!["Año", "número", "número", "número"]);
}

#[test]
fn test_missing_semicolons_reported_in_source_order() {
    let analysis = analyze_fixture("invalid", "missing_semicolons.sta");
    insta::assert_snapshot!(analysis.render_diagnostics(), @r"
    Error at line 4, column 5: Expected ';' after declaration (expected: ';', found: int)
    Error at line 5, column 3: Expected ';' after declaration (expected: ';', found: ))
    ");
}

#[test]
fn test_lexical_errors_are_collected() {
    let analysis = analyze_fixture("invalid", "lexical_errors.sta");
    let kinds: Vec<_> = analysis.lexical_errors.iter().map(|e| e.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![LexErrorKind::UnexpectedCharacter('&'), LexErrorKind::UnterminatedString]
    );
    assert_eq!(analysis.lexical_errors[0].position.line, 3);
    assert_eq!(analysis.lexical_errors[1].position.line, 4);
}

#[test]
fn test_missing_structure_keyword() {
    let analysis = analyze_fixture("invalid", "missing_structure.sta");
    assert_eq!(
        messages(&analysis),
        vec![
            "Expected 'structure' keyword at start of program",
            "Unexpected tokens after end of program",
        ]
    );
    assert_eq!(analysis.diagnostics[0].found, "thing");
    assert_eq!(analysis.tree.as_ref().map(|t| t.child_count()), Some(0));
}

#[test]
fn test_unclosed_blocks_report_eof() {
    let analysis = analyze_fixture("invalid", "unclosed_block.sta");
    assert_eq!(
        messages(&analysis),
        vec![
            "Expected ')' to close the while body",
            "Expected ')' to close the function body",
            "Expected ')' to close the structure",
        ]
    );
    assert!(analysis.diagnostics.iter().all(|d| d.found == "EOF"));
    assert!(analysis.tree.as_ref().unwrap().contains_kind(NodeKind::While));
}

/// Legacy listing over a real program
mod legacy_tests {
    use structura::legacy::{self, LegacyEntry};

    #[test]
    fn test_full_program_has_no_error_rows() {
        let source = std::fs::read_to_string(super::fixtures_dir("valid").join("full_program.sta")).unwrap();
        let rows = legacy::scan_to_legacy(&source);
        assert!(rows.iter().all(|r| r.code != 100), "{rows:?}");
        assert_eq!(rows[0], LegacyEntry::new("structure", "RESERVED_WORD", 1));
        assert_eq!(rows[1], LegacyEntry::new("Report", "IDENTIFIER", 11));
    }
}
