//! Property-based tests for the Structura front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;

use structura::ast::NodeKind;
use structura::lexer::{self, TokenKind};
use structura::parser::{self, ParserConfig};
use structura_core::lang;

// =============================================================================
// Strategies
// =============================================================================

/// Identifiers that are not reserved words.
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,8}".prop_filter("Not a reserved word", |s| lang::lookup(s).is_none())
}

fn type_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("int"),
        Just("float"),
        Just("double"),
        Just("string"),
        Just("char"),
        Just("bool"),
        Just("array"),
        Just("number"),
    ]
}

/// One structure member: a declaration (with or without initializer) or a function.
fn member_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (type_strategy(), ident_strategy()).prop_map(|(ty, name)| format!("{ty} {name};")),
        (type_strategy(), ident_strategy(), 0u32..1000).prop_map(|(ty, name, n)| format!("{ty} {name} = {n};")),
        (type_strategy(), ident_strategy(), ident_strategy(), 0u32..1000)
            .prop_map(|(ty, name, var, n)| format!("public const {ty} {name} [] ( {var} = {var} + {n}; )")),
        (ident_strategy(), 0u32..1000).prop_map(|(var, n)| format!("const void main [] ( print [{var}, {n}]; )")),
    ]
}

/// Arbitrary text biased toward the language's own characters.
fn noisy_source_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[a-z0-9 ()\\[\\];,=!<>&|+*/\"'\\\\.\\n-]{0,80}",
    ]
}

// =============================================================================
// Scanner properties
// =============================================================================

proptest! {
    /// Property: scanning is total and ends with exactly one sentinel
    #[test]
    fn scan_ends_with_single_sentinel(source in noisy_source_strategy()) {
        let tokens = lexer::lex(&source);
        prop_assert!(tokens.last().is_some_and(|t| t.is_eof()));
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    }

    /// Property: token spans are in order, non-overlapping and inside the source
    #[test]
    fn scan_spans_are_ordered(source in noisy_source_strategy()) {
        let tokens = lexer::lex(&source);
        let mut previous_end = 0;
        for token in &tokens {
            let span = token.span();
            prop_assert!(span.start >= previous_end, "{:?} overlaps previous token", token);
            prop_assert!(span.end <= source.len());
            previous_end = span.end;
        }
    }

    /// Property: non-reserved identifiers scan to a single identifier token
    #[test]
    fn identifiers_survive_scanning(name in ident_strategy()) {
        let tokens = lexer::lex(&name);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind(), &TokenKind::Ident);
        prop_assert_eq!(tokens[0].lexeme(), name.as_str());
    }
}

// =============================================================================
// Parser properties
// =============================================================================

proptest! {
    /// Property: parsing never panics, and an abandoned parse always explains itself
    #[test]
    fn parse_never_panics(source in noisy_source_strategy()) {
        let tokens = lexer::lex(&source);
        let output = parser::parse(&tokens);
        if output.tree.is_none() {
            prop_assert!(!output.diagnostics.is_empty());
        }
    }

    /// Property: the depth guard turns deep nesting into a diagnostic, never a stack overflow
    #[test]
    fn deep_nesting_is_bounded(depth in 1usize..600) {
        let source = format!(
            "structure S ( const void main [] ( x = {}1{}; ) )",
            "(".repeat(depth),
            ")".repeat(depth)
        );
        let tokens = lexer::lex(&source);
        let output = parser::parse_with_config(&tokens, &ParserConfig::new().with_max_depth(64));
        prop_assert_eq!(output.tree.is_some(), output.diagnostics.is_empty());
    }

    /// Property: generated well-formed programs parse cleanly, one member node per generated member.
    /// Member classification only peeks ahead, so nothing is swallowed or duplicated.
    #[test]
    fn generated_programs_parse(name in ident_strategy(), members in prop::collection::vec(member_strategy(), 0..8)) {
        let source = format!("structure {name} (\n{}\n)", members.join("\n"));
        let tokens = lexer::lex(&source);
        let output = parser::parse(&tokens);

        prop_assert!(output.is_success(), "{}\n{:?}", source, output.diagnostics);
        let tree = output.tree.unwrap();
        let member_list = tree.child(0).and_then(|s| s.child(1)).unwrap();
        prop_assert_eq!(member_list.kind(), NodeKind::StatementList);
        prop_assert_eq!(member_list.child_count(), members.len());
    }

    /// Property: parsing is deterministic and leaves its input untouched
    #[test]
    fn parse_is_deterministic(source in noisy_source_strategy()) {
        let tokens = lexer::lex(&source);
        let snapshot = tokens.clone();
        let first = parser::parse(&tokens);
        let second = parser::parse(&tokens);
        prop_assert_eq!(&tokens, &snapshot);
        prop_assert_eq!(first, second);
    }
}
