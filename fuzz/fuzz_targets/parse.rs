#![no_main]

use libfuzzer_sys::fuzz_target;
use structura::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Scanning is total; the sequence must end with exactly one sentinel
        let tokens = lexer::lex(s);
        assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);

        let output = parser::parse(&tokens);
        assert!(output.tree.is_some() || !output.diagnostics.is_empty());
    }
});
