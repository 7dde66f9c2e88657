//! Text rendering of parse trees and token sequences.
//!
//! Used by the CLI (`tree`, `tokens`) and by [`crate::analysis::Analysis::render_tree`].
//!
//! Tree lines look like `KIND [value] (line:N)`, children indented one level deeper than their parent. With
//! [`RenderConfig::show_columns`] the position becomes `(line:N, col:C)`.

mod config;
mod writer;

pub use config::RenderConfig;
pub use writer::TreeWriter;

use structura_syntax::ast::{Node, Position};
use structura_syntax::lexer::Token;

/// Render a subtree, one node per line.
pub fn render_tree(node: &Node, config: &RenderConfig) -> String {
    let mut writer = TreeWriter::new(config);
    write_node(&mut writer, node);
    writer.finish()
}

fn write_node(writer: &mut TreeWriter<'_>, node: &Node) {
    writer.write(node.kind().name());
    if let Some(value) = node.value().filter(|v| !v.is_empty()) {
        writer.write(&format!(" [{value}]"));
    }
    let position = position_text(node.position(), writer.config().show_columns);
    writer.writeln(&format!(" ({position})"));

    writer.indent();
    for child in node.children() {
        write_node(writer, child);
    }
    writer.dedent();
}

fn position_text(position: Position, show_columns: bool) -> String {
    if show_columns {
        format!("line:{}, col:{}", position.line, position.column)
    } else {
        format!("line:{}", position.line)
    }
}

/// Render a token sequence, one token per line: `LINE:COL  CATEGORY  lexeme [(code)]`.
pub fn render_tokens(tokens: &[Token], config: &RenderConfig) -> String {
    let mut out = String::new();
    for token in tokens {
        let category = token.category();
        let mut row = format!("{:<8} {:<20} {}", token.position().to_string(), category.name(), token.lexeme());
        if config.show_legacy_codes {
            row.push_str(&format!(" ({})", category.code()));
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use structura_syntax::{lexer, parser};

    fn tree_of(source: &str) -> Node {
        let tokens = lexer::lex(source);
        parser::parse(&tokens).tree.unwrap()
    }

    #[test]
    fn test_render_tree_default() {
        let tree = tree_of("structure S ( int x; )");
        insta::assert_snapshot!(render_tree(&tree, &RenderConfig::default()), @r"
        PROGRAM (line:1)
          STRUCTURE (line:1)
            IDENTIFIER [S] (line:1)
            STATEMENT_LIST (line:1)
              DECLARATION (line:1)
                TYPE [int] (line:1)
                IDENTIFIER [x] (line:1)
        ");
    }

    #[test]
    fn test_render_tree_with_columns() {
        let tree = tree_of("structure S ( int x; )");
        let config = RenderConfig::new().with_indent_width(1).with_columns(true);
        let rendered = render_tree(&tree, &config);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "PROGRAM (line:1, col:1)");
        assert_eq!(lines[2], "  IDENTIFIER [S] (line:1, col:11)");
    }

    #[test]
    fn test_render_tree_lines_use_node_display() {
        let tree = tree_of("structure S ( int x; )");
        let config = RenderConfig::new().with_indent_width(4);
        let rendered = render_tree(&tree, &config);
        let lines: Vec<_> = rendered.lines().collect();
        let identifier = tree.child(0).and_then(|s| s.child(0)).unwrap();
        assert_eq!(lines[2], format!("        {identifier}"));
    }

    #[test]
    fn test_render_tokens() {
        let tokens = lexer::lex("int x;");
        insta::assert_snapshot!(render_tokens(&tokens, &RenderConfig::default()), @r"
        1:1      INT_TYPE             int
        1:5      IDENTIFIER           x
        1:6      SEMICOLON            ;
        1:7      EOF
        ");
    }

    #[test]
    fn test_render_tokens_with_legacy_codes() {
        let tokens = lexer::lex("( )");
        let config = RenderConfig::new().with_legacy_codes(true);
        let rendered = render_tokens(&tokens, &config);
        let lines: Vec<_> = rendered.lines().collect();
        assert!(lines[0].ends_with("( (9)"));
        assert!(lines[1].ends_with(") (9)"));
        assert!(lines[2].ends_with("(999)"));
    }
}
