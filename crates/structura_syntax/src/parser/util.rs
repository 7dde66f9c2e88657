/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don’t cleanly fit into
/// “decl”, “stmt”, “expr”, or “types”.
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    /// Parse an identifier into an `identifier` node, or record `msg` and leave the cursor in place.
    fn identifier(&mut self, msg: &str) -> Option<Node> {
        if self.check_ident() {
            Some(Node::with_token(NodeKind::Identifier, self.advance()))
        } else {
            self.error(msg, "identifier");
            None
        }
    }
}

/// Node kind for a string token: a single-quoted literal holding exactly one character is a char literal.
///
/// `lexeme` is the decoded content wrapped in its delimiters.
fn string_literal_kind(quote: char, lexeme: &str) -> NodeKind {
    if quote == '\'' && lexeme.chars().count() == 3 {
        NodeKind::CharLiteral
    } else {
        NodeKind::StringLiteral
    }
}
