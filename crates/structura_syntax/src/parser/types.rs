/// Type parsing.
///
/// Structura types are single keywords (`int`, `float`, `double`, `string`, `char`, `bool`, `array`, `number`,
/// `void`); there are no composite type expressions.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    /// Parse a type keyword into a `type` node, or record a diagnostic and leave the cursor in place.
    fn type_node(&mut self) -> Option<Node> {
        if self.peek().kind().is_type_keyword() {
            Some(Node::with_token(NodeKind::Type, self.advance()))
        } else {
            self.error("Expected type declaration", "type");
            None
        }
    }
}
