/// Expression parsing methods.
///
/// Two binary tiers, both left-associative:
/// - `expression := term (op term)*` where `op` is any of `+ - == != < > <= >= && ||` (one shared tier)
/// - `term := factor (("*" | "/") factor)*`
///
/// ## Notes
/// - The shared tier is flat: `a < b + c` groups as `(a < b) + c`.
/// - A missing operand is reported once and left absent; the operator node keeps whatever operands parsed.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> PResult<Option<Node>> {
        let mut left = self.term()?;

        while self.peek().operator_id().is_some_and(OperatorId::is_expression_tier) {
            let mut binary = Node::with_token(NodeKind::Expression, self.advance());
            let right = self.term()?;
            binary.push_opt(left);
            binary.push_opt(right);
            left = Some(binary);
        }

        Ok(left)
    }

    fn term(&mut self) -> PResult<Option<Node>> {
        let mut left = self.factor()?;

        while self.peek().operator_id().is_some_and(OperatorId::is_term_tier) {
            let mut binary = Node::with_token(NodeKind::Term, self.advance());
            let right = self.factor()?;
            binary.push_opt(left);
            binary.push_opt(right);
            left = Some(binary);
        }

        Ok(left)
    }

    fn factor(&mut self) -> PResult<Option<Node>> {
        self.enter()?;
        let factor = self.primary();
        self.leave();
        factor
    }

    /// `factor := literal | IDENTIFIER | "(" expression ")" | "!" factor`
    fn primary(&mut self) -> PResult<Option<Node>> {
        let token = self.peek();

        let literal_kind = match token.kind() {
            TokenKind::Keyword(KeywordId::True | KeywordId::False) => Some(NodeKind::BoolLiteral),
            TokenKind::Str(quote) => Some(string_literal_kind(*quote, token.lexeme())),
            TokenKind::Integer | TokenKind::Decimal => Some(NodeKind::NumberLiteral),
            TokenKind::Ident => Some(NodeKind::Identifier),
            _ => None,
        };
        if let Some(kind) = literal_kind {
            return Ok(Some(Node::with_token(kind, self.advance())));
        }

        if self.match_punct(PunctuationId::LParen) {
            let inner = self.expression()?;
            self.expect_punct(PunctuationId::RParen, "Expected ')' after expression");
            return Ok(inner);
        }

        if self.check_op(OperatorId::Not) {
            let mut negation = Node::with_token(NodeKind::Expression, self.advance());
            let operand = self.factor()?;
            negation.push_opt(operand);
            return Ok(Some(negation));
        }

        self.error("Expected expression", "expression");
        Ok(None)
    }

    /// `(expression ("," expression)*)?` up to a closing `]`, as an `argument-list` node.
    fn argument_list(&mut self) -> PResult<Node> {
        let mut arguments = Node::at(NodeKind::ArgumentList, self.current_position());

        if self.check_punct(PunctuationId::RBracket) {
            return Ok(arguments);
        }

        let first = self.expression()?;
        arguments.push_opt(first);
        while self.match_punct(PunctuationId::Comma) {
            let next = self.expression()?;
            arguments.push_opt(next);
        }

        Ok(arguments)
    }
}
