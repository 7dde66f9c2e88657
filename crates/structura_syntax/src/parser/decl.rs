/// Program-level parsing: the structure, its members, functions and declarations.
///
/// ## Notes
/// - A type-leading member is a function only if the (non-destructive) `main` lookahead says so;
///   otherwise it is a declaration.
impl<'a> Parser<'a> {
    // ========================================================================
    // Program / structure
    // ========================================================================

    /// `program := structure`
    fn program(&mut self) -> PResult<Node> {
        let mut program = Node::at(NodeKind::Program, self.current_position());
        let structure = self.structure()?;
        program.push_opt(structure);
        Ok(program)
    }

    /// `structure := "structure" IDENTIFIER "(" member* ")"`
    fn structure(&mut self) -> PResult<Option<Node>> {
        let mut structure = Node::at(NodeKind::Structure, self.current_position());

        if !self.match_keyword(KeywordId::Structure) {
            self.error("Expected 'structure' keyword at start of program", "'structure'");
            return Ok(None);
        }

        let name = self.identifier("Expected structure name");
        structure.push_opt(name);

        self.expect_punct(PunctuationId::LParen, "Expected '(' after structure name");
        let members = self.member_list()?;
        structure.push_child(members);
        self.expect_punct(PunctuationId::RParen, "Expected ')' to close the structure");

        Ok(Some(structure))
    }

    /// `member*` up to the closing `)` of the structure.
    fn member_list(&mut self) -> PResult<Node> {
        let mut members = Node::at(NodeKind::StatementList, self.current_position());

        while !self.check_punct(PunctuationId::RParen) && !self.is_at_end() {
            if self.check_access_modifier() || self.check_keyword(KeywordId::Const) {
                let function = self.function()?;
                members.push_child(function);
            } else if self.peek().kind().is_type_keyword() {
                let member = if self.is_function_definition() {
                    self.function()?
                } else {
                    self.declaration()?
                };
                members.push_child(member);
            } else {
                self.skip_unexpected("Unexpected token in structure body", "member");
            }
        }

        Ok(members)
    }

    /// Lookahead: `("public"|"private")? "const"? type "main"`.
    ///
    /// Moves only the cursor, and restores it before returning.
    fn is_function_definition(&mut self) -> bool {
        self.lookahead(|p| {
            if p.check_access_modifier() {
                p.advance();
            }
            p.match_keyword(KeywordId::Const);
            if !p.peek().kind().is_type_keyword() {
                return false;
            }
            p.advance();
            p.check_keyword(KeywordId::Main)
        })
    }

    /// `function := ("public"|"private")? "const" type (MAIN | IDENTIFIER) "[" "]" "(" statement* ")"`
    ///
    /// Children: access modifier (if present), type, name, body.
    fn function(&mut self) -> PResult<Node> {
        let mut function = Node::at(NodeKind::Function, self.current_position());

        if self.check_access_modifier() {
            let modifier = Node::with_token(NodeKind::AccessModifier, self.advance());
            function.push_child(modifier);
        }

        self.expect_keyword(KeywordId::Const, "Expected 'const' in function definition");

        let return_type = self.type_node();
        function.push_opt(return_type);

        if self.check_keyword(KeywordId::Main) || self.check_ident() {
            let name = Node::with_token(NodeKind::Identifier, self.advance());
            function.push_child(name);
        } else {
            self.error("Expected function name (main or identifier)", "'main' or identifier");
        }

        self.expect_punct(PunctuationId::LBracket, "Expected '[' after function name");
        self.expect_punct(PunctuationId::RBracket, "Expected ']' after '['");
        let body = self.block("Expected '(' to open the function body", "Expected ')' to close the function body")?;
        function.push_child(body);

        Ok(function)
    }

    /// `declaration := type IDENTIFIER ("=" expression)? ";"`
    fn declaration(&mut self) -> PResult<Node> {
        let mut declaration = Node::at(NodeKind::Declaration, self.current_position());

        let ty = self.type_node();
        declaration.push_opt(ty);

        let name = self.identifier("Expected variable name after type");
        declaration.push_opt(name);

        if self.match_op(OperatorId::Assign) {
            let init = self.expression()?;
            declaration.push_opt(init);
        }

        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after declaration");
        Ok(declaration)
    }

    fn check_access_modifier(&self) -> bool {
        self.peek().keyword_id().is_some_and(KeywordId::is_access_modifier)
    }
}
