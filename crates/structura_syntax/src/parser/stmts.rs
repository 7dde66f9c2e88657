/// Statement parsing methods.
///
/// This chunk parses statement forms (`if`, `while`, `for`, `try`, jumps, `print`/`input`, declarations,
/// assignments and expression statements) as well as parenthesized statement blocks.
///
/// ## Notes
/// - Dispatch is by the leading token. An identifier-leading statement is an assignment only when the lookahead
///   sees `=` right after it.
/// - Every statement enters one nesting level of the depth guard.
impl<'a> Parser<'a> {
    // ========================================================================
    // Blocks
    // ========================================================================

    /// `"(" statement* ")"`
    fn block(&mut self, open_msg: &str, close_msg: &str) -> PResult<Node> {
        self.expect_punct(PunctuationId::LParen, open_msg);
        let body = self.statement_list()?;
        self.expect_punct(PunctuationId::RParen, close_msg);
        Ok(body)
    }

    /// `statement*` up to the next `)` or end of input.
    fn statement_list(&mut self) -> PResult<Node> {
        let mut statements = Node::at(NodeKind::StatementList, self.current_position());

        while !self.check_punct(PunctuationId::RParen) && !self.is_at_end() {
            let statement = self.statement()?;
            statements.push_opt(statement);
        }

        Ok(statements)
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> PResult<Option<Node>> {
        self.enter()?;
        let statement = self.statement_by_leading_token();
        self.leave();
        statement
    }

    fn statement_by_leading_token(&mut self) -> PResult<Option<Node>> {
        let start = self.current_position();

        if self.match_keyword(KeywordId::Try) {
            return self.try_catch(start).map(Some);
        }
        if self.match_keyword(KeywordId::Throw) {
            return self.throw_stmt(start).map(Some);
        }
        if self.check_keyword(KeywordId::Break) || self.check_keyword(KeywordId::Continue) {
            return Ok(Some(self.jump_stmt()));
        }
        if self.check_keyword(KeywordId::Return) {
            return self.return_stmt().map(Some);
        }
        if self.match_keyword(KeywordId::If) {
            return self.if_stmt(start).map(Some);
        }
        if self.match_keyword(KeywordId::While) {
            return self.while_stmt(start).map(Some);
        }
        if self.match_keyword(KeywordId::For) {
            return self.for_stmt(start).map(Some);
        }
        if self.peek().kind().is_type_keyword() {
            return self.declaration().map(Some);
        }
        if self.check_ident() {
            return if self.is_assignment() {
                self.assignment(true).map(Some)
            } else {
                self.expression_stmt()
            };
        }
        if self.check_keyword(KeywordId::Print) {
            return self.print_stmt().map(Some);
        }
        if self.check_keyword(KeywordId::Input) {
            return Ok(Some(self.input_stmt()));
        }

        self.skip_unexpected("Unexpected token in statement", "statement");
        Ok(None)
    }

    /// Lookahead: `IDENTIFIER "="`.
    fn is_assignment(&mut self) -> bool {
        self.lookahead(|p| {
            p.advance();
            p.check_op(OperatorId::Assign)
        })
    }

    /// `assignment := IDENTIFIER "=" expression ";"`
    ///
    /// The `for` increment clause passes `require_semicolon = false`: its `;` is accepted but not required.
    fn assignment(&mut self, require_semicolon: bool) -> PResult<Node> {
        let mut assignment = Node::at(NodeKind::Assignment, self.current_position());

        let name = self.identifier("Expected variable name");
        assignment.push_opt(name);

        if !self.match_op(OperatorId::Assign) {
            self.error("Expected '=' in assignment", "'='");
        }

        let value = self.expression()?;
        assignment.push_opt(value);

        if require_semicolon {
            self.expect_punct(PunctuationId::Semicolon, "Expected ';' after assignment");
        } else {
            self.match_punct(PunctuationId::Semicolon);
        }

        Ok(assignment)
    }

    /// `if := "if" "(" expression ")" "(" statement* ")" (else | elseif)?`
    ///
    /// Children: condition, then-branch, and optionally the else branch (a statement list) or the
    /// `elseif` branch (itself an `if` node).
    fn if_stmt(&mut self, start: Position) -> PResult<Node> {
        let mut if_node = Node::at(NodeKind::If, start);

        self.expect_punct(PunctuationId::LParen, "Expected '(' after 'if'");
        let condition = self.expression()?;
        if_node.push_opt(condition);
        self.expect_punct(PunctuationId::RParen, "Expected ')' after if condition");

        let then_branch = self.block("Expected '(' to open the if body", "Expected ')' to close the if body")?;
        if_node.push_child(then_branch);

        let else_start = self.current_position();
        if self.match_keyword(KeywordId::Else) {
            let else_branch = self.block("Expected '(' after 'else'", "Expected ')' to close the else body")?;
            if_node.push_child(else_branch);
        } else if self.match_keyword(KeywordId::Elseif) {
            self.enter()?;
            let mut elseif_branch = self.if_stmt(else_start)?;
            self.leave();
            elseif_branch.relabel(NodeKind::If);
            if_node.push_child(elseif_branch);
        }

        Ok(if_node)
    }

    /// `while := "while" "(" expression ")" "(" statement* ")"`
    fn while_stmt(&mut self, start: Position) -> PResult<Node> {
        let mut while_node = Node::at(NodeKind::While, start);

        self.expect_punct(PunctuationId::LParen, "Expected '(' after 'while'");
        let condition = self.expression()?;
        while_node.push_opt(condition);
        self.expect_punct(PunctuationId::RParen, "Expected ')' after while condition");

        let body = self.block("Expected '(' to open the while body", "Expected ')' to close the while body")?;
        while_node.push_child(body);

        Ok(while_node)
    }

    /// `for := "for" "(" assignment expression ";" assignment ")" "(" statement* ")"`
    ///
    /// Children: init assignment, condition, increment assignment, body.
    fn for_stmt(&mut self, start: Position) -> PResult<Node> {
        let mut for_node = Node::at(NodeKind::For, start);

        self.expect_punct(PunctuationId::LParen, "Expected '(' after 'for'");

        let init = self.assignment(true)?;
        for_node.push_child(init);

        let condition = self.expression()?;
        for_node.push_opt(condition);
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after for condition");

        let increment = self.assignment(false)?;
        for_node.push_child(increment);

        self.expect_punct(PunctuationId::RParen, "Expected ')' after for clauses");

        let body = self.block("Expected '(' to open the for body", "Expected ')' to close the for body")?;
        for_node.push_child(body);

        Ok(for_node)
    }

    /// `try := "try" "(" statement* ")" "catch" "(" statement* ")" ("finally" "(" statement* ")")?`
    fn try_catch(&mut self, start: Position) -> PResult<Node> {
        let mut try_node = Node::at(NodeKind::TryCatch, start);

        let try_body = self.block("Expected '(' after 'try'", "Expected ')' to close the try body")?;
        try_node.push_child(try_body);

        self.expect_keyword(KeywordId::Catch, "Expected 'catch' after try block");
        let catch_body = self.block("Expected '(' after 'catch'", "Expected ')' to close the catch body")?;
        try_node.push_child(catch_body);

        if self.match_keyword(KeywordId::Finally) {
            let finally_body = self.block("Expected '(' after 'finally'", "Expected ')' to close the finally body")?;
            try_node.push_child(finally_body);
        }

        Ok(try_node)
    }

    /// `"throw" expression ";"`
    fn throw_stmt(&mut self, start: Position) -> PResult<Node> {
        let mut throw_node = Node::at(NodeKind::Throw, start);

        let value = self.expression()?;
        throw_node.push_opt(value);
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after throw statement");

        Ok(throw_node)
    }

    /// `"break" ";"` / `"continue" ";"`
    fn jump_stmt(&mut self) -> Node {
        let token = self.advance();
        let (kind, msg) = if token.is_keyword(KeywordId::Break) {
            (NodeKind::Break, "Expected ';' after break")
        } else {
            (NodeKind::Continue, "Expected ';' after continue")
        };
        let node = Node::with_token(kind, token);
        self.expect_punct(PunctuationId::Semicolon, msg);
        node
    }

    /// `"return" expression? ";"`
    fn return_stmt(&mut self) -> PResult<Node> {
        let mut return_node = Node::with_token(NodeKind::Return, self.advance());

        if !self.check_punct(PunctuationId::Semicolon) {
            let value = self.expression()?;
            return_node.push_opt(value);
        }
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after return");

        Ok(return_node)
    }

    /// `"print" "[" (expression ("," expression)*)? "]" ";"`
    fn print_stmt(&mut self) -> PResult<Node> {
        let mut call = Node::with_token(NodeKind::FunctionCall, self.advance());

        self.expect_punct(PunctuationId::LBracket, "Expected '[' after 'print'");
        let arguments = self.argument_list()?;
        call.push_child(arguments);
        self.expect_punct(PunctuationId::RBracket, "Expected ']' after print arguments");
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after print statement");

        Ok(call)
    }

    /// `"input" IDENTIFIER ";"`
    fn input_stmt(&mut self) -> Node {
        let mut call = Node::with_token(NodeKind::FunctionCall, self.advance());

        let target = self.identifier("Expected variable name after 'input'");
        call.push_opt(target);
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after input statement");

        call
    }

    /// `expression ";"`; the statement is the expression node itself.
    fn expression_stmt(&mut self) -> PResult<Option<Node>> {
        let expression = self.expression()?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after expression");
        Ok(expression)
    }
}
