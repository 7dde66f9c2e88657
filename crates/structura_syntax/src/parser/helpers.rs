/// Token-sequence helpers, diagnostics and lookahead.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Recording diagnostics (`error`)
/// - Side-effect-free speculation (`lookahead`) and the nesting-depth guard (`enter` / `leave`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Advance to the next token and return the token we just consumed.
    ///
    /// The sentinel is never consumed: at end of input this returns it without moving.
    fn advance(&mut self) -> &Token {
        let index = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[index.min(self.tokens.len() - 1)]
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().is_punctuation(id)
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().is_operator(id)
    }

    fn check_ident(&self) -> bool {
        self.peek().is_ident()
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the given punctuation, or record `msg` and leave the cursor where it is.
    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> bool {
        if self.match_punct(id) {
            true
        } else {
            self.error(msg, format!("'{}'", punctuation::as_str(id)));
            false
        }
    }

    /// Consume the given keyword, or record `msg` and leave the cursor where it is.
    fn expect_keyword(&mut self, id: KeywordId, msg: &str) -> bool {
        if self.match_keyword(id) {
            true
        } else {
            self.error(msg, format!("'{}'", keywords::as_str(id)));
            false
        }
    }

    /// Record a diagnostic positioned at the current token.
    fn error(&mut self, msg: impl Into<String>, expected: impl Into<String>) {
        let error = SyntaxError::at_token(msg, self.peek(), expected);
        self.errors.push(error);
    }

    /// Record a diagnostic for the current token and step over it.
    fn skip_unexpected(&mut self, msg: &str, expected: &str) {
        self.error(msg, expected);
        let skipped = self.advance();
        tracing::debug!(lexeme = skipped.lexeme(), line = skipped.line(), "skipped token");
    }

    // ========================================================================
    // Speculation
    // ========================================================================

    /// Run `probe` speculatively: the cursor is restored afterwards whatever `probe` consumed.
    ///
    /// Probes may only move the cursor. They must not record diagnostics or build nodes.
    fn lookahead<T>(&mut self, probe: impl FnOnce(&mut Self) -> T) -> T {
        let checkpoint = self.pos;
        let errors_before = self.errors.len();
        let result = probe(self);
        debug_assert_eq!(self.errors.len(), errors_before, "lookahead recorded a diagnostic");
        self.pos = checkpoint;
        result
    }

    // ========================================================================
    // Depth guard
    // ========================================================================

    /// Enter one nesting level; abandons the parse once the configured maximum is exceeded.
    fn enter(&mut self) -> PResult<()> {
        self.depth += 1;
        if self.depth > self.config.max_depth {
            let max_depth = self.config.max_depth;
            self.error(
                format!("Maximum nesting depth of {max_depth} exceeded"),
                format!("at most {max_depth} nested levels"),
            );
            tracing::debug!(max_depth, line = self.peek().line(), "nesting depth exceeded");
            return Err(Abort);
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Position of the current token; structural nodes are anchored here.
    fn current_position(&self) -> Position {
        self.peek().position()
    }
}
