//! Numeric literal scanning.

use super::*;

impl<'a> Lexer<'a> {
    /// Scan a numeric literal whose first digit has already been consumed.
    ///
    /// `digits ('.' digits)? ([eE] [+-]? digits)?`
    ///
    /// ## Notes
    /// - The fraction is only taken when a digit follows the dot: `3.` scans as `3` and leaves the `.` behind.
    /// - A dangling exponent marker (`1e`, `2e+`) is given back: the literal closes before the `e`.
    pub(super) fn scan_number(&mut self, start: usize, start_pos: Position) {
        let mut decimal = false;
        self.consume_digits();

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.consume_digits();
            decimal = true;
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let checkpoint = self.checkpoint();
            self.advance();
            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
            if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.consume_digits();
                decimal = true;
            } else {
                self.restore(checkpoint);
            }
        }

        let kind = if decimal { TokenKind::Decimal } else { TokenKind::Integer };
        self.add_token(kind, start, start_pos);
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;

    fn first(source: &str) -> Token {
        lex(source).remove(0)
    }

    #[test]
    fn test_integer_and_decimal() {
        assert_eq!(first("42").kind(), &TokenKind::Integer);
        assert_eq!(first("3.14").kind(), &TokenKind::Decimal);
        assert_eq!(first("3.14").lexeme(), "3.14");
    }

    #[test]
    fn test_scientific_notation() {
        let token = first("12.5e-3");
        assert_eq!(token.kind(), &TokenKind::Decimal);
        assert_eq!(token.lexeme(), "12.5e-3");

        let token = first("7E10");
        assert_eq!(token.kind(), &TokenKind::Decimal);
        assert_eq!(token.lexeme(), "7E10");
    }

    #[test]
    fn test_dot_without_digit_is_not_decimal() {
        let tokens = lex("12.e");
        assert_eq!(tokens[0].kind(), &TokenKind::Integer);
        assert_eq!(tokens[0].lexeme(), "12");
        assert_eq!(tokens[1].error(), Some(&LexErrorKind::UnexpectedCharacter('.')));
        assert_eq!(tokens[2].kind(), &TokenKind::Ident);
        assert_eq!(tokens[2].lexeme(), "e");
    }

    #[test]
    fn test_dangling_exponent_backtracks() {
        let tokens = lex("5e+x");
        assert_eq!(tokens[0].kind(), &TokenKind::Integer);
        assert_eq!(tokens[0].lexeme(), "5");
        assert_eq!(tokens[1].lexeme(), "e");
        assert_eq!(tokens[1].position(), Position::new(1, 2));
        assert_eq!(tokens[2].lexeme(), "+");
        assert_eq!(tokens[3].lexeme(), "x");
    }
}
