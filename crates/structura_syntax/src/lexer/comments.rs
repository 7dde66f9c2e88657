//! Slash handling: division, `//` line comments, and nested `/* */` block comments.

use super::*;

impl<'a> Lexer<'a> {
    /// Scan after a `/` has been consumed.
    pub(super) fn scan_slash(&mut self, start: usize, start_pos: Position) {
        if self.match_char('/') {
            self.skip_line_comment();
        } else if self.match_char('*') {
            self.skip_block_comment(start, start_pos);
        } else {
            self.add_op(OperatorId::Slash, start, start_pos);
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Skip a block comment; openers and closers must balance.
    ///
    /// Reaching end of input with open markers left emits one error token covering the whole comment.
    fn skip_block_comment(&mut self, start: usize, start_pos: Position) {
        let mut depth = 1usize;

        while depth > 0 {
            match self.advance() {
                None => {
                    self.add_error(LexErrorKind::UnterminatedComment, start, start_pos);
                    return;
                }
                Some('/') if self.peek() == Some('*') => {
                    self.advance();
                    depth += 1;
                }
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    depth -= 1;
                }
                Some(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_line_comment_emits_nothing() {
        let tokens = lex("x // trailing words ; ( )\ny");
        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme()).collect();
        assert_eq!(lexemes, vec!["x", "y", ""]);
        assert_eq!(tokens[1].line(), 2);
    }

    #[test]
    fn test_balanced_nested_comment_emits_nothing() {
        let tokens = lex("a /* outer /* inner */ still outer */ b");
        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme()).collect();
        assert_eq!(lexemes, vec!["a", "b", ""]);
    }

    #[test]
    fn test_unbalanced_nested_comment_is_one_error() {
        let tokens = lex("/* /* */");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].error(), Some(&LexErrorKind::UnterminatedComment));
        assert_eq!(tokens[0].position(), Position::new(1, 1));
        assert_eq!(tokens[0].lexeme(), "/* /* */");
    }

    #[test]
    fn test_comment_spanning_lines_keeps_positions() {
        let tokens = lex("/* one\n two\n */ z");
        assert_eq!(tokens[0].lexeme(), "z");
        assert_eq!(tokens[0].position(), Position::new(3, 5));
    }

    #[test]
    fn test_division_operator() {
        let tokens = lex("a / b");
        assert!(tokens[1].kind().is_operator(OperatorId::Slash));
    }
}
