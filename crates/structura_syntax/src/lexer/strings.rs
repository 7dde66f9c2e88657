//! String literal scanning.

use super::*;

impl<'a> Lexer<'a> {
    /// Scan a string literal whose opening `quote` has already been consumed.
    ///
    /// ## Notes
    /// - Supported escapes: `\n`, `\t`, `\r`, `\\`, and the literal's own delimiter.
    /// - The token lexeme is the decoded content re-wrapped in `quote`; the span covers the raw source text.
    /// - An unsupported escape ends the literal right after the escape character and yields an error token;
    ///   scanning resumes with whatever follows.
    pub(super) fn scan_string(&mut self, start: usize, start_pos: Position, quote: char) {
        let mut content = String::new();

        loop {
            match self.advance() {
                None => {
                    self.add_error(LexErrorKind::UnterminatedString, start, start_pos);
                    return;
                }
                Some(c) if c == quote => break,
                Some('\\') => match self.advance() {
                    Some('n') => content.push('\n'),
                    Some('t') => content.push('\t'),
                    Some('r') => content.push('\r'),
                    Some('\\') => content.push('\\'),
                    Some(c) if c == quote => content.push(c),
                    Some(c) => {
                        self.add_error(LexErrorKind::InvalidEscape(c), start, start_pos);
                        return;
                    }
                    None => {
                        self.add_error(LexErrorKind::UnterminatedString, start, start_pos);
                        return;
                    }
                },
                Some(c) => content.push(c),
            }
        }

        let lexeme = format!("{quote}{content}{quote}");
        self.tokens.push(Token::new(
            TokenKind::Str(quote),
            lexeme,
            start_pos,
            Span::new(start, self.current_pos),
        ));
    }
}
