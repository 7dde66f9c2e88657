/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, its configuration, its output, and the top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
///
/// The [`Abort`] signal below means the parse is being abandoned; the diagnostic explaining why is already
/// recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Abort;

type PResult<T> = Result<T, Abort>;

/// Default maximum nesting depth of statements and factors.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting depth of statements and factors before the parse is abandoned.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Result of a parse: a best-effort tree plus every diagnostic, in source order.
///
/// ## Notes
/// - `tree` is `None` only when the parse was abandoned (nesting depth exceeded); `diagnostics` is then non-empty.
/// - An empty `diagnostics` list means the input is syntactically valid.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub tree: Option<Node>,
    pub diagnostics: Vec<SyntaxError>,
}

impl ParseOutput {
    pub fn is_success(&self) -> bool {
        self.tree.is_some() && self.diagnostics.is_empty()
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and recovers locally: a missing token leaves that piece absent, an unknown
///   statement or member start is reported and skipped.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'a> {
    tokens: Cow<'a, [Token]>,
    pos: usize,
    errors: Vec<SyntaxError>,
    depth: usize,
    config: ParserConfig,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token sequence.
    ///
    /// ## Parameters
    /// - `tokens`: Token sequence produced by `structura_syntax::lexer`. A missing end-of-input sentinel is
    ///   tolerated; one is appended internally.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: &'a [Token], config: ParserConfig) -> Self {
        let tokens = if tokens.last().is_some_and(Token::is_eof) {
            Cow::Borrowed(tokens)
        } else {
            let (position, offset) = tokens
                .last()
                .map(|t| (t.position(), t.span().end))
                .unwrap_or((Position::new(1, 1), 0));
            let mut owned = tokens.to_vec();
            owned.push(Token::eof(position, offset));
            Cow::Owned(owned)
        };

        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
            depth: 0,
            config,
        }
    }

    /// Parse the entire token sequence.
    ///
    /// Never fails: structural problems are returned as diagnostics next to the (possibly partial) tree.
    pub fn parse(mut self) -> ParseOutput {
        let tree = match self.program() {
            Ok(program) => {
                if !self.is_at_end() {
                    self.error("Unexpected tokens after end of program", "end of input");
                }
                Some(program)
            }
            Err(Abort) => {
                tracing::debug!(errors = self.errors.len(), "parse abandoned");
                None
            }
        };

        ParseOutput {
            tree,
            diagnostics: self.errors,
        }
    }
}
