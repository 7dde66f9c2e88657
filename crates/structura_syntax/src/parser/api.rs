/// Parse a token sequence into a parse tree plus diagnostics, with the default [`ParserConfig`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token sequence produced by `structura_syntax::lexer`.
pub fn parse(tokens: &[Token]) -> ParseOutput {
    parse_with_config(tokens, &ParserConfig::default())
}

/// Parse a token sequence with an explicit configuration.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), max_depth = config.max_depth))]
pub fn parse_with_config(tokens: &[Token], config: &ParserConfig) -> ParseOutput {
    let output = Parser::with_config(tokens, config.clone()).parse();
    tracing::trace!(diagnostics = output.diagnostics.len(), "parse complete");
    output
}
