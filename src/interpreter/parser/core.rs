use crate::{
    ast::Block,
    error::SyntaxError,
    interpreter::{lexer::Token, parser::block::parse_block},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a complete token stream into the program block.
///
/// This is the entry point for parsing. The program is a single block that
/// runs until the end of input; a block terminator (`}`, `sampel` or
/// `nahitar`) with nothing open to close is rejected rather than ignored.
///
/// Grammar: `program := block`
///
/// # Parameters
/// - `tokens`: `(Token, line)` pairs as produced by the scanner.
///
/// # Returns
/// The root block of the program.
///
/// # Errors
/// - `UnexpectedToken` when a token does not fit the grammar.
/// - `UnexpectedEndOfInput` when input stops inside a construct. The
///   reported line is the last line that holds a token.
/// - `UnexpectedTrailingTokens` for leftovers after the program.
///
/// # Example
/// ```
/// use chapa::{ast::Statement, parse, scan};
///
/// let program = parse(&scan("he aahe x = 5; chapa(x);").unwrap()).unwrap();
/// assert_eq!(program.statements.len(), 2);
/// assert!(matches!(program.statements[1], Statement::Print(_)));
///
/// assert!(parse(&scan("chapa(1); }").unwrap()).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Block> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();

    let program = parse_block(&mut iter).map_err(|e| at_line(e, last_line))?;

    if let Some((token, line)) = iter.next() {
        return Err(SyntaxError::UnexpectedTrailingTokens { found: token.to_string(),
                                                           line:  *line, });
    }

    log::debug!("parsed {} top-level statements", program.statements.len());
    Ok(program)
}

/// Gives an end-of-input error the line where the input actually stopped.
fn at_line(error: SyntaxError, last_line: usize) -> SyntaxError {
    match error {
        SyntaxError::UnexpectedEndOfInput { expected, .. } => {
            SyntaxError::UnexpectedEndOfInput { expected,
                                                line: last_line }
        },
        other => other,
    }
}
