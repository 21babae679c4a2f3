use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token, which must equal `expected`.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns a `SyntaxError` describing both the expected and the found token,
/// or `UnexpectedEndOfInput` when the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(SyntaxError::UnexpectedToken { expected: expected.to_string(),
                                                                found:    tok.to_string(),
                                                                line:     *line, }),
        None => Err(end_of_input(expected.to_string())),
    }
}

/// Consumes the next token if it equals `token`.
///
/// Used for punctuation the grammar tolerates but does not require.
pub(in crate::interpreter::parser) fn skip_optional<'a, I>(tokens: &mut Peekable<I>,
                                                           token: &Token)
    where I: Iterator<Item = &'a (Token, usize)>
{
    if tokens.peek().is_some_and(|(tok, _)| tok == token) {
        tokens.next();
    }
}

/// Builds the error for a stream that ended too early.
///
/// The line is filled in by [`parse`](crate::interpreter::parser::core::parse),
/// which knows where the input stopped.
pub(in crate::interpreter::parser) fn end_of_input(expected: impl Into<String>) -> SyntaxError {
    SyntaxError::UnexpectedEndOfInput { expected: expected.into(),
                                        line:     0, }
}

/// Parses a comma-separated list of items until a closing token.
///
/// Shared by parameter lists and call argument lists. It repeatedly calls
/// `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, line)) => {
                return Err(SyntaxError::UnexpectedToken { expected: format!("',' or {closing}"),
                                                          found:    tok.to_string(),
                                                          line:     *line, });
            },
            None => return Err(end_of_input(format!("',' or {closing}"))),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `SyntaxError` if the next token is not an identifier or the
/// input ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => Err(SyntaxError::UnexpectedToken { expected: "an identifier".to_string(),
                                                                found:    tok.to_string(),
                                                                line:     *line, }),
        None => Err(end_of_input("an identifier")),
    }
}
