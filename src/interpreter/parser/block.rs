use std::iter::Peekable;

use crate::{
    ast::Block,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::expect,
        },
    },
};

/// Parses statements until a block terminator or the end of input.
///
/// The terminators are `nahitar`, `sampel` and `}`. They are left in the
/// stream for the enclosing construct to consume.
///
/// Grammar: `block := statement*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first statement.
///
/// # Returns
/// The statements in source order.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut statements = Vec::new();

    while let Some((token, _)) = tokens.peek() {
        if matches!(token, Token::Else | Token::EndWhile | Token::RBrace) {
            break;
        }
        statements.push(parse_statement(tokens)?);
    }

    Ok(Block::new(statements))
}

/// Parses the body of an if/else branch or a loop.
///
/// A body is either wrapped in braces, in which case it ends at the matching
/// `}`, or bare, in which case it runs to the next block terminator.
///
/// Grammar: `body := "{" block "}" | block`
pub fn parse_body<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::LBrace, _)) = tokens.peek() {
        tokens.next();
        let block = parse_block(tokens)?;
        expect(tokens, &Token::RBrace)?;
        return Ok(block);
    }

    parse_block(tokens)
}
