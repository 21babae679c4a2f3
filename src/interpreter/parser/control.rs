use std::iter::Peekable;

use crate::{
    ast::{Condition, Expr, Statement},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_body,
            core::ParseResult,
            statement::{parse_assignment_clause, parse_variable_declaration},
            utils::{end_of_input, expect, skip_optional},
        },
    },
};

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     jar ( <condition> ) <body>
///     nahitar <body>
/// ```
///
/// # Errors
/// - `UnexpectedToken` if the parentheses around the condition are missing.
/// - Propagates any errors from the condition and the branches.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::If)?;
    let condition = parse_header(tokens)?;
    let then_branch = parse_body(tokens)?;

    let else_branch = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();
            Some(parse_body(tokens)?)
        },
        _ => None,
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch })
}

/// Parses a `while` loop: `joparyant ( <condition> ) <body> sampel`.
pub fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::While)?;
    let condition = parse_header(tokens)?;
    let body = parse_body(tokens)?;
    expect(tokens, &Token::EndWhile)?;

    Ok(Statement::While { condition, body })
}

/// Parses a `for` loop.
///
/// Syntax:
/// ```text
///     paryant ( he aahe <name> = <expr>; <condition>; <name> = <expr> ) <body> sampel
/// ```
///
/// The declaration brings its own `;`, and a second one right after it is
/// accepted too. The `;` after the increment is optional. The loop is closed
/// by the same `sampel` as a `joparyant` loop.
///
/// # Errors
/// Returns a `SyntaxError` if the initializer is not a variable
/// declaration, the increment is not an assignment, or any delimiter is
/// missing.
pub fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::For)?;
    expect(tokens, &Token::LParen)?;

    let init = parse_variable_declaration(tokens)?;
    skip_optional(tokens, &Token::Semicolon);

    let condition = parse_condition(tokens)?;
    expect(tokens, &Token::Semicolon)?;

    let increment = parse_assignment_clause(tokens)?;
    skip_optional(tokens, &Token::Semicolon);
    expect(tokens, &Token::RParen)?;

    let body = parse_body(tokens)?;
    expect(tokens, &Token::EndWhile)?;

    Ok(Statement::For { init: Box::new(init),
                        condition,
                        increment: Box::new(increment),
                        body })
}

/// Parses `( <condition> )`.
fn parse_header<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Condition>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::LParen)?;
    let condition = parse_condition(tokens)?;
    expect(tokens, &Token::RParen)?;

    Ok(condition)
}

/// Parses a single comparison.
///
/// Both sides are a number or a variable name; arithmetic and calls are not
/// allowed here. Any operator token is accepted by the grammar, only the
/// evaluator decides whether it compares.
///
/// Grammar: `condition := comparand operator comparand`
pub fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Condition>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = parse_comparand(tokens)?;

    let op = match tokens.next() {
        Some((Token::Operator(op), _)) => *op,
        Some((tok, line)) => {
            return Err(SyntaxError::UnexpectedToken { expected: "a comparison operator".to_string(),
                                                      found:    tok.to_string(),
                                                      line:     *line, });
        },
        None => return Err(end_of_input("a comparison operator")),
    };

    let right = parse_comparand(tokens)?;

    Ok(Condition { left, op, right })
}

fn parse_comparand<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(n), _)) => Ok(Expr::NumberLiteral(n.clone())),
        Some((Token::Identifier(name), _)) => Ok(Expr::Variable(name.clone())),
        Some((tok, line)) => Err(SyntaxError::UnexpectedToken { expected: "a number or identifier".to_string(),
                                                                found:    tok.to_string(),
                                                                line:     *line, }),
        None => Err(end_of_input("a number or identifier")),
    }
}
