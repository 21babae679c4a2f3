use std::iter::Peekable;

use crate::{
    ast::{Expr, FunctionDecl, Statement},
    error::SyntaxError,
    interpreter::{
        lexer::{Operator, Token},
        parser::{
            block::parse_block,
            control::{parse_for, parse_if, parse_while},
            core::ParseResult,
            expression::parse_expression,
            utils::{end_of_input, expect, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// The leading token decides the construct:
/// - `he aahe` → variable declaration,
/// - `chapa` → print,
/// - `jar`, `joparyant`, `paryant` → control flow,
/// - `parat` → return,
/// - an identifier → assignment,
/// - `karya` → function declaration.
///
/// Anything else cannot start a statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::VarDecl, _)) => parse_variable_declaration(tokens),
        Some((Token::Print, _)) => parse_print(tokens),
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::While, _)) => parse_while(tokens),
        Some((Token::For, _)) => parse_for(tokens),
        Some((Token::Return, _)) => parse_return(tokens),
        Some((Token::Identifier(_), _)) => parse_assignment(tokens),
        Some((Token::Function, _)) => parse_function_declaration(tokens),
        Some((tok, line)) => Err(SyntaxError::UnexpectedToken { expected: "a statement".to_string(),
                                                                found:    tok.to_string(),
                                                                line:     *line, }),
        None => Err(end_of_input("a statement")),
    }
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `he aahe <identifier> = <expression>;`.
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - the keyword or identifier is missing,
/// - `=` is missing,
/// - the expression is malformed,
/// - the terminating `;` is missing.
pub fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::VarDecl)?;
    let (name, value) = parse_binding(tokens)?;
    expect(tokens, &Token::Semicolon)?;

    Ok(Statement::VariableDeclaration { name, value })
}

/// Parses an assignment statement of the form `<identifier> = <expression>;`.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let assignment = parse_assignment_clause(tokens)?;
    expect(tokens, &Token::Semicolon)?;

    Ok(assignment)
}

/// Parses `<identifier> = <expression>` without the trailing `;`.
///
/// This is the increment clause of a `paryant` header, where the `;` is
/// optional.
pub fn parse_assignment_clause<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (name, value) = parse_binding(tokens)?;

    Ok(Statement::Assignment { name, value })
}

fn parse_binding<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(String, Expr)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::Operator(Operator::Assign))?;
    let value = parse_expression(tokens)?;

    Ok((name, value))
}

/// Parses `chapa ( <expression> ) ;`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::Print)?;
    expect(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    expect(tokens, &Token::Semicolon)?;

    Ok(Statement::Print(expr))
}

/// Parses `parat <expression> ;`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::Return)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon)?;

    Ok(Statement::Return(expr))
}

/// Parses a function declaration.
///
/// Grammar:
/// `function := "karya" identifier "(" [identifier ("," identifier)*] ")" "{" block "}"`
///
/// # Errors
/// Returns a `SyntaxError` if the name, a parameter, a separator or either
/// pair of brackets is missing, or if the body fails to parse.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::Function)?;
    let name = parse_identifier(tokens)?;

    expect(tokens, &Token::LParen)?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    expect(tokens, &Token::LBrace)?;
    let body = parse_block(tokens)?;
    expect(tokens, &Token::RBrace)?;

    Ok(Statement::Function(FunctionDecl { name, params, body }))
}
