use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            utils::{end_of_input, expect, parse_comma_separated},
        },
    },
};

/// Parses a full expression.
///
/// Operands are combined strictly from left to right with no operator
/// precedence, so `a + b * c` means `(a + b) * c`. Only `+ - * /` continue
/// an expression; any other token ends it.
///
/// Grammar: `expression := primary (("+" | "-" | "*" | "/") primary)*`
///
/// # Example
/// ```
/// use chapa::{ast::Statement, interpreter::lexer::Operator, parse, scan};
///
/// let program = parse(&scan("chapa(1 + 2 * 3);").unwrap()).unwrap();
/// let Statement::Print(chapa::ast::Expr::BinaryOp { op, .. }) = &program.statements[0] else {
///     panic!("expected a print of a binary operation");
/// };
///
/// assert_eq!(*op, Operator::Star);
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_primary(tokens)?;

    while let Some((Token::Operator(op), _)) = tokens.peek()
          && op.is_arithmetic()
    {
        let op = *op;
        tokens.next();
        let right = parse_primary(tokens)?;
        left = Expr::binary(left, op, right);
    }

    Ok(left)
}

/// Parses a primary expression.
///
/// Grammar:
/// ```text
///     primary := string
///              | identifier
///              | identifier "(" [expression ("," expression)*] ")"
///              | number
///              | "(" expression ")"
/// ```
///
/// Parentheses only group; they leave no node behind.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Str(s), _)) => Ok(Expr::StringLiteral(s.clone())),
        Some((Token::Identifier(name), _)) => {
            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                return Ok(Expr::FunctionCall { name: name.clone(),
                                               arguments });
            }
            Ok(Expr::Variable(name.clone()))
        },
        Some((Token::Number(n), _)) => Ok(Expr::NumberLiteral(n.clone())),
        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen)?;
            Ok(expr)
        },
        Some((tok, line)) => Err(SyntaxError::UnexpectedToken { expected: "an expression".to_string(),
                                                                found:    tok.to_string(),
                                                                line:     *line, }),
        None => Err(end_of_input("an expression")),
    }
}
