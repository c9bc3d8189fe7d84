use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block_body,
            core::{ParseResult, parse_expression},
            utils::{descend, end_of_input, expect_token},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (negation) and `+` (identity). Unary
/// operators nest, so `- -+10` parses as `-(-(+10))`. Each operator counts as
/// one nesting level.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Plus, _)) => UnaryOperator::Identity,
        _ => return parse_primary(tokens, depth),
    };

    let line = tokens.next().map_or(0, |(_, line)| *line);
    let expr = parse_unary(tokens, descend(depth, line)?)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := integer
///              | identifier
///              | "(" expression ")"
///              | "(" "{" statement* "}" ")"
/// ```
///
/// # Errors
/// Returns a `ParseError` for any other token or for the end of input.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = tokens.peek()
                              .ok_or_else(|| end_of_input("expression"))?;
    let line = *line;

    match token {
        Token::Integer(value) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Literal { value, line })
        },
        Token::Identifier(name) => {
            let name = name.clone();
            tokens.next();
            Ok(Expr::Variable { name, line })
        },
        Token::LParen => {
            let mut lookahead = tokens.clone();
            lookahead.next();
            if let Some((Token::LBrace, _)) = lookahead.peek() {
                parse_statement_expression(tokens, depth)
            } else {
                parse_grouping(tokens, depth)
            }
        },
        tok => Err(ParseError::UnexpectedToken { found: tok.to_string(),
                                                 expected: "expression".to_string(),
                                                 line }),
    }
}

/// Parses a parenthesized expression `( expr )`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens, descend(depth, line)?)?;
    expect_token(tokens, &Token::RParen)?;
    Ok(expr)
}

/// Parses a statement expression `({ statement* })`.
///
/// The value of the expression is decided at evaluation time: it is the
/// value of the last statement when that is an expression statement.
///
/// # Example
/// ```
/// use ceval::run;
///
/// assert_eq!(run("({ 1; {2;} 3; })").unwrap(), 3);
/// assert_eq!(run("({ int a = 2; a * ({ 5; }); })").unwrap(), 10);
/// ```
fn parse_statement_expression<'a, I>(tokens: &mut Peekable<I>,
                                     depth: usize)
                                     -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::LParen)?;
    expect_token(tokens, &Token::LBrace)?;

    let statements = parse_block_body(tokens, descend(depth, line)?)?;
    expect_token(tokens, &Token::RParen)?;

    Ok(Expr::Block { statements, line })
}
