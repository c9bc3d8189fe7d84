use std::iter::Peekable;

use crate::{
    ast::{Expr, ForLoop, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block_body,
            core::{ParseResult, parse_expression},
            utils::{descend, end_of_input, expect_token, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a declaration (`int x;`, `int x = 3;`),
/// - a `return` statement,
/// - a braced block,
/// - an `if`, `while` or `for` statement,
/// - the empty statement `;`,
/// - an expression followed by `;`.
///
/// The leading token decides which construct is parsed. Blocks and the bodies
/// of `if`, `while` and `for` sit one nesting level below `depth`.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `depth`: Nesting level of the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.peek() else {
        return Err(end_of_input("statement"));
    };
    let line = *line;

    match token {
        Token::Int => parse_declaration(tokens, depth),
        Token::Return => parse_return(tokens, depth, false),
        Token::If => parse_if(tokens, depth),
        Token::While => parse_while(tokens, depth),
        Token::For => parse_for(tokens, depth),
        Token::LBrace => {
            tokens.next();
            let statements = parse_block_body(tokens, descend(depth, line)?)?;
            Ok(Statement::Block { statements, line })
        },
        Token::Semicolon => {
            tokens.next();
            Ok(Statement::Block { statements: Vec::new(),
                                  line })
        },
        _ => parse_expression_statement(tokens, depth, false),
    }
}

/// Parses an expression statement `expr ;`.
///
/// With `terminator_optional` set, the `;` may be left out when the
/// expression is the last thing in the input. The top-level program uses this
/// so a bare expression such as `5 + 20 - 4` is a valid program.
///
/// # Errors
/// Returns a `ParseError` if the expression is malformed or is followed by
/// anything other than `;`.
pub fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>,
                                         depth: usize,
                                         terminator_optional: bool)
                                         -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, depth)?;
    let line = expr.line();

    expect_terminator(tokens, terminator_optional)?;
    Ok(Statement::Expression { expr, line })
}

/// Parses `return <expression> ;`.
///
/// `terminator_optional` works as in [`parse_expression_statement`]: the
/// top-level program lets a final `return` drop its `;`.
///
/// # Example
/// ```
/// use ceval::run;
///
/// assert_eq!(run("int foo123=3; int bar=5; return foo123+bar").unwrap(), 8);
/// assert!(run("({ return 1 })").is_err());
/// ```
pub fn parse_return<'a, I>(tokens: &mut Peekable<I>,
                           depth: usize,
                           terminator_optional: bool)
                           -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Return)?;
    let value = parse_expression(tokens, depth)?;

    expect_terminator(tokens, terminator_optional)?;
    Ok(Statement::Return { value, line })
}

/// Parses a declaration of the form `int <identifier> ( = <expression> )? ;`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is missing or is a keyword,
/// - the initializer is malformed,
/// - the terminating `;` is missing.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Int)?;
    let (name, _) = parse_identifier(tokens)?;

    let value = if let Some((Token::Equals, _)) = tokens.peek() {
        tokens.next();
        Some(parse_expression(tokens, depth)?)
    } else {
        None
    };

    expect_token(tokens, &Token::Semicolon)?;
    Ok(Statement::Declaration { name, value, line })
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if ( <condition> ) <statement>
///     if ( <condition> ) <statement> else <statement>
/// ```
/// An `else` always belongs to the nearest `if` without one: the inner `if` is
/// parsed first and takes the `else` when it sees it.
///
/// # Example
/// ```
/// use ceval::run;
///
/// // The else binds to `if (0)`.
/// let source = "int x = 1; if (1) if (0) x = 2; else x = 3; x";
/// assert_eq!(run(source).unwrap(), 3);
///
/// let source = "int x = 1; if (0) if (0) x = 2; else x = 3; x";
/// assert_eq!(run(source).unwrap(), 1);
/// ```
fn parse_if<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::If)?;
    let inner = descend(depth, line)?;

    let condition = parse_condition(tokens, inner)?;
    let then_branch = Box::new(parse_statement(tokens, inner)?);

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(Box::new(parse_statement(tokens, inner)?))
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

/// Parses `while ( <condition> ) <statement>`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::While)?;
    let inner = descend(depth, line)?;

    let condition = parse_condition(tokens, inner)?;
    let body = Box::new(parse_statement(tokens, inner)?);

    Ok(Statement::While { condition,
                          body,
                          line })
}

/// Parses `for ( <init>? ; <condition>? ; <step>? ) <statement>`.
///
/// Each clause of the header may be left empty; `for (;;)` loops until a
/// `return` leaves it.
fn parse_for<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::For)?;
    let inner = descend(depth, line)?;
    expect_token(tokens, &Token::LParen)?;

    let init = parse_optional_expression(tokens, inner, &Token::Semicolon)?;
    let condition = parse_optional_expression(tokens, inner, &Token::Semicolon)?;
    let step = parse_optional_expression(tokens, inner, &Token::RParen)?;
    let body = Box::new(parse_statement(tokens, inner)?);

    Ok(Statement::For(ForLoop { init,
                                condition,
                                step,
                                body,
                                line }))
}

/// Parses a parenthesized condition `( <expression> )`.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens, depth)?;
    expect_token(tokens, &Token::RParen)?;
    Ok(condition)
}

/// Parses an expression that may be absent, then consumes `terminator`.
fn parse_optional_expression<'a, I>(tokens: &mut Peekable<I>,
                                    depth: usize,
                                    terminator: &Token)
                                    -> ParseResult<Option<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((tok, _)) if tok == terminator => {
            tokens.next();
            Ok(None)
        },
        Some(_) => {
            let expr = parse_expression(tokens, depth)?;
            expect_token(tokens, terminator)?;
            Ok(Some(expr))
        },
        None => Err(end_of_input(terminator.to_string())),
    }
}

/// Consumes the `;` ending a statement, unless it may be left out and the
/// input has run out.
fn expect_terminator<'a, I>(tokens: &mut Peekable<I>,
                            terminator_optional: bool)
                            -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if !(terminator_optional && tokens.peek().is_none()) {
        expect_token(tokens, &Token::Semicolon)?;
    }
    Ok(())
}
