use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_equality,
            statement::{parse_expression_statement, parse_return, parse_statement},
            utils::descend,
        },
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of parentheses, blocks, statements, prefix operators and
/// chained assignments the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Tallest expression tree a chain of binary operators may build.
///
/// Operator chains are parsed in a loop, so this bound is checked on the tree
/// itself rather than on the nesting depth.
pub const MAX_EXPRESSION_HEIGHT: usize = 512;

/// Parses a whole program: the body of the implicit outer block.
///
/// A program is a sequence of statements. The last one may be a bare
/// expression or a `return` without a terminating `;`, so `5 + 20 - 4`,
/// `int foo = 3; foo` and `int bar = 5; return bar` are all complete
/// programs. Every other statement keeps its `;`.
///
/// Grammar: `program := statement* (expression | "return" expression)?`
///
/// # Errors
/// Returns a [`ParseError`] naming the first token that does not fit the
/// grammar. Running out of tokens mid-construct reports the line of the last
/// token. Nesting past [`MAX_NESTING_DEPTH`] or an operator chain taller than
/// [`MAX_EXPRESSION_HEIGHT`] gives [`ParseError::NestingTooDeep`].
///
/// # Example
/// ```
/// use ceval::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let tokens = tokenize("int a = 1; a + 2").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[1], Statement::Expression { .. }));
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();

    let statements = match parse_top_level(&mut iter) {
        Ok(statements) => statements,
        Err(ParseError::UnexpectedEndOfInput { expected, line: 0 }) => {
            return Err(ParseError::UnexpectedEndOfInput { expected,
                                                          line: last_line });
        },
        Err(e) => return Err(e),
    };

    debug!(statements = statements.len(), "parsed program");
    Ok(statements)
}

/// Parses top-level statements until the tokens run out.
fn parse_top_level<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    while let Some((token, _)) = tokens.peek() {
        let statement = match token {
            Token::Return => parse_return(tokens, 0, true)?,
            Token::Int
            | Token::If
            | Token::While
            | Token::For
            | Token::LBrace
            | Token::Semicolon => parse_statement(tokens, 0)?,
            _ => parse_expression_statement(tokens, 0, true)?,
        };
        statements.push(statement);
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// `depth` is the number of nesting levels around the expression; every
/// parser below takes it and passes it on, adding one wherever the grammar
/// recurses.
///
/// Grammar: `expression := assignment`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_assignment(tokens, depth)
}

/// Parses an assignment.
///
/// Assignment is right-associative, so `a = b = 3` parses as `a = (b = 3)`.
/// The left side must be a variable reference.
///
/// Grammar: `assignment := equality ("=" assignment)?`
///
/// # Errors
/// Returns [`ParseError::InvalidAssignmentTarget`] when the left side of `=`
/// is anything other than a variable.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let target = parse_equality(tokens, depth)?;

    if let Some((Token::Equals, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let value = parse_assignment(tokens, descend(depth, line)?)?;
        return match target {
            Expr::Variable { name, .. } => Ok(Expr::Assign { name,
                                                             value: Box::new(value),
                                                             line }),
            _ => Err(ParseError::InvalidAssignmentTarget { line }),
        };
    }

    Ok(target)
}
