use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{MAX_EXPRESSION_HEIGHT, ParseResult},
            unary::parse_unary,
        },
    },
};

/// Parses equality expressions.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, depth, parse_relational, |op| {
        matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    })
}

/// Parses relational expressions.
///
/// Grammar: `relational := additive (("<" | "<=" | ">" | ">=") additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, depth, parse_additive, |op| {
        matches!(op,
                 BinaryOperator::Less
                 | BinaryOperator::LessEqual
                 | BinaryOperator::Greater
                 | BinaryOperator::GreaterEqual)
    })
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, depth, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication and division expressions.
///
/// Grammar: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, depth, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    })
}

/// Parses one precedence level of left-associative binary operators.
///
/// Operands are parsed with `operand`; any operator accepted by `accepts`
/// folds the tree to the left, so `a - b - c` becomes `(a - b) - c`.
///
/// Each operator adds a level to the tree without recursing, so the height of
/// the folded tree is tracked here and capped at [`MAX_EXPRESSION_HEIGHT`].
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 depth: usize,
                                 operand: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>,
                                 accepts: fn(BinaryOperator) -> bool)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = operand(tokens, depth)?;
    let mut height = None;

    while let Some((token, line)) = tokens.peek() {
        let op = match token_to_binary_operator(token) {
            Some(op) if accepts(op) => op,
            _ => break,
        };

        let line = *line;
        tokens.next();

        let right = operand(tokens, depth)?;
        let folded = height.unwrap_or_else(|| left.height()).max(right.height()) + 1;
        if folded > MAX_EXPRESSION_HEIGHT {
            return Err(ParseError::NestingTooDeep { line });
        }
        height = Some(folded);

        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use ceval::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::LessEqual),
///            Some(BinaryOperator::LessEqual));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}
