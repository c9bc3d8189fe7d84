use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Consumes the next token, which must equal `expected`.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is a different one,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { found:    tok.to_string(),
                                                               expected: expected.to_string(),
                                                               line:     *line, }),
        None => Err(end_of_input(expected.to_string())),
    }
}

/// Parses a plain identifier and returns its name with its line.
///
/// Keywords are separate tokens, so they are rejected here.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok((name.clone(), *line)),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { found:    tok.to_string(),
                                                               expected: "identifier".to_string(),
                                                               line:     *line, }),
        None => Err(end_of_input("identifier")),
    }
}

/// Builds the error for running out of tokens.
///
/// The line is left at `0`; [`parse_program`] fills in the line of the last
/// token.
///
/// [`parse_program`]: crate::interpreter::parser::core::parse_program
pub(in crate::interpreter::parser) fn end_of_input(expected: impl Into<String>) -> ParseError {
    ParseError::UnexpectedEndOfInput { expected: expected.into(),
                                       line:     0, }
}

/// Steps one nesting level deeper than `depth`.
///
/// # Errors
/// Returns [`ParseError::NestingTooDeep`] at `line` once the new level would
/// pass [`MAX_NESTING_DEPTH`].
pub(in crate::interpreter::parser) const fn descend(depth: usize,
                                                    line: usize)
                                                    -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { line });
    }
    Ok(depth + 1)
}
