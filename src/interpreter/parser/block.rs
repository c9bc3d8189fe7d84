use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, utils::end_of_input},
    },
};

/// Parses the statements of a braced block.
///
/// The opening `{` must already be consumed. Parsing continues until the
/// matching `}`, which is consumed as well. The statements are parsed at
/// `depth`, which the caller has already stepped past the braces.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Errors
/// Returns a `ParseError` if a statement fails to parse or the input ends
/// before the closing brace.
pub fn parse_block_body<'a, I>(tokens: &mut Peekable<I>,
                              depth: usize)
                              -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                return Ok(statements);
            },
            Some(_) => statements.push(parse_statement(tokens, depth)?),
            None => return Err(end_of_input(Token::RBrace.to_string())),
        }
    }
}
