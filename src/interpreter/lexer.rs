use std::fmt;

use logos::{FilterResult, Logos};
use tracing::debug;

use crate::error::LexError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFault)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `int`
    #[token("int")]
    Int,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// Identifier tokens; variable names such as `x` or `foo123`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```text
    /// /* Block comments. */
    /// ```
    #[token("/*", skip_block_comment)]
    BlockComment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Integer(n) => return write!(f, "integer {n}"),
            Self::Identifier(name) => return write!(f, "identifier '{name}'"),
            Self::Int => "int",
            Self::Return => "return",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::For => "for",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equals => "=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Semicolon => ";",
            Self::Comment | Self::BlockComment => "comment",
            Self::NewLine => "newline",
            Self::Ignored => "whitespace",
        };
        write!(f, "'{text}'")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Why the lexer rejected a piece of input.
///
/// Logos reports this without position information; [`tokenize`] attaches the
/// slice and line to build a [`LexError`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexFault {
    /// No token matches.
    #[default]
    Unrecognized,
    /// `/*` with no closing `*/`.
    UnterminatedComment,
    /// A digit run that overflows `i64`.
    IntegerTooLarge,
}

impl LexFault {
    fn into_error(self, slice: &str, line: usize) -> LexError {
        match self {
            Self::Unrecognized => LexError::UnrecognizedCharacter { text: slice.to_string(),
                                                                    line },
            Self::UnterminatedComment => LexError::UnterminatedComment { line },
            Self::IntegerTooLarge => LexError::IntegerTooLarge { text: slice.to_string(),
                                                                 line },
        }
    }
}

/// Tokenizes a whole source string.
///
/// Every token is paired with the line it starts on. Comments and whitespace
/// are dropped. The first invalid piece of input stops tokenization.
///
/// # Errors
/// Returns a [`LexError`] for an unrecognized character, an unterminated block
/// comment or an integer literal that does not fit in an `i64`.
///
/// # Example
/// ```
/// use ceval::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("a <= 10 // limit").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("a".into()), 1),
///                 (Token::LessEqual, 1),
///                 (Token::Integer(10), 1)]);
///
/// assert!(tokenize("a = $;").is_err());
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<(Token, usize)>> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(fault) => return Err(fault.into_error(lexer.slice(), lexer.extras.line)),
        }
    }

    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexFault> {
    lex.slice().parse().map_err(|_| LexFault::IntegerTooLarge)
}

/// Skips a block comment starting at `/*`.
///
/// Comments do not nest: the first `*/` closes the comment. Newlines inside
/// the comment still count towards the line number.
fn skip_block_comment(lex: &mut logos::Lexer<Token>) -> FilterResult<(), LexFault> {
    let remainder = lex.remainder();
    let Some(end) = remainder.find("*/") else {
        return FilterResult::Error(LexFault::UnterminatedComment);
    };

    lex.extras.line += remainder[..end].matches('\n').count();
    lex.bump(end + 2);
    FilterResult::Skip
}
