use thiserror::Error;

/// Lexing errors.
///
/// Raised while turning source text into tokens: characters that belong to no
/// token, block comments that never close, and integer literals that do not fit
/// in an `i64`.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens: unexpected tokens, premature end of input, assignments into
/// something that is not a variable and programs nested too deeply.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised during evaluation: use of an undeclared variable
/// and division by zero.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a single `run` call.
///
/// Every phase has its own error enum; this type wraps them so callers can
/// tell an evaluator error apart from a wrong result and still match on the
/// concrete kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token sequence is not a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl EvalError {
    /// Returns the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line(),
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}
