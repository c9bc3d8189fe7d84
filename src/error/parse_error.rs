use thiserror::Error;

/// Represents all errors that can occur while parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Found a token the grammar does not allow here.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// The token encountered.
        found:    String,
        /// What the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input in the middle of a construct.
    #[error("Error on line {line}: Expected {expected}, found end of input.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// The line of the last token read.
        line:     usize,
    },
    /// The left side of `=` is not a variable.
    #[error("Error on line {line}: Left side of '=' must be a variable.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Parentheses, blocks, statements or operators nest past the parser's
    /// limits.
    #[error("Error on line {line}: Program is nested too deeply.")]
    NestingTooDeep {
        /// The line of the token that went one level too deep.
        line: usize,
    },
}

impl ParseError {
    /// Returns the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::InvalidAssignmentTarget { line }
            | Self::NestingTooDeep { line } => *line,
        }
    }
}
