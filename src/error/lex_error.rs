use thiserror::Error;

/// Represents all errors that can occur while tokenizing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no valid token.
    #[error("Error on line {line}: Unrecognized character '{text}'.")]
    UnrecognizedCharacter {
        /// The offending source text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `/*` without a matching `*/`.
    #[error("Error on line {line}: Unterminated block comment.")]
    UnterminatedComment {
        /// The line the comment starts on.
        line: usize,
    },
    /// An integer literal that does not fit in 64 bits.
    #[error("Error on line {line}: Integer literal {text} is too large.")]
    IntegerTooLarge {
        /// The literal as written.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl LexError {
    /// Returns the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { line, .. }
            | Self::UnterminatedComment { line }
            | Self::IntegerTooLarge { line, .. } => *line,
        }
    }
}
