use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Read or wrote a variable that was never declared.
    #[error("Error on line {line}: Undeclared variable '{name}'.")]
    UndeclaredVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndeclaredVariable { line, .. } | Self::DivisionByZero { line } => *line,
        }
    }
}
