use std::collections::HashMap;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Variable storage for one evaluation.
///
/// A single flat scope maps names to `i64` cells. Declarations anywhere in a
/// program, including inside nested blocks, stay visible until the end of the
/// run. Declaring an existing name overwrites its value.
///
/// `run` creates a fresh environment per call. Callers that need globals
/// shared across programs build one themselves and pass it to
/// [`run_with_environment`](crate::run_with_environment).
///
/// # Example
/// ```
/// use ceval::interpreter::environment::Environment;
///
/// let mut env = Environment::new();
/// env.declare("a", 1);
/// env.set("a", 5, 1).unwrap();
///
/// assert_eq!(env.get("a", 1).unwrap(), 5);
/// assert!(env.get("b", 1).is_err());
/// assert!(env.set("b", 1, 1).is_err());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, i64>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name` with `value`, replacing any earlier declaration.
    pub fn declare(&mut self, name: impl Into<String>, value: i64) {
        self.variables.insert(name.into(), value);
    }

    /// Returns the value stored for `name`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndeclaredVariable`] at `line` if `name` was
    /// never declared.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<i64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| undeclared(name, line))
    }

    /// Overwrites the value of an existing variable.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndeclaredVariable`] at `line` if `name` was
    /// never declared. Assignment does not create variables.
    pub fn set(&mut self, name: &str, value: i64, line: usize) -> EvalResult<()> {
        let cell = self.variables
                       .get_mut(name)
                       .ok_or_else(|| undeclared(name, line))?;
        *cell = value;
        Ok(())
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

fn undeclared(name: &str, line: usize) -> RuntimeError {
    RuntimeError::UndeclaredVariable { name: name.to_string(),
                                       line }
}
