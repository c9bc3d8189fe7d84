use crate::{
    ast::{Expr, ForLoop, Statement},
    interpreter::evaluator::core::{Context, ExecResult},
};

/// Maps an integer to a condition result: nonzero is true.
///
/// # Example
/// ```
/// use ceval::interpreter::evaluator::control_flow::is_truthy;
///
/// assert!(is_truthy(-3));
/// assert!(!is_truthy(0));
/// ```
#[must_use]
pub const fn is_truthy(value: i64) -> bool {
    value != 0
}

impl Context<'_> {
    /// Executes an `if` statement.
    ///
    /// Neither branch produces a value for the enclosing block.
    pub(crate) fn exec_if(&mut self,
                          condition: &Expr,
                          then_branch: &Statement,
                          else_branch: Option<&Statement>)
                          -> ExecResult<Option<i64>> {
        if is_truthy(self.eval(condition)?) {
            self.execute(then_branch)?;
        } else if let Some(else_branch) = else_branch {
            self.execute(else_branch)?;
        }

        Ok(None)
    }

    /// Executes a `while` loop. The body may run zero times.
    pub(crate) fn exec_while(&mut self,
                             condition: &Expr,
                             body: &Statement)
                             -> ExecResult<Option<i64>> {
        while is_truthy(self.eval(condition)?) {
            self.execute(body)?;
        }

        Ok(None)
    }

    /// Executes a `for` loop.
    ///
    /// `init` runs once. Each iteration checks the condition (absent means
    /// true), runs the body, then runs `step`.
    pub(crate) fn exec_for(&mut self, for_loop: &ForLoop) -> ExecResult<Option<i64>> {
        if let Some(init) = &for_loop.init {
            self.eval(init)?;
        }

        loop {
            if let Some(condition) = &for_loop.condition
               && !is_truthy(self.eval(condition)?)
            {
                break;
            }

            self.execute(&for_loop.body)?;

            if let Some(step) = &for_loop.step {
                self.eval(step)?;
            }
        }

        Ok(None)
    }
}
