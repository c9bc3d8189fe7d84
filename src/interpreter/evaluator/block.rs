use crate::{
    ast::Statement,
    interpreter::evaluator::core::{Context, ExecResult},
};

impl Context<'_> {
    /// Runs a statement list and returns its value.
    ///
    /// The value is that of the last statement if it is an expression
    /// statement. A list that ends in anything else, or is empty, yields `0`.
    /// Statement expressions and whole programs both use this rule.
    pub(crate) fn run_statements(&mut self, statements: &[Statement]) -> ExecResult<i64> {
        let mut last = None;
        for statement in statements {
            last = self.execute(statement)?;
        }

        Ok(last.unwrap_or(0))
    }

    /// Runs a braced block for its effect only.
    ///
    /// Blocks share the enclosing scope, so declarations inside stay visible
    /// afterwards.
    pub(crate) fn exec_block(&mut self, statements: &[Statement]) -> ExecResult<()> {
        for statement in statements {
            self.execute(statement)?;
        }

        Ok(())
    }
}
