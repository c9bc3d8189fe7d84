use tracing::{debug, trace};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::environment::Environment,
};

/// Result type used by the evaluator.
///
/// All public evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Why evaluation of a subtree stopped before producing a value.
///
/// `return` travels the same path as errors so it can leave loops, blocks and
/// statement expressions at any depth. It is turned back into a value at the
/// top of the program.
#[derive(Debug)]
pub(crate) enum Unwind {
    /// A runtime error; aborts the run.
    Error(RuntimeError),
    /// A `return` statement with its value.
    Return(i64),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type used internally while executing statements.
pub(crate) type ExecResult<T> = Result<T, Unwind>;

/// Stores the runtime evaluation context.
///
/// The context borrows the [`Environment`] for the duration of one run; all
/// variable reads and writes go through it.
///
/// # Example
/// ```
/// use ceval::{
///     interpreter::{environment::Environment, evaluator::core::Context},
///     parse,
/// };
///
/// let program = parse("int a = 4; a = a * 2; a").unwrap();
/// let mut env = Environment::new();
///
/// let result = Context::new(&mut env).evaluate(&program).unwrap();
/// assert_eq!(result, 8);
/// assert_eq!(env.get("a", 1).unwrap(), 8);
/// ```
pub struct Context<'env> {
    /// Variable storage for this run.
    pub environment: &'env mut Environment,
}

impl<'env> Context<'env> {
    /// Creates a context that reads and writes `environment`.
    #[must_use]
    pub const fn new(environment: &'env mut Environment) -> Self {
        Self { environment }
    }

    /// Evaluates a whole program.
    ///
    /// Statements run in order. The result is the value of the last statement
    /// when that is an expression statement, `0` otherwise, or the value of the
    /// first `return` reached.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised; nothing after it runs.
    pub fn evaluate(&mut self, statements: &[Statement]) -> EvalResult<i64> {
        let result = match self.run_statements(statements) {
            Ok(value) | Err(Unwind::Return(value)) => value,
            Err(Unwind::Error(e)) => return Err(e),
        };

        debug!(result, "evaluation finished");
        Ok(result)
    }

    /// Evaluates an expression and returns its value.
    ///
    /// Operands are evaluated left to right. Assignment writes through the
    /// environment and yields the assigned value, which makes `a = b = 3`
    /// work.
    pub(crate) fn eval(&mut self, expr: &Expr) -> ExecResult<i64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, line } => Ok(self.environment.get(name, *line)?),
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval(expr)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_binary(*op, left, right, *line)?)
            },
            Expr::Assign { name, value, line } => {
                let value = self.eval(value)?;
                self.environment.set(name, value, *line)?;
                Ok(value)
            },
            Expr::Block { statements, .. } => self.run_statements(statements),
        }
    }

    /// Executes a single statement.
    ///
    /// # Returns
    /// `Some(value)` for an expression statement, `None` for everything else.
    /// Only the former can supply the value of an enclosing block.
    pub(crate) fn execute(&mut self, statement: &Statement) -> ExecResult<Option<i64>> {
        trace!(line = statement.line(), "executing statement");

        match statement {
            Statement::Expression { expr, .. } => self.eval(expr).map(Some),
            Statement::Declaration { name, value, .. } => {
                let value = match value {
                    Some(init) => self.eval(init)?,
                    None => 0,
                };
                self.environment.declare(name.as_str(), value);
                Ok(None)
            },
            Statement::Block { statements, .. } => {
                self.exec_block(statements)?;
                Ok(None)
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => self.exec_if(condition, then_branch, else_branch.as_deref()),
            Statement::While { condition, body, .. } => self.exec_while(condition, body),
            Statement::For(for_loop) => self.exec_for(for_loop),
            Statement::Return { value, .. } => {
                let value = self.eval(value)?;
                Err(Unwind::Return(value))
            },
        }
    }
}
