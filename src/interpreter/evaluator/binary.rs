use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a binary operation between two integers.
    ///
    /// Arithmetic wraps on overflow like two's-complement hardware. Division
    /// truncates toward zero. Comparisons yield `1` for true and `0` for false,
    /// so their results can be stored and combined like any other integer.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] when dividing by `0`.
    ///
    /// # Example
    /// ```
    /// use ceval::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, -7, 2, 1).unwrap(), -3);
    /// assert_eq!(Context::eval_binary(BinaryOperator::LessEqual, 1, 1, 1).unwrap(), 1);
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1, 0, 1).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
        let value = match op {
            BinaryOperator::Add => left.wrapping_add(right),
            BinaryOperator::Sub => left.wrapping_sub(right),
            BinaryOperator::Mul => left.wrapping_mul(right),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                left.wrapping_div(right)
            },
            BinaryOperator::Equal => i64::from(left == right),
            BinaryOperator::NotEqual => i64::from(left != right),
            BinaryOperator::Less => i64::from(left < right),
            BinaryOperator::LessEqual => i64::from(left <= right),
            BinaryOperator::Greater => i64::from(left > right),
            BinaryOperator::GreaterEqual => i64::from(left >= right),
        };

        Ok(value)
    }
}
