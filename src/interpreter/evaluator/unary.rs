use crate::{
    ast::UnaryOperator,
    interpreter::evaluator::core::Context,
};

impl Context<'_> {
    /// Evaluates a unary operation on an integer.
    ///
    /// `Negate` wraps, so negating `i64::MIN` gives `i64::MIN`. `Identity`
    /// returns the operand unchanged.
    ///
    /// # Example
    /// ```
    /// use ceval::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Negate, 10), -10);
    /// assert_eq!(Context::eval_unary(UnaryOperator::Identity, -4), -4);
    /// ```
    #[must_use]
    pub const fn eval_unary(op: UnaryOperator, value: i64) -> i64 {
        match op {
            UnaryOperator::Negate => value.wrapping_neg(),
            UnaryOperator::Identity => value,
        }
    }
}
