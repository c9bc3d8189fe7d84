/// Core evaluation logic and context management.
///
/// Contains the evaluation context, expression and statement dispatch, and the
/// unwinding used by `return`.
pub mod core;

/// Binary operator evaluation.
///
/// Implements integer arithmetic and the comparison operators.
pub mod binary;

/// Unary operator evaluation.
pub mod unary;

/// Statement lists: braced blocks, statement expressions and whole programs.
pub mod block;

/// Evaluation of `if`, `while` and `for`.
///
/// Conditions follow C truthiness: any nonzero value is true.
pub mod control_flow;
