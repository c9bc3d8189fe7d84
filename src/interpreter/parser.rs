/// Entry points: whole programs and full expressions.
///
/// Contains the top-level program loop, the assignment level of the
/// expression grammar, and the shared result type.
pub mod core;

/// Unary operators and primary expressions.
///
/// Handles prefix `+`/`-`, literals, variables, parenthesized expressions and
/// statement expressions `({ ... })`.
pub mod unary;

/// Left-associative binary operator levels.
///
/// Implements equality, relational, additive and multiplicative parsing.
pub mod binary;

/// Braced statement lists.
pub mod block;

/// Small token helpers shared by the other parser modules.
pub mod utils;

/// Statement parsing.
///
/// Implements declarations, `return`, blocks, `if`, `while`, `for`, the empty
/// statement and expression statements.
pub mod statement;
