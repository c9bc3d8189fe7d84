//! # ceval
//!
//! ceval evaluates a small C-like language: integer arithmetic, comparisons,
//! `int` variables, assignment, GNU-style statement expressions `({ ... })`,
//! `if`/`else`, `while`, `for` and `return`. A program evaluates to a single
//! `i64`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Statement,
    error::EvalError,
    interpreter::{
        environment::Environment, evaluator::core::Context, lexer::tokenize,
        parser::core::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every phase has its own error enum carrying the source line and the
/// offending token or name. [`EvalError`] wraps all three.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, variable storage and
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment and
///   evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates a program and returns its value.
///
/// Each call starts from an empty [`Environment`], so no state carries over
/// between calls. The value of a program is the value of its last statement if
/// that is an expression statement, the value of a `return`, or `0`. A final
/// top-level expression or `return` may omit its `;`.
///
/// # Errors
/// Returns an [`EvalError`] if lexing, parsing or evaluation fails. The error
/// stops the run.
///
/// # Examples
/// ```
/// use ceval::run;
///
/// assert_eq!(run("({ 5 + 6 * 7; })").unwrap(), 47);
/// assert_eq!(run("({ int a; int b; a=b=3; a+b; })").unwrap(), 6);
/// assert_eq!(run("5 + 20 - 4").unwrap(), 21);
///
/// // 'x' is never declared.
/// assert!(run("({ x; })").is_err());
/// ```
pub fn run(source: &str) -> Result<i64, EvalError> {
    let mut environment = Environment::new();
    run_with_environment(source, &mut environment)
}

/// Evaluates a program against a caller-supplied environment.
///
/// Variables already in `environment` act as globals. Declarations and
/// assignments made by the program stay in it after the call returns, even
/// when evaluation fails partway.
///
/// # Errors
/// Returns an [`EvalError`] if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use ceval::{interpreter::environment::Environment, run_with_environment};
///
/// let mut globals = Environment::new();
/// globals.declare("g1", 10);
///
/// assert_eq!(run_with_environment("g1 = g1 + 1; g1 * 2", &mut globals).unwrap(), 22);
/// assert_eq!(globals.get("g1", 1).unwrap(), 11);
/// ```
pub fn run_with_environment(source: &str,
                            environment: &mut Environment)
                            -> Result<i64, EvalError> {
    let program = parse(source)?;
    Ok(Context::new(environment).evaluate(&program)?)
}

/// Tokenizes and parses a program without running it.
///
/// # Errors
/// Returns an [`EvalError`] if lexing or parsing fails.
pub fn parse(source: &str) -> Result<Vec<Statement>, EvalError> {
    let tokens = tokenize(source)?;
    Ok(parse_program(&tokens)?)
}
