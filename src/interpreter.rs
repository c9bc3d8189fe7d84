/// The environment module stores variables during a run.
///
/// A flat name-to-integer map, created fresh for every evaluation unless the
/// caller supplies one.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, executes statements for their effect and
/// evaluates expressions for their value, reading and writing variables in the
/// environment.
///
/// # Responsibilities
/// - Evaluates integer arithmetic and comparisons.
/// - Runs `if`, `while`, `for` and `return`.
/// - Reports runtime errors such as division by zero or undeclared variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens for integers,
/// identifiers, keywords, operators and punctuation, each tagged with its
/// line. Whitespace and comments are skipped.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence level.
///
/// # Responsibilities
/// - Converts tokens into expressions and statements.
/// - Resolves precedence, associativity and the dangling `else`.
/// - Reports syntax errors with the offending token and line.
pub mod parser;
