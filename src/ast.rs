/// An abstract syntax tree (AST) node representing an expression.
///
/// Every expression produces a single `i64` when evaluated. Each variant
/// carries the source line it starts on for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (`-x` or `+x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Assignment to a declared variable; evaluates to the assigned value.
    Assign {
        /// Name of the target variable.
        name:  String,
        /// Value expression.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A statement expression `({ ... })`.
    ///
    /// Its value is the value of the last statement when that statement is an
    /// expression statement, and `0` otherwise.
    Block {
        /// The statements inside the braces, in order.
        statements: Vec<Statement>,
        /// Line number in the source code.
        line:       usize,
    },
}

impl Expr {
    /// Returns the source line of this expression.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Assign { line, .. }
            | Self::Block { line, .. } => *line,
        }
    }

    /// Number of nodes on the longest path from this expression to a leaf.
    ///
    /// Statement expressions count the statements inside them, so the result
    /// bounds how deep evaluation of this expression recurses.
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Literal { .. } | Self::Variable { .. } => 1,
            Self::UnaryOp { expr, .. } => expr.height() + 1,
            Self::BinaryOp { left, right, .. } => left.height().max(right.height()) + 1,
            Self::Assign { value, .. } => value.height() + 1,
            Self::Block { statements, .. } => tallest(statements) + 1,
        }
    }
}

/// A statement in the language.
///
/// Statements are executed for their effect. Only an expression statement in
/// the last position of a block expression or of the program contributes a
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// An expression evaluated for effect, e.g. `a = 3;`.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `int name;` or `int name = value;`.
    Declaration {
        /// Name of the declared variable.
        name:  String,
        /// Optional initializer; the variable starts at `0` without one.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A braced statement list `{ ... }`. The empty statement `;` is an empty
    /// block.
    Block {
        /// The statements inside the braces.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `if (condition) then_branch else else_branch`.
    If {
        /// The condition; nonzero is true.
        condition:   Expr,
        /// Executed when the condition is true.
        then_branch: Box<Self>,
        /// Executed when the condition is false, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while (condition) body`.
    While {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `for (init; condition; step) body`.
    For(ForLoop),
    /// `return value;` ends the whole run with `value`.
    Return {
        /// The returned value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Statement {
    /// Returns the source line of this statement.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Expression { line, .. }
            | Self::Declaration { line, .. }
            | Self::Block { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::For(ForLoop { line, .. })
            | Self::Return { line, .. } => *line,
        }
    }

    /// Number of nodes on the longest path from this statement to a leaf.
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Expression { expr, .. } => expr.height(),
            Self::Declaration { value, .. } => value.as_ref().map_or(0, Expr::height) + 1,
            Self::Block { statements, .. } => tallest(statements) + 1,
            Self::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                let branches = then_branch.height()
                                          .max(else_branch.as_deref().map_or(0, Self::height));
                condition.height().max(branches) + 1
            },
            Self::While { condition, body, .. } => condition.height().max(body.height()) + 1,
            Self::For(ForLoop { init,
                                condition,
                                step,
                                body,
                                .. }) => {
                let header = [init, condition, step].into_iter()
                                                    .flatten()
                                                    .map(Expr::height)
                                                    .max()
                                                    .unwrap_or(0);
                header.max(body.height()) + 1
            },
            Self::Return { value, .. } => value.height() + 1,
        }
    }
}

fn tallest(statements: &[Statement]) -> usize {
    statements.iter().map(Statement::height).max().unwrap_or(0)
}

/// The parts of a `for` statement. Every header clause is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForLoop {
    /// Runs once before the loop.
    pub init:      Option<Expr>,
    /// Checked before every iteration; an absent condition is always true.
    pub condition: Option<Expr>,
    /// Runs after every iteration.
    pub step:      Option<Expr>,
    /// The loop body.
    pub body:      Box<Statement>,
    /// Line number in the source code.
    pub line:      usize,
}

/// Supported unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
    /// `+x`
    Identity,
}

/// Supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
}
