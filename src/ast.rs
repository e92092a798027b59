/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is a closed sum type: every shape a parsed statement can take is a
/// variant here, and the evaluator and formatter match on it exhaustively.
/// Each node exclusively owns its children, is built once by the parser, and
/// is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A non-negative integer literal. Signs are introduced only by
    /// [`UnaryOperator::Negate`].
    Number {
        /// The literal value.
        value:  i64,
        /// Byte column in the source line.
        column: usize,
    },
    /// A unary operation with exactly one child.
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Byte column in the source line.
        column: usize,
    },
    /// A binary operation with exactly two children.
    BinaryOp {
        /// The operator.
        op:     BinaryOperator,
        /// Left operand.
        left:   Box<Self>,
        /// Right operand.
        right:  Box<Self>,
        /// Byte column in the source line.
        column: usize,
    },
}

impl Expr {
    /// Gets the source column from `self`.
    ///
    /// ## Example
    /// ```
    /// use simplisp::ast::Expr;
    ///
    /// let expr = Expr::Number { value: 7, column: 5 };
    ///
    /// assert_eq!(expr.column(), 5);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Number { column, .. }
            | Self::UnaryOp { column, .. }
            | Self::BinaryOp { column, .. } => *column,
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation, written `(- x)`.
    Negate,
    /// The statement wrapper anchoring the outer `(identifier ...)` form.
    /// Transparent during evaluation; every parsed statement is rooted at
    /// exactly one of these.
    Wrapper,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
        };
        write!(f, "{operator}")
    }
}
