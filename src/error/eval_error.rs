#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// The grammar places no bound on literal magnitude, so any operation can
/// leave the `i64` range; the evaluator rejects that instead of wrapping.
/// A structurally invalid tree cannot be represented by [`crate::ast::Expr`],
/// so no variant exists for it.
pub enum EvalError {
    /// Arithmetic operation overflowed the machine integer type.
    Overflow {
        /// The operation that overflowed, rendered as source text.
        operation: String,
        /// Byte column of the operator in the source line.
        column:    usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { operation, column } => {
                write!(f,
                       "Error at column {column}: Integer overflow while applying '{operation}'.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
