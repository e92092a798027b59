use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::EvalError,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a syntax tree to its integer value by a post-order walk.
///
/// Dispatch is an exhaustive match over [`Expr`], so no tree shape can go
/// unhandled. The statement wrapper is transparent: it contributes nothing to
/// the value and merely anchors the grammar's outer `(identifier ...)` form.
///
/// All arithmetic is checked: an operation that leaves the `i64` range fails
/// with [`EvalError::Overflow`] rather than wrapping. Recursion depth equals
/// tree depth, which the parser bounds at construction time.
///
/// # Parameters
/// - `node`: Root of the tree (or subtree) to evaluate.
///
/// # Returns
/// The computed integer value.
///
/// # Errors
/// [`EvalError::Overflow`] when negation, addition, subtraction, or
/// multiplication overflows.
///
/// # Example
/// ```
/// use simplisp::{
///     ast::{Expr, UnaryOperator},
///     interpreter::evaluator::evaluate,
/// };
///
/// let tree = Expr::UnaryOp { op:     UnaryOperator::Negate,
///                            expr:   Box::new(Expr::Number { value: 5, column: 3 }),
///                            column: 1, };
///
/// assert_eq!(evaluate(&tree).unwrap(), -5);
/// ```
pub fn evaluate(node: &Expr) -> EvalResult<i64> {
    match node {
        Expr::Number { value, .. } => Ok(*value),
        Expr::UnaryOp { op: UnaryOperator::Wrapper, expr, .. } => evaluate(expr),
        Expr::UnaryOp { op: UnaryOperator::Negate, expr, column } => {
            let value = evaluate(expr)?;
            value.checked_neg()
                 .ok_or_else(|| EvalError::Overflow { operation: format!("- {value}"),
                                                      column:    *column, })
        },
        Expr::BinaryOp { op, left, right, column } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            let result = match op {
                BinaryOperator::Add => left.checked_add(right),
                BinaryOperator::Sub => left.checked_sub(right),
                BinaryOperator::Mul => left.checked_mul(right),
            };
            result.ok_or_else(|| EvalError::Overflow { operation:
                                                           format!("{op} {left} {right}"),
                                                       column:    *column, })
        },
    }
}
