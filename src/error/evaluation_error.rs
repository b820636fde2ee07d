use thiserror::Error;

use crate::token::Operator;

/// Represents all errors that can occur while evaluating a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// A parenthesis had no partner on the operator stack.
    #[error("Mismatched parentheses")]
    MismatchedParens,
    /// An operator was applied with fewer than two values available.
    #[error("Missing operand for operator: {0}")]
    MissingOperand(Operator),
    /// Evaluation finished with zero or several values left over.
    #[error("Malformed expression. Check operators and operands")]
    Malformed,
    /// The right-hand side of a `/` was zero.
    #[error("Division by zero")]
    DivisionByZero,
}
