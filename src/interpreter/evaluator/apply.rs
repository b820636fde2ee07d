use tracing::trace;

use crate::{
    error::EvaluationError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    token::Operator,
};

impl Evaluator {
    /// Pops two values and one operator, applies the operator and pushes the
    /// result.
    ///
    /// The right operand is popped first because it was pushed last.
    ///
    /// # Errors
    /// - `MissingOperand` if fewer than two values are on the stack.
    /// - `DivisionByZero` if the operator is `/` and the right operand is zero.
    /// - `MismatchedParens` if the operator stack is empty.
    pub(super) fn apply_top(&mut self) -> EvalResult<()> {
        let Some(&op) = self.operators.last() else {
            return Err(EvaluationError::MismatchedParens);
        };

        if self.values.len() < 2 {
            return Err(EvaluationError::MissingOperand(op));
        }
        let (Some(b), Some(a)) = (self.values.pop(), self.values.pop()) else {
            return Err(EvaluationError::MissingOperand(op));
        };
        self.operators.pop();

        let result = apply_operation(op, a, b)?;
        trace!(%op, a, b, result, "applied operator");
        self.values.push(result);
        Ok(())
    }
}

/// Applies a binary arithmetic operator to two operands.
///
/// Standard IEEE-754 double arithmetic is used; the only check performed is
/// for a zero divisor. Parentheses are not arithmetic operators and are
/// reported as `MismatchedParens`.
///
/// # Parameters
/// - `op`: The operator.
/// - `a`: Left operand.
/// - `b`: Right operand.
///
/// # Example
/// ```
/// use tokcalc::{
///     error::EvaluationError, interpreter::evaluator::apply::apply_operation, token::Operator,
/// };
///
/// assert_eq!(apply_operation(Operator::Sub, 7.0, 2.0), Ok(5.0));
/// assert_eq!(apply_operation(Operator::Div, 1.0, 0.0), Err(EvaluationError::DivisionByZero));
/// ```
pub fn apply_operation(op: Operator, a: f64, b: f64) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div => {
            if b == 0.0 {
                return Err(EvaluationError::DivisionByZero);
            }
            Ok(a / b)
        },
        Operator::LParen | Operator::RParen => Err(EvaluationError::MismatchedParens),
    }
}
