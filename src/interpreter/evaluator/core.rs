use tracing::{debug, trace};

use crate::{
    error::EvaluationError,
    token::{Expression, Operator, Token},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Working state of one evaluation.
///
/// Both stacks are plain vectors used last-in first-out. A fresh `Evaluator`
/// is created per call to [`evaluate`], so nothing carries over between
/// expressions.
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Operands and intermediate results.
    pub(super) values:    Vec<f64>,
    /// Pending operators and open parentheses.
    pub(super) operators: Vec<Operator>,
}

impl Evaluator {
    #[must_use]
    pub const fn new() -> Self {
        Self { values:    Vec::new(),
               operators: Vec::new(), }
    }

    /// Feeds every token of `expression` through the stacks and reduces them
    /// to a single value.
    ///
    /// # Parameters
    /// - `expression`: Token sequence to evaluate.
    ///
    /// # Returns
    /// The value left on the stack once all operators have been applied.
    pub fn run(mut self, expression: &Expression) -> EvalResult<f64> {
        let mut last: Option<&Token> = None;

        for token in expression {
            match *token {
                Token::Number(value) => self.values.push(value),
                Token::Operator(Operator::LParen) => self.operators.push(Operator::LParen),
                Token::Operator(Operator::RParen) => self.close_group()?,
                Token::Operator(op) => self.push_operator(op, last)?,
            }
            last = Some(token);
        }

        self.finish()
    }

    /// Handles `+ - * /`.
    ///
    /// A `-` at the start of the expression or right after another operator
    /// or `(` is unary; it is rewritten as `0 - x` by pushing a zero operand.
    /// Every pending operator of equal or higher precedence is applied before
    /// `op` is pushed, which makes the binary operators left-associative.
    fn push_operator(&mut self, op: Operator, last: Option<&Token>) -> EvalResult<()> {
        if op == Operator::Sub && last.is_none_or(Token::expects_operand) {
            trace!("unary minus");
            self.values.push(0.0);
        }

        while let Some(&top) = self.operators.last()
              && top != Operator::LParen
              && top.precedence() >= op.precedence()
        {
            self.apply_top()?;
        }

        self.operators.push(op);
        Ok(())
    }

    /// Handles `)` by applying operators back to the matching `(`.
    fn close_group(&mut self) -> EvalResult<()> {
        loop {
            match self.operators.last().copied() {
                Some(Operator::LParen) => {
                    self.operators.pop();
                    return Ok(());
                },
                Some(_) => self.apply_top()?,
                None => return Err(EvaluationError::MismatchedParens),
            }
        }
    }

    /// Applies every remaining operator and checks that exactly one value is
    /// left.
    fn finish(mut self) -> EvalResult<f64> {
        while let Some(&top) = self.operators.last() {
            if top == Operator::LParen {
                return Err(EvaluationError::MismatchedParens);
            }
            self.apply_top()?;
        }

        match self.values.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvaluationError::Malformed),
        }
    }
}

/// Computes the value of an expression.
///
/// Uses operator-precedence evaluation with a value stack and an operator
/// stack. `*` and `/` bind tighter than `+` and `-`; operators of equal
/// precedence group from the left; parentheses override both. A `-` with no
/// left operand is treated as `0 - x`. There is no unary plus: `+5` fails with
/// `MissingOperand`.
///
/// The function is pure. Evaluating the same expression twice yields
/// bit-identical results.
///
/// # Errors
/// - `MismatchedParens` if a parenthesis has no partner on the stack.
/// - `MissingOperand` if an operator is applied with fewer than two values.
/// - `Malformed` if evaluation does not end with exactly one value.
/// - `DivisionByZero` if the right-hand side of a `/` is zero.
///
/// # Example
/// ```
/// use tokcalc::{error::EvaluationError, evaluate, tokenize};
///
/// let tokenized = tokenize("3+4*2").unwrap();
/// assert_eq!(evaluate(&tokenized.expression), Ok(11.0));
///
/// let tokenized = tokenize("-5+3").unwrap();
/// assert_eq!(evaluate(&tokenized.expression), Ok(-2.0));
///
/// let tokenized = tokenize("5/0").unwrap();
/// assert_eq!(evaluate(&tokenized.expression), Err(EvaluationError::DivisionByZero));
/// ```
pub fn evaluate(expression: &Expression) -> EvalResult<f64> {
    let result = Evaluator::new().run(expression);
    match &result {
        Ok(value) => debug!(value, "evaluated expression"),
        Err(e) => debug!(error = %e, "evaluation failed"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Operator::{Add, Div, LParen, Mul, RParen, Sub};

    fn expr(tokens: &[Token]) -> Expression {
        tokens.iter().copied().collect()
    }

    fn num(v: f64) -> Token {
        Token::Number(v)
    }

    fn op(o: Operator) -> Token {
        Token::Operator(o)
    }

    #[test]
    fn precedence_and_associativity() {
        // 8 - 2 - 1 groups from the left
        assert_eq!(evaluate(&expr(&[num(8.0), op(Sub), num(2.0), op(Sub), num(1.0)])), Ok(5.0));
        // 8 / 2 * 4 groups from the left
        assert_eq!(evaluate(&expr(&[num(8.0), op(Div), num(2.0), op(Mul), num(4.0)])), Ok(16.0));
        // 2 + 3 * 4
        assert_eq!(evaluate(&expr(&[num(2.0), op(Add), num(3.0), op(Mul), num(4.0)])), Ok(14.0));
    }

    #[test]
    fn parentheses_override_precedence() {
        let e = expr(&[op(LParen), num(2.0), op(Add), num(3.0), op(RParen), op(Mul), num(4.0)]);
        assert_eq!(evaluate(&e), Ok(20.0));
    }

    #[test]
    fn unary_minus_after_operator_and_paren() {
        // 2 + -3
        assert_eq!(evaluate(&expr(&[num(2.0), op(Add), op(Sub), num(3.0)])), Ok(-1.0));
        // (-4)
        assert_eq!(evaluate(&expr(&[op(LParen), op(Sub), num(4.0), op(RParen)])), Ok(-4.0));
    }

    #[test]
    fn unary_minus_applies_pending_operators_first() {
        // 2 * -3 reduces 2 * 0 before the minus is pushed, leaving 0 - 3
        assert_eq!(evaluate(&expr(&[num(2.0), op(Mul), op(Sub), num(3.0)])), Ok(-3.0));
    }

    #[test]
    fn minus_after_close_paren_is_binary() {
        // (5) - 2
        let e = expr(&[op(LParen), num(5.0), op(RParen), op(Sub), num(2.0)]);
        assert_eq!(evaluate(&e), Ok(3.0));
    }

    #[test]
    fn unary_plus_is_not_supported() {
        assert_eq!(evaluate(&expr(&[op(Add), num(5.0)])), Err(EvaluationError::MissingOperand(Add)));
    }

    #[test]
    fn stray_close_paren_is_mismatched() {
        assert_eq!(evaluate(&expr(&[num(1.0), op(RParen)])), Err(EvaluationError::MismatchedParens));
    }

    #[test]
    fn unclosed_paren_is_mismatched() {
        assert_eq!(evaluate(&expr(&[op(LParen), num(1.0)])), Err(EvaluationError::MismatchedParens));
    }

    #[test]
    fn leftover_values_are_malformed() {
        assert_eq!(evaluate(&expr(&[num(2.0), op(LParen), num(3.0), op(RParen)])),
                   Err(EvaluationError::Malformed));
        assert_eq!(evaluate(&expr(&[])), Err(EvaluationError::Malformed));
        assert_eq!(evaluate(&expr(&[op(LParen), op(RParen)])), Err(EvaluationError::Malformed));
    }

    #[test]
    fn trailing_operator_is_missing_operand() {
        assert_eq!(evaluate(&expr(&[num(1.0), op(Mul)])), Err(EvaluationError::MissingOperand(Mul)));
    }

    #[test]
    fn negative_zero_divisor_is_division_by_zero() {
        // the pending `/` is applied to the synthetic zero
        let e = expr(&[num(1.0), op(Div), op(Sub), num(0.0)]);
        assert_eq!(evaluate(&e), Err(EvaluationError::DivisionByZero));
    }
}
