use logos::Logos;
use tracing::{debug, trace};

use crate::{
    error::{Error, EvaluationError, InvalidExpressionError},
    interpreter::{
        evaluator::core::evaluate,
        lexer::{LexError, RawToken},
        view::{
            chain::{ChainView, render_chain},
            chunked::{Capacities, ChunkedView, render_chunked},
            flat::{FlatView, render_flat},
        },
    },
    token::{Bucket, Expression, Operator, Parity, Token},
};

/// Result type used by the tokenizer.
pub type TokenizeResult<T> = Result<T, InvalidExpressionError>;

/// Everything one tokenize call produces.
///
/// The even and odd buckets only ever describe `expression`; tokenizing new
/// text yields a fresh `Tokenized` rather than refilling an old one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tokenized {
    /// The token sequence in source order.
    pub expression: Expression,
    /// Integral literals whose truncated value is even, in encounter order.
    pub even:       Bucket,
    /// Integral literals whose truncated value is odd, in encounter order.
    pub odd:        Bucket,
}

impl Tokenized {
    /// Evaluates the expression.
    ///
    /// Each call recomputes the value; evaluation is pure so every call returns
    /// the same result.
    pub fn evaluate(&self) -> Result<f64, EvaluationError> {
        evaluate(&self.expression)
    }

    /// Evaluates the expression and renders the chained view.
    pub fn chain_view(&self) -> Result<ChainView, EvaluationError> {
        let result = self.evaluate()?;
        Ok(render_chain(&self.expression, &self.even, &self.odd, result))
    }

    /// Evaluates the expression and renders the flat view.
    pub fn flat_view(&self) -> Result<FlatView, EvaluationError> {
        let result = self.evaluate()?;
        Ok(render_flat(&self.expression, &self.even, &self.odd, result))
    }

    /// Validates the capacities, evaluates the expression and renders the
    /// chunked view.
    ///
    /// Capacities are checked before anything is computed, so an invalid
    /// capacity is reported even when the expression itself would fail to
    /// evaluate.
    pub fn chunked_view(&self, capacities: Capacities) -> Result<ChunkedView, Error> {
        capacities.validate()?;
        let result = self.evaluate()?;
        Ok(render_chunked(&self.expression,
                          &self.even,
                          &self.odd,
                          result,
                          capacities.input,
                          capacities.bucket)?)
    }
}

/// Converts raw text into a token sequence and its parity buckets.
///
/// Whitespace is skipped. Each maximal run of digits and `.` becomes a
/// `Number` token; integral literals are also appended to the even or odd
/// bucket. Each of `+ - * / ( )` becomes an `Operator` token. Parentheses
/// are balanced on the fly: a `)` with nothing open fails immediately, and
/// any `(` still open at the end fails once the scan completes.
///
/// # Errors
/// - `BadChar` for any character outside the calculator's alphabet.
/// - `BadNumber` for a digit run that is not a valid number, such as `1.2.3`.
/// - `UnbalancedExtraClose` as soon as a `)` has no matching `(`.
/// - `UnbalancedMismatch` if any `(` is left open.
///
/// # Example
/// ```
/// use tokcalc::{error::InvalidExpressionError, tokenize};
///
/// let tokenized = tokenize("3+4*2").unwrap();
/// assert_eq!(tokenized.expression.len(), 5);
/// assert_eq!(tokenized.even.values(), &[4.0, 2.0]);
/// assert_eq!(tokenized.odd.values(), &[3.0]);
///
/// assert_eq!(tokenize("(1+2"), Err(InvalidExpressionError::UnbalancedMismatch));
/// ```
pub fn tokenize(text: &str) -> TokenizeResult<Tokenized> {
    let mut tokens = Vec::new();
    let mut even = Bucket::new();
    let mut odd = Bucket::new();
    let mut balance: usize = 0;

    let mut lexer = RawToken::lexer(text);

    while let Some(raw) = lexer.next() {
        let raw = match raw {
            Ok(raw) => raw,
            Err(LexError::BadNumber(run)) => return Err(InvalidExpressionError::BadNumber(run)),
            Err(LexError::UnexpectedChar) => {
                let bad = text.get(lexer.span().start..)
                              .and_then(|rest| rest.chars().next())
                              .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(InvalidExpressionError::BadChar(bad));
            },
        };

        let token = match raw {
            RawToken::Number(value) => {
                match Parity::of(value) {
                    Some(Parity::Even) => even.push(value),
                    Some(Parity::Odd) => odd.push(value),
                    None => {},
                }
                Token::Number(value)
            },
            RawToken::Plus => Token::Operator(Operator::Add),
            RawToken::Minus => Token::Operator(Operator::Sub),
            RawToken::Star => Token::Operator(Operator::Mul),
            RawToken::Slash => Token::Operator(Operator::Div),
            RawToken::LParen => {
                balance += 1;
                Token::Operator(Operator::LParen)
            },
            RawToken::RParen => {
                balance = balance.checked_sub(1)
                                 .ok_or(InvalidExpressionError::UnbalancedExtraClose)?;
                Token::Operator(Operator::RParen)
            },
        };

        trace!(%token, "token");
        tokens.push(token);
    }

    if balance != 0 {
        return Err(InvalidExpressionError::UnbalancedMismatch);
    }

    debug!(tokens = tokens.len(), even = even.len(), odd = odd.len(), "tokenized expression");

    Ok(Tokenized { expression: Expression::new(tokens),
                   even,
                   odd })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_ignored() {
        let spaced = tokenize(" 1 +\t2 ").unwrap();
        let packed = tokenize("1+2").unwrap();
        assert_eq!(spaced, packed);
    }

    #[test]
    fn vertical_tab_and_em_space_are_whitespace() {
        let packed = tokenize("1+2").unwrap();
        assert_eq!(tokenize("1\u{0B}+2").unwrap(), packed);
        assert_eq!(tokenize("1\u{2003}+\u{2003}2").unwrap(), packed);
        assert_eq!(tokenize("1\u{A0}+2"), Err(InvalidExpressionError::BadChar('\u{A0}')));
    }

    #[test]
    fn extra_close_fails_before_later_errors() {
        assert_eq!(tokenize(")x"), Err(InvalidExpressionError::UnbalancedExtraClose));
    }

    #[test]
    fn bad_char_reports_the_character() {
        assert_eq!(tokenize("2 ^ 3"), Err(InvalidExpressionError::BadChar('^')));
        assert_eq!(tokenize("1 + é"), Err(InvalidExpressionError::BadChar('é')));
    }

    #[test]
    fn empty_input_is_an_empty_expression() {
        let tokenized = tokenize("").unwrap();
        assert!(tokenized.expression.is_empty());
        assert!(tokenized.even.is_empty());
        assert!(tokenized.odd.is_empty());
    }

    #[test]
    fn chunked_view_checks_capacities_before_evaluating() {
        let tokenized = tokenize("1/0").unwrap();
        let err = tokenized.chunked_view(Capacities { input: 0, bucket: 1 }).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = tokenized.chunked_view(Capacities { input: 1, bucket: 1 }).unwrap_err();
        assert_eq!(err, Error::Evaluation(EvaluationError::DivisionByZero));
    }
}
