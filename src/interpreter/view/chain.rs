use std::fmt;

use crate::{
    interpreter::view::utils::{reals, write_chain},
    token::{Bucket, Expression, Token},
    util::num::format_real,
};

/// An ordered walk over a sequence, displayed as `a -> b -> null`.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain<T> {
    links: Vec<T>,
}

impl<T> Chain<T> {
    /// The elements of the walk in order.
    #[must_use]
    pub fn links(&self) -> &[T] {
        &self.links
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { links: iter.into_iter().collect() }
    }
}

impl fmt::Display for Chain<Token> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, &self.links)
    }
}

impl fmt::Display for Chain<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, reals(&self.links))
    }
}

/// The expression and both buckets rendered as linked walks.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainView {
    pub expression: Chain<Token>,
    pub result:     f64,
    pub even:       Chain<f64>,
    pub odd:        Chain<f64>,
}

impl fmt::Display for ChainView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Representation: {}", self.expression)?;
        writeln!(f, "Result: {}", format_real(self.result))?;
        writeln!(f, "Even Numbers: {}", self.even)?;
        write!(f, "Odd Numbers: {}", self.odd)
    }
}

/// Renders the chained view.
///
/// Pure presentation: the result is passed in and nothing is computed.
///
/// # Example
/// ```
/// use tokcalc::{render_chain, tokenize};
///
/// let t = tokenize("3+4").unwrap();
/// let view = render_chain(&t.expression, &t.even, &t.odd, 7.0);
/// assert_eq!(view.expression.to_string(), "3.0 -> + -> 4.0 -> null");
/// assert_eq!(view.odd.to_string(), "3.0 -> null");
/// ```
#[must_use]
pub fn render_chain(expression: &Expression, even: &Bucket, odd: &Bucket, result: f64) -> ChainView {
    ChainView { expression: expression.iter().copied().collect(),
                result,
                even: even.iter().collect(),
                odd: odd.iter().collect() }
}
