use std::fmt;

use crate::{
    interpreter::view::utils::{reals, write_list},
    token::{Bucket, Expression, Token},
    util::num::format_real,
};

/// The expression and both buckets as plain ordered lists.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatView {
    pub expression: Vec<Token>,
    pub result:     f64,
    pub even:       Vec<f64>,
    pub odd:        Vec<f64>,
}

impl fmt::Display for FlatView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Representation: ")?;
        write_list(f, &self.expression)?;
        writeln!(f, "\nResult: {}", format_real(self.result))?;
        f.write_str("Even Numbers: ")?;
        write_list(f, reals(&self.even))?;
        f.write_str("\nOdd Numbers: ")?;
        write_list(f, reals(&self.odd))
    }
}

/// Renders the flat view.
///
/// # Example
/// ```
/// use tokcalc::{render_flat, tokenize};
///
/// let t = tokenize("1.5+2").unwrap();
/// let view = render_flat(&t.expression, &t.even, &t.odd, 3.5);
/// assert_eq!(view.to_string(),
///            "Representation: [1.5, +, 2.0]\nResult: 3.5\nEven Numbers: [2.0]\nOdd Numbers: []");
/// ```
#[must_use]
pub fn render_flat(expression: &Expression, even: &Bucket, odd: &Bucket, result: f64) -> FlatView {
    FlatView { expression: expression.tokens().to_vec(),
               result,
               even: even.values().to_vec(),
               odd: odd.values().to_vec() }
}
