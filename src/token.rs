use std::fmt;

use crate::util::num::format_real;

/// One of the six single-character operators the calculator understands.
///
/// Parentheses are modelled as operators because the evaluator keeps them on
/// the operator stack while it waits for the matching `)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Operator {
    /// Returns the source character for this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::LParen => '(',
            Self::RParen => ')',
        }
    }

    /// Binding strength used by the evaluator.
    ///
    /// `+` and `-` bind with 1, `*` and `/` with 2. Parentheses report 0; they
    /// never take part in a comparison because the evaluator stops popping
    /// as soon as it reaches a `(`.
    ///
    /// # Example
    /// ```
    /// use tokcalc::token::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Sub.precedence(), Operator::Add.precedence());
    /// assert_eq!(Operator::LParen.precedence(), 0);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::LParen | Self::RParen => 0,
        }
    }

    /// Whether a `-` following this operator starts a negative operand.
    ///
    /// Everything except `)` leaves the evaluator waiting for an operand.
    #[must_use]
    pub const fn expects_operand(self) -> bool {
        !matches!(self, Self::RParen)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An atomic lexical unit: a numeric literal or an operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal such as `3`, `4.25` or `.5`.
    Number(f64),
    /// One of `+ - * / ( )`.
    Operator(Operator),
}

impl Token {
    /// Returns the literal value if this token is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Operator(_) => None,
        }
    }

    /// Whether a `-` following this token is a unary minus.
    #[must_use]
    pub const fn expects_operand(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Operator(op) => op.expects_operand(),
        }
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => f.write_str(&format_real(*v)),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// The ordered token sequence produced by a single tokenize call.
///
/// An `Expression` is never modified after the tokenizer hands it out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    tokens: Vec<Token>,
}

impl Expression {
    /// Builds an expression from an already validated token sequence.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The tokens in source order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterates over the tokens in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Iterates over the numeric literals only, in encounter order.
    ///
    /// # Example
    /// ```
    /// use tokcalc::tokenize;
    ///
    /// let tokenized = tokenize("1 + 2.5 * (3 - 4)").unwrap();
    /// let numbers: Vec<f64> = tokenized.expression.numbers().collect();
    /// assert_eq!(numbers, vec![1.0, 2.5, 3.0, 4.0]);
    /// ```
    pub fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.tokens.iter().filter_map(Token::as_number)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> IntoIterator for &'a Expression {
    type IntoIter = std::slice::Iter<'a, Token>;
    type Item = &'a Token;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for Expression {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Parity class of an integral literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Classifies a literal by the parity of its truncated integer value.
    ///
    /// Returns `None` for literals with a nonzero fractional part and for
    /// non-finite values; those belong to neither bucket.
    ///
    /// # Example
    /// ```
    /// use tokcalc::token::Parity;
    ///
    /// assert_eq!(Parity::of(4.0), Some(Parity::Even));
    /// assert_eq!(Parity::of(7.0), Some(Parity::Odd));
    /// assert_eq!(Parity::of(1.5), None);
    /// ```
    #[must_use]
    pub fn of(value: f64) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        // Integral and finite, so the remainder is exactly 0.0 or +/-1.0.
        if value % 2.0 == 0.0 { Some(Self::Even) } else { Some(Self::Odd) }
    }
}

/// An insertion-ordered collection of integral literals sharing a parity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bucket {
    values: Vec<f64>,
}

impl Bucket {
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub(crate) fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// The collected literals in insertion order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for Bucket {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl FromIterator<f64> for Bucket {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}
