use thiserror::Error;

/// Represents all errors that can occur while tokenizing an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidExpressionError {
    /// A character outside digits, `.`, whitespace and `+ - * / ( )`.
    #[error("Invalid character in expression: {0}")]
    BadChar(char),
    /// A run of digits and dots that does not form a valid number.
    #[error("Invalid number format: {0}")]
    BadNumber(String),
    /// A `)` appeared with no open `(` to close.
    #[error("Unbalanced parentheses: Extra ')' detected")]
    UnbalancedExtraClose,
    /// The input ended with at least one `(` left open.
    #[error("Unbalanced parentheses: Mismatch in '(' and ')' count")]
    UnbalancedMismatch,
}
