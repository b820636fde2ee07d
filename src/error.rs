/// Tokenizer errors.
///
/// Defines the errors raised while turning raw text into a token sequence:
/// characters outside the calculator's alphabet, numeric runs that are not
/// valid numbers, and unbalanced parentheses.
pub mod expression_error;
/// Evaluation errors.
///
/// Contains the errors raised while computing the value of a well-formed token
/// sequence, such as a missing operand or a division by zero.
pub mod evaluation_error;
/// Configuration errors.
///
/// Raised when a view is asked to use settings it cannot honour, such as a
/// queue capacity below one.
pub mod config_error;

pub use config_error::ConfigError;
pub use evaluation_error::EvaluationError;
pub use expression_error::InvalidExpressionError;
use thiserror::Error;

/// Any failure the calculator can report for a single expression.
///
/// The three underlying taxonomies stay disjoint; this type only exists so
/// that the facade functions and the binary can use `?` across all of them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The text could not be tokenized.
    #[error(transparent)]
    InvalidExpression(#[from] InvalidExpressionError),
    /// The token sequence could not be evaluated.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    /// A view was configured with invalid settings.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
