/// The evaluator module computes the value of a token sequence.
///
/// The evaluator walks the tokens once, keeping a value stack and an operator
/// stack, and resolves operator precedence, parentheses and unary minus as it
/// goes. It is the core execution engine of the calculator.
///
/// # Responsibilities
/// - Applies `+ - * /` with the usual precedence and left associativity.
/// - Matches parentheses on the operator stack.
/// - Reports missing operands, malformed input and division by zero.
pub mod evaluator;
/// The lexer module splits source text into raw tokens.
///
/// The lexer reads the raw text and produces a stream of numeric runs and
/// single-character operators, skipping whitespace. This is the first stage
/// of tokenization.
pub mod lexer;
/// The tokenizer module builds expressions and parity buckets.
///
/// It drives the lexer, checks parenthesis balance, and sorts every integral
/// literal into the even or odd bucket.
///
/// # Responsibilities
/// - Converts raw tokens into typed [`crate::token::Token`] values.
/// - Rejects unknown characters, bad numbers and unbalanced parentheses.
/// - Produces the even and odd buckets alongside the expression.
pub mod tokenizer;
/// The view module renders a tokenized expression for display.
///
/// Three independent renderings are provided: a chained view, a chunked
/// queue view, and a flat view. All of them are pure functions of the
/// expression, the buckets and the evaluation result.
pub mod view;
