/// Core evaluation logic and state.
///
/// Contains the two-stack evaluator, the token dispatch loop and the final
/// reduction of the operator stack.
pub mod core;

/// Operator application.
///
/// Pops operands and an operator off the stacks and pushes the result,
/// checking for missing operands and division by zero.
pub mod apply;
