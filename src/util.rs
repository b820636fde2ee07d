/// Numeric conversion and formatting helpers.
///
/// This module provides the checked integer conversions used to turn
/// user-supplied capacities into sizes, and the formatting used whenever a
/// literal or a result is displayed. Conversions return a `Result` instead of
/// silently wrapping or truncating.
pub mod num;
