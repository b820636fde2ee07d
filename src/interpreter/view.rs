/// Shared view types.
///
/// Declares `ViewKind`, which names a view at runtime, and `View`, which
/// holds any one of the three rendered views.
pub mod core;

/// Chained view.
///
/// Renders the expression and both buckets as linked walks ending in a
/// sentinel.
pub mod chain;

/// Chunked view.
///
/// Partitions the numeric literals and both buckets into capacity-bounded
/// FIFO queues while keeping their order.
pub mod chunked;

/// Flat view.
///
/// Renders the expression and both buckets as plain ordered lists.
pub mod flat;

/// Formatting helpers shared by the views.
pub mod utils;
