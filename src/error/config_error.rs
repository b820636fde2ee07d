use thiserror::Error;

/// Represents invalid view settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A queue capacity was below one.
    #[error("{name} capacity must be at least 1, got {value}")]
    CapacityTooSmall {
        /// Which capacity was rejected, e.g. `input` or `bucket`.
        name:  &'static str,
        /// The rejected value.
        value: i64,
    },
}
