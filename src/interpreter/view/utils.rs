use std::fmt::{self, Display};

/// Connector placed between the elements of a chain.
pub const LINK: &str = " -> ";
/// Marker terminating every chain.
pub const SENTINEL: &str = "null";

/// Writes `items` as a chain, e.g. `3.0 -> + -> 4.0 -> null`.
///
/// An empty sequence is written as the bare sentinel.
///
/// # Errors
/// Propagates errors from the underlying formatter.
pub fn write_chain<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
    where I: IntoIterator,
          I::Item: Display
{
    for item in items {
        write!(f, "{item}{LINK}")?;
    }
    f.write_str(SENTINEL)
}

/// Writes `items` as a bracketed list, e.g. `[3.0, +, 4.0]`.
///
/// # Errors
/// Propagates errors from the underlying formatter.
pub fn write_list<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
    where I: IntoIterator,
          I::Item: Display
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

/// Adapts an `f64` so it displays with [`crate::util::num::format_real`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Real(pub f64);

impl Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::util::num::format_real(self.0))
    }
}

/// Wraps a slice of reals for use with [`write_chain`] and [`write_list`].
pub fn reals(values: &[f64]) -> impl Iterator<Item = Real> + '_ {
    values.iter().copied().map(Real)
}
