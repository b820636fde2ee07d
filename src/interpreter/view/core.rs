use std::{fmt, str::FromStr};

use crate::interpreter::view::{chain::ChainView, chunked::ChunkedView, flat::FlatView};

/// Names one of the three views.
///
/// Parsed case-insensitively from `chain`, `chunked` or `flat`.
///
/// # Example
/// ```
/// use tokcalc::ViewKind;
///
/// assert_eq!("Chunked".parse::<ViewKind>(), Ok(ViewKind::Chunked));
/// assert!("tree".parse::<ViewKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    /// Linked walks ending in a sentinel.
    Chain,
    /// Capacity-bounded queues.
    Chunked,
    /// Plain lists.
    #[default]
    Flat,
}

impl ViewKind {
    /// All views, in menu order.
    pub const ALL: [Self; 3] = [Self::Chain, Self::Chunked, Self::Flat];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chain => "chain",
            Self::Chunked => "chunked",
            Self::Flat => "flat",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
                 .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
                 .ok_or_else(|| format!("unknown view '{s}', expected one of: chain, chunked, flat"))
    }
}

/// Any one of the rendered views.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Chain(ChainView),
    Chunked(ChunkedView),
    Flat(FlatView),
}

impl View {
    /// The value of the expression shown by this view.
    #[must_use]
    pub const fn result(&self) -> f64 {
        match self {
            Self::Chain(v) => v.result,
            Self::Chunked(v) => v.result,
            Self::Flat(v) => v.result,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ViewKind {
        match self {
            Self::Chain(_) => ViewKind::Chain,
            Self::Chunked(_) => ViewKind::Chunked,
            Self::Flat(_) => ViewKind::Flat,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chain(v) => fmt::Display::fmt(v, f),
            Self::Chunked(v) => fmt::Display::fmt(v, f),
            Self::Flat(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl From<ChainView> for View {
    fn from(view: ChainView) -> Self {
        Self::Chain(view)
    }
}

impl From<ChunkedView> for View {
    fn from(view: ChunkedView) -> Self {
        Self::Chunked(view)
    }
}

impl From<FlatView> for View {
    fn from(view: FlatView) -> Self {
        Self::Flat(view)
    }
}
