use std::{collections::VecDeque, fmt, num::NonZeroUsize};

use tracing::debug;

use crate::{
    error::ConfigError,
    interpreter::view::utils::{Real, write_list},
    token::{Bucket, Expression, Token},
    util::num::{format_real, i64_to_nonzero_usize_checked},
};

/// Default capacity used for both the input queues and the bucket queues.
pub const DEFAULT_CAPACITY: i64 = 2;

/// The two queue capacities the chunked view needs.
///
/// Values are kept as supplied by the user; [`Capacities::validate`] rejects
/// anything below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacities {
    /// Capacity of the queues holding every numeric literal of the input.
    pub input:  i64,
    /// Capacity of the queues holding the even and odd buckets.
    pub bucket: i64,
}

impl Default for Capacities {
    fn default() -> Self {
        Self { input:  DEFAULT_CAPACITY,
               bucket: DEFAULT_CAPACITY, }
    }
}

impl Capacities {
    /// Checks both capacities, input first.
    ///
    /// # Errors
    /// Returns `ConfigError::CapacityTooSmall` naming the first capacity
    /// below one.
    ///
    /// # Example
    /// ```
    /// use tokcalc::{error::ConfigError, interpreter::view::chunked::Capacities};
    ///
    /// assert!(Capacities { input: 1, bucket: 3 }.validate().is_ok());
    ///
    /// let err = Capacities { input: 2, bucket: -1 }.validate().unwrap_err();
    /// assert_eq!(err, ConfigError::CapacityTooSmall { name: "bucket", value: -1 });
    /// ```
    pub fn validate(self) -> Result<(NonZeroUsize, NonZeroUsize), ConfigError> {
        let input = capacity("input", self.input)?;
        let bucket = capacity("bucket", self.bucket)?;
        Ok((input, bucket))
    }
}

fn capacity(name: &'static str, value: i64) -> Result<NonZeroUsize, ConfigError> {
    i64_to_nonzero_usize_checked(value, ConfigError::CapacityTooSmall { name, value })
}

/// An ordered list of FIFO queues, each holding at most `capacity` values.
///
/// Values are appended to the last queue; a new queue is started only when
/// the last one is full. Reading the queues front to back therefore yields
/// the values in the order they were pushed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkedQueueList {
    capacity: NonZeroUsize,
    queues:   Vec<VecDeque<f64>>,
}

impl ChunkedQueueList {
    #[must_use]
    pub const fn new(capacity: NonZeroUsize) -> Self {
        Self { capacity,
               queues: Vec::new() }
    }

    /// Partitions `values` in order.
    ///
    /// # Example
    /// ```
    /// use std::num::NonZeroUsize;
    ///
    /// use tokcalc::interpreter::view::chunked::ChunkedQueueList;
    ///
    /// let capacity = NonZeroUsize::new(2).unwrap();
    /// let list = ChunkedQueueList::from_values(capacity, [1.0, 2.0, 3.0, 4.0, 5.0]);
    /// assert_eq!(list.to_vecs(), vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]]);
    /// ```
    pub fn from_values(capacity: NonZeroUsize, values: impl IntoIterator<Item = f64>) -> Self {
        let mut list = Self::new(capacity);
        for value in values {
            list.push(value);
        }
        list
    }

    /// Appends a value, opening a new queue if the last one is full.
    pub fn push(&mut self, value: f64) {
        let capacity = self.capacity.get();
        if self.queues.last().is_none_or(|tail| tail.len() >= capacity) {
            self.queues.push(VecDeque::new());
        }
        if let Some(tail) = self.queues.last_mut() {
            tail.push_back(value);
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// The queues in order.
    #[must_use]
    pub fn queues(&self) -> &[VecDeque<f64>] {
        &self.queues
    }

    /// Iterates over every value across all queues, in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.queues.iter().flatten().copied()
    }

    /// Copies the queues into plain vectors.
    #[must_use]
    pub fn to_vecs(&self) -> Vec<Vec<f64>> {
        self.queues.iter().map(|q| q.iter().copied().collect()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }
}

impl fmt::Display for ChunkedQueueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.queues.is_empty() {
            return f.write_str("  [None]");
        }
        for (i, queue) in self.queues.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "  Queue {}: ", i + 1)?;
            write_list(f, queue.iter().copied().map(Real))?;
        }
        Ok(())
    }
}

/// The expression followed by its literals and buckets split into queues.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkedView {
    pub expression: Vec<Token>,
    pub result:     f64,
    /// Every numeric literal of the expression, in encounter order.
    pub input:      ChunkedQueueList,
    pub even:       ChunkedQueueList,
    pub odd:        ChunkedQueueList,
}

impl fmt::Display for ChunkedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Representation: ")?;
        write_list(f, &self.expression)?;
        writeln!(f, "\nResult: {}", format_real(self.result))?;
        writeln!(f, "Input Queues:\n{}", self.input)?;
        writeln!(f, "Even Queues:\n{}", self.even)?;
        write!(f, "Odd Queues:\n{}", self.odd)
    }
}

/// Renders the chunked view.
///
/// Both capacities are validated before any partitioning happens. The numeric
/// literals of `expression` are split with `capacity_input`; the even and odd
/// buckets are split independently with `capacity_bucket`.
///
/// # Errors
/// Returns `ConfigError::CapacityTooSmall` if either capacity is below one.
///
/// # Example
/// ```
/// use tokcalc::{render_chunked, tokenize};
///
/// let t = tokenize("1+2+3+4+5").unwrap();
/// let view = render_chunked(&t.expression, &t.even, &t.odd, 15.0, 2, 2).unwrap();
/// assert_eq!(view.input.to_vecs(), vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]]);
/// assert_eq!(view.odd.to_vecs(), vec![vec![1.0, 3.0], vec![5.0]]);
///
/// assert!(render_chunked(&t.expression, &t.even, &t.odd, 15.0, 0, 2).is_err());
/// ```
pub fn render_chunked(expression: &Expression,
                      even: &Bucket,
                      odd: &Bucket,
                      result: f64,
                      capacity_input: i64,
                      capacity_bucket: i64)
                      -> Result<ChunkedView, ConfigError> {
    let (input_capacity, bucket_capacity) =
        Capacities { input:  capacity_input,
                     bucket: capacity_bucket, }.validate()?;

    let input = ChunkedQueueList::from_values(input_capacity, expression.numbers());
    let even_queues = ChunkedQueueList::from_values(bucket_capacity, even.iter());
    let odd_queues = ChunkedQueueList::from_values(bucket_capacity, odd.iter());

    debug!(input = input.len(),
           even = even_queues.len(),
           odd = odd_queues.len(),
           "partitioned into queues");

    Ok(ChunkedView { expression: expression.tokens().to_vec(),
                     result,
                     input,
                     even: even_queues,
                     odd: odd_queues })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn concatenation_preserves_order() {
        let source: Vec<f64> = (0..17).map(f64::from).collect();
        for n in 1..=6 {
            let list = ChunkedQueueList::from_values(cap(n), source.iter().copied());
            assert_eq!(list.values().collect::<Vec<_>>(), source);
            assert!(list.queues().iter().all(|q| !q.is_empty() && q.len() <= n));
            assert!(list.queues()[..list.len() - 1].iter().all(|q| q.len() == n));
        }
    }

    #[test]
    fn capacity_one_makes_one_queue_per_value() {
        let list = ChunkedQueueList::from_values(cap(1), [7.0, 8.0, 9.0]);
        assert_eq!(list.to_vecs(), vec![vec![7.0], vec![8.0], vec![9.0]]);
    }

    #[test]
    fn empty_list_displays_none() {
        let list = ChunkedQueueList::new(cap(3));
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "  [None]");
    }

    #[test]
    fn display_numbers_queues_from_one() {
        let list = ChunkedQueueList::from_values(cap(2), [1.0, 2.0, 3.5]);
        assert_eq!(list.to_string(), "  Queue 1: [1.0, 2.0]\n  Queue 2: [3.5]");
    }

    #[test]
    fn huge_capacity_keeps_everything_in_one_queue() {
        let list = ChunkedQueueList::from_values(cap(usize::MAX), [1.0, 2.0, 3.0]);
        assert_eq!(list.to_vecs(), vec![vec![1.0, 2.0, 3.0]]);
    }

    #[test]
    fn input_capacity_is_checked_first() {
        let err = Capacities { input: 0, bucket: 0 }.validate().unwrap_err();
        assert_eq!(err, ConfigError::CapacityTooSmall { name: "input", value: 0 });
    }
}
