use crate::error::{checked_count, GenError};

/// F(93) is the last fibonacci number that fits in a u64, so at most 94
/// terms (indices 0..=93) can be produced without wrapping.
pub const MAX_TERMS: usize = 94;

/// A bounded fibonacci sequence: 0, 1, 1, 2, 3, 5, ...
///
/// Holds only the term count. Every call to [`Fibonacci::iter`] starts
/// over from the first term, so the same value can be walked any number
/// of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fibonacci {
    count: usize,
}

impl Fibonacci {
    /// A sequence of `count` terms.
    ///
    /// Terms are `u64`, so `count` may be at most [`MAX_TERMS`] (94): the
    /// 95th term, F(94), no longer fits. Negative counts and counts above
    /// the limit are `InvalidArgument`.
    pub fn new(count: i64) -> Result<Self, GenError> {
        let count = checked_count("count", count)?;
        if count > MAX_TERMS {
            return Err(GenError::invalid(
                "count",
                count,
                "terms past index 93 overflow a u64",
            ));
        }
        Ok(Self { count })
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn iter(&self) -> FibonacciIter {
        FibonacciIter {
            current: 0,
            next: 1,
            remaining: self.count,
        }
    }
}

impl<'a> IntoIterator for &'a Fibonacci {
    type Item = u64;
    type IntoIter = FibonacciIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy walk over the running pair.
#[derive(Debug, Clone)]
pub struct FibonacciIter {
    current: u64,
    next: u64,
    remaining: usize,
}

impl Iterator for FibonacciIter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let term = self.current;
        // only F(94) and later saturate, and MAX_TERMS keeps those from
        // ever being yielded
        let following = self.current.saturating_add(self.next);
        self.current = self.next;
        self.next = following;
        Some(term)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for FibonacciIter {}

pub fn render_sequence(sequence: &Fibonacci) -> String {
    sequence
        .iter()
        .map(|term| term.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
