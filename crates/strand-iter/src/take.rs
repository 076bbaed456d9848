// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::sequence::Sequence;

/// A stage yielding at most a fixed number of upstream items.
///
/// Created by [`Sequence::take`]. Once the budget is spent the stage is
/// exhausted for good, however many items the upstream still holds; asking
/// for more items than the upstream has is not an error.
///
/// # Examples
///
/// ```rust
/// # use strand_iter::{Sequence, as_seq};
/// let mut seq = as_seq(vec![1, 2, 3, 4, 5]).take(3);
/// assert_eq!(seq.next(), Some(1));
/// assert_eq!(seq.next(), Some(2));
/// assert_eq!(seq.next(), Some(3));
/// assert_eq!(seq.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Take<S> {
    upstream: S,
    remaining: usize,
}

impl<S> Take<S> {
    #[inline]
    pub(crate) fn new(upstream: S, n: usize) -> Self {
        Self {
            upstream,
            remaining: n,
        }
    }

    /// Returns how many more items the stage may still yield.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Consumes the stage and returns its upstream.
    #[inline]
    pub fn into_inner(self) -> S {
        self.upstream
    }
}

impl<S> Sequence for Take<S>
where
    S: Sequence,
{
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        if self.remaining == 0 {
            return None;
        }

        let value = self.upstream.next()?;
        self.remaining -= 1;
        if self.remaining == 0 {
            tracing::trace!("take budget spent");
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }

        let (lower, upper) = self.upstream.size_hint();
        let lower = lower.min(self.remaining);
        let upper = match upper {
            Some(upper) => Some(upper.min(self.remaining)),
            None => Some(self.remaining),
        };
        (lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::Sequence;
    use crate::source::as_seq;

    #[test]
    fn test_take_fewer_than_available() {
        let mut seq = as_seq(vec![1, 2, 3, 4, 5]).take(2);
        assert_eq!(seq.collect(), vec![1, 2]);
        assert_eq!(seq.remaining(), 0);
    }

    #[test]
    fn test_take_more_than_available() {
        let mut seq = as_seq(vec![1, 2, 3]).take(10);
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), Some(2));
        assert_eq!(seq.next(), Some(3));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.remaining(), 7);
    }

    #[test]
    fn test_take_zero() {
        let mut seq = as_seq(vec![1, 2, 3]).take(0);
        assert_eq!(seq.next(), None);
        // Nothing was pulled from the upstream.
        assert_eq!(seq.into_inner().remaining(), 3);
    }

    #[test]
    fn test_exhausted_take_stays_exhausted() {
        let mut seq = as_seq(vec![1, 2, 3]).take(1);
        assert_eq!(seq.next(), Some(1));
        for _ in 0..3 {
            assert_eq!(seq.next(), None);
        }
        assert_eq!(seq.into_inner().remaining(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = as_seq(vec![1, 2, 3, 4]).take(3);
        assert_eq!(original.next(), Some(1));

        let mut copy = original.clone();
        assert_eq!(copy.remaining(), 2);
        assert_eq!(copy.next(), Some(2));
        assert_eq!(copy.next(), Some(3));
        assert_eq!(copy.next(), None);

        assert_eq!(original.remaining(), 2);
        assert_eq!(original.next(), Some(2));
        assert_eq!(original.next(), Some(3));
        assert_eq!(original.next(), None);
    }

    #[test]
    fn test_size_hint() {
        assert_eq!(as_seq(vec![1, 2, 3]).take(2).size_hint(), (2, Some(2)));
        assert_eq!(as_seq(vec![1, 2, 3]).take(5).size_hint(), (3, Some(3)));
        assert_eq!(as_seq(vec![1, 2, 3]).take(0).size_hint(), (0, Some(0)));
        assert_eq!(as_seq(vec![1]).cycle().take(4).size_hint(), (4, Some(4)));
    }
}
