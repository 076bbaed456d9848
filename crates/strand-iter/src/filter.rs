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

/// A stage yielding only the upstream items that match a predicate.
///
/// Created by [`Sequence::filter`]. Cloning clones the upstream and the
/// predicate, so the copy filters independently from the same position.
///
/// # Examples
///
/// ```rust
/// # use strand_iter::{Sequence, as_seq};
/// let mut evens = as_seq(vec![1, 2, 3, 4, 5]).filter(|v| v % 2 == 0);
/// assert_eq!(evens.next(), Some(2));
/// assert_eq!(evens.next(), Some(4));
/// assert_eq!(evens.next(), None);
/// ```
#[derive(Clone)]
pub struct Filter<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    #[inline]
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
        }
    }

    /// Consumes the stage and returns its upstream.
    #[inline]
    pub fn into_inner(self) -> S {
        self.upstream
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        loop {
            let value = self.upstream.next()?;
            if (self.predicate)(&value) {
                return Some(value);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.upstream.size_hint().1)
    }
}

impl<S, P> std::fmt::Debug for Filter<S, P>
where
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("upstream", &self.upstream)
            .finish()
    }
}
