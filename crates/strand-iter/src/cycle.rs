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

//! # Cycle Stage
//!
//! `Cycle<S>` keeps an untouched origin of its upstream and pulls from a
//! working copy. When the copy runs dry it is replaced by a fresh clone of
//! the origin and pulling continues, so the stage never runs out unless the
//! origin itself is empty.
//!
//! Cloning a `Cycle` rebuilds it from the origin: the clone starts a new
//! round instead of resuming mid-round where the original is.
//!
//! The size hint is unbounded only when the origin is known to hold at least
//! one item; an origin that may turn out empty reports `(0, None)`.

use crate::sequence::Sequence;

/// A stage repeating its upstream indefinitely.
///
/// Created by [`Sequence::cycle`] or the free function [`cycle`]. A clone
/// is positioned at the start of a round, whatever round the original is in.
///
/// # Examples
///
/// ```rust
/// # use strand_iter::{Sequence, as_seq};
/// let mut cycled = as_seq(vec![1, 2, 3]).cycle();
/// let first_round: Vec<_> = (0..3).filter_map(|_| cycled.next()).collect();
/// let second_round: Vec<_> = (0..3).filter_map(|_| cycled.next()).collect();
/// assert_eq!(first_round, vec![1, 2, 3]);
/// assert_eq!(second_round, vec![1, 2, 3]);
/// ```
#[derive(Debug)]
pub struct Cycle<S> {
    origin: S,
    current: S,
}

impl<S> Cycle<S>
where
    S: Clone,
{
    #[inline]
    pub(crate) fn new(origin: S) -> Self {
        Self {
            current: origin.clone(),
            origin,
        }
    }
}

impl<S> Sequence for Cycle<S>
where
    S: Sequence + Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if let Some(value) = self.current.next() {
            return Some(value);
        }

        tracing::trace!("cycle round exhausted, restarting from origin");
        self.current = self.origin.clone();
        self.current.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.origin.size_hint() {
            (0, Some(0)) => (0, Some(0)),
            (0, _) => (0, None),
            _ => (usize::MAX, None),
        }
    }
}

impl<S> Clone for Cycle<S>
where
    S: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.origin.clone())
    }
}

/// Repeats `seq` indefinitely.
///
/// Equivalent to [`Sequence::cycle`].
#[inline]
pub fn cycle<S>(seq: S) -> Cycle<S>
where
    S: Sequence + Clone,
{
    Cycle::new(seq)
}
