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

//! # Standard Iterator Bridge
//!
//! Adapters between [`Sequence`] and [`std::iter::Iterator`], so stage
//! chains can feed standard adaptors and standard iterators can feed stage
//! chains.
//!
//! ## Highlights
//!
//! - `Iter<S>` implements `Iterator` for any sequence and forwards
//!   `size_hint`. Over a `Source` it is also an `ExactSizeIterator` and a
//!   `FusedIterator`.
//! - `Lift<I>` implements `Sequence` for any iterator; it is `Clone` when
//!   the iterator is, which makes `cycle` available on it.
//!
//! ## Usage
//!
//! ```rust
//! use strand_iter::{Sequence, as_seq, lift};
//!
//! let doubled: Vec<i32> = as_seq(vec![1, 2, 3]).iter().map(|v| v * 2).collect();
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let cycled = lift([1, 2].into_iter()).cycle();
//! assert_eq!(cycled.take(5).collect(), vec![1, 2, 1, 2, 1]);
//! ```

use crate::sequence::Sequence;
use crate::source::Source;
use std::iter::FusedIterator;

/// An [`Iterator`] over the items of a sequence.
///
/// Created by [`Sequence::iter`].
#[derive(Debug, Clone)]
pub struct Iter<S> {
    inner: S,
}

impl<S> Iter<S> {
    #[inline]
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns the wrapped sequence.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> Iterator for Iter<S>
where
    S: Sequence,
{
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> FusedIterator for Iter<Source<T>> where T: Clone {}

impl<T> ExactSizeIterator for Iter<Source<T>>
where
    T: Clone,
{
    #[inline]
    fn len(&self) -> usize {
        self.inner.remaining()
    }
}

/// A [`Sequence`] over the items of a standard iterator.
///
/// Created by [`lift`].
#[derive(Debug, Clone)]
pub struct Lift<I> {
    inner: I,
}

impl<I> Sequence for Lift<I>
where
    I: Iterator,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Wraps a standard iterator into a [`Sequence`].
///
/// Unlike [`as_seq`](crate::source::as_seq) nothing is materialized; the
/// iterator is pulled lazily.
#[inline]
pub fn lift<I>(iter: I) -> Lift<I::IntoIter>
where
    I: IntoIterator,
{
    Lift {
        inner: iter.into_iter(),
    }
}
