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

//! # Source Stage
//!
//! The root of every chain: a `Source<T>` owns a shared, immutable slice of
//! values and a cursor pointing at the next value to hand out. Cloning a
//! source shares the backing values but gives the copy its own cursor at the
//! same position, so the two advance independently.

use crate::sequence::Sequence;
use std::sync::Arc;

/// A sequence over a materialized list of values.
///
/// # Examples
///
/// ```rust
/// # use strand_iter::{Sequence, as_seq};
/// let mut seq = as_seq(vec![1, 2]);
/// assert_eq!(seq.next(), Some(1));
/// assert_eq!(seq.next(), Some(2));
/// assert_eq!(seq.next(), None);
/// ```
pub struct Source<T> {
    values: Arc<[T]>,
    cursor: usize,
}

impl<T> Source<T> {
    /// Creates a source positioned before the first value.
    #[inline]
    pub fn new(values: impl Into<Arc<[T]>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Returns the number of values not yet pulled.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }

    /// Returns the values not yet pulled.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values[self.cursor..]
    }

    /// Returns `true` once every value has been pulled.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.values.len()
    }
}

impl<T> Sequence for Source<T>
where
    T: Clone,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let value = self.values.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> Clone for Source<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
            cursor: self.cursor,
        }
    }
}

impl<T> std::fmt::Debug for Source<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Source")
            .field("remaining", &self.as_slice())
            .finish()
    }
}

impl<T> From<Vec<T>> for Source<T> {
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T> FromIterator<T> for Source<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Creates a [`Source`] over `values`.
///
/// Accepts anything convertible into a shared slice: a `Vec<T>`, an array,
/// a boxed slice, or a borrowed slice of `Clone` values.
///
/// # Examples
///
/// ```rust
/// # use strand_iter::{Sequence, as_seq};
/// assert_eq!(as_seq([1, 2, 3]).collect(), vec![1, 2, 3]);
/// assert_eq!(as_seq(&["a", "b"][..]).collect(), vec!["a", "b"]);
/// ```
#[inline]
pub fn as_seq<T>(values: impl Into<Arc<[T]>>) -> Source<T> {
    Source::new(values)
}
