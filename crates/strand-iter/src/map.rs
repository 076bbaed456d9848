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

/// A stage yielding `f(item)` for every upstream item.
///
/// Created by [`Sequence::map`] or the free function [`map`]. Exhaustion
/// propagates without calling `f`.
///
/// # Examples
///
/// ```rust
/// # use strand_iter::{Sequence, as_seq};
/// let mut labels = as_seq(vec![1, 2, 3]).map(|i| i.to_string());
/// assert_eq!(labels.next().as_deref(), Some("1"));
/// assert_eq!(labels.next().as_deref(), Some("2"));
/// assert_eq!(labels.next().as_deref(), Some("3"));
/// assert_eq!(labels.next(), None);
/// ```
#[derive(Clone)]
pub struct Map<S, F> {
    upstream: S,
    f: F,
}

impl<S, F> Map<S, F> {
    #[inline]
    pub(crate) fn new(upstream: S, f: F) -> Self {
        Self { upstream, f }
    }

    /// Consumes the stage and returns its upstream.
    #[inline]
    pub fn into_inner(self) -> S {
        self.upstream
    }
}

impl<S, F, B> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.upstream.next().map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<S, F> std::fmt::Debug for Map<S, F>
where
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("upstream", &self.upstream)
            .finish()
    }
}

/// Maps every item of `seq` through `f`.
///
/// Equivalent to [`Sequence::map`].
#[inline]
pub fn map<S, F, B>(seq: S, f: F) -> Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> B,
{
    Map::new(seq, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::as_seq;
    use std::cell::Cell;

    #[test]
    fn test_map_transforms_each_item() {
        let seq = map(as_seq(vec![1, 2, 3]), |v| v * v);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 4, 9]);
    }

    #[test]
    fn test_map_changes_item_type() {
        let mut seq = as_seq(vec!["a", "bb", "ccc"]).map(str::len);
        assert_eq!(seq.collect(), vec![1, 2, 3]);
    }

    #[test]
    fn test_exhaustion_skips_transform() {
        let calls = Cell::new(0);
        let mut seq = as_seq(vec![1]).map(|v| {
            calls.set(calls.get() + 1);
            v + 1
        });
        assert_eq!(seq.next(), Some(2));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = as_seq(vec![1, 2, 3]).map(|v| v * 10);
        let mut copy = original.clone();

        assert_eq!(copy.next(), Some(10));
        assert_eq!(copy.next(), Some(20));
        assert_eq!(original.next(), Some(10));
        assert_eq!(copy.next(), Some(30));
        assert_eq!(copy.next(), None);
        assert_eq!(original.next(), Some(20));
        assert_eq!(original.next(), Some(30));
        assert_eq!(original.next(), None);
    }

    #[test]
    fn test_size_hint_passes_through() {
        let seq = as_seq(vec![1, 2, 3]).map(|v| v + 1);
        assert_eq!(seq.size_hint(), (3, Some(3)));
    }
}
