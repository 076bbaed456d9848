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

//! # The `Sequence` Contract
//!
//! A sequence is anything that can produce its next item or report that it
//! has none left. `next` is the only required method; every other operation
//! (transformation, search, aggregation) is a provided method built on top
//! of it, so each stage implements `next` and gets the full operation set.
//!
//! ## Draining
//!
//! Operations fall in two groups:
//!
//! - Stage builders (`filter`, `take`, `map`, `cycle`) consume the sequence
//!   and pull nothing until the returned stage is pulled.
//! - Terminal operations (`for_each`, `reduce`, `all`, `any`, `find`,
//!   `collect`) borrow the sequence mutably. `for_each`, `reduce` and
//!   `collect` drain it; `all`, `any` and `find` stop at the deciding item
//!   and leave the rest unconsumed, so the sequence can be pulled further.
//!
//! `&mut S` is itself a sequence, which lets a stage chain borrow a sequence
//! without giving it up (see [`Sequence::by_ref`]).

use crate::bridge::Iter;
use crate::cycle::Cycle;
use crate::filter::Filter;
use crate::map::Map;
use crate::take::Take;

/// A lazy, pull-based sequence of items.
///
/// # Examples
///
/// ```rust
/// use strand_iter::{Sequence, as_seq};
///
/// let evens = as_seq(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10])
///     .filter(|v| v % 2 == 0)
///     .collect();
/// assert_eq!(evens, vec![2, 4, 6, 8, 10]);
/// ```
pub trait Sequence {
    /// The type of the items produced.
    type Item;

    /// Advances the sequence and returns the next item, or `None` once the
    /// sequence is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Returns bounds on the number of items left, with the same meaning as
    /// [`Iterator::size_hint`].
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    /// Pulls every remaining item and hands it to `f`.
    #[inline]
    fn for_each<F>(&mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        while let Some(value) = self.next() {
            f(value);
        }
    }

    /// Folds the remaining items left to right, seeding the accumulator with
    /// the first one.
    ///
    /// Returns `None` if the sequence has no items left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strand_iter::{Sequence, as_seq};
    /// let mut seq = as_seq(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    /// assert_eq!(seq.reduce(|acc, v| acc + v), Some(55));
    /// assert_eq!(seq.reduce(|acc, v| acc + v), None);
    /// ```
    fn reduce<F>(&mut self, mut f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut acc = self.next()?;
        while let Some(value) = self.next() {
            acc = f(acc, value);
        }
        Some(acc)
    }

    /// Returns a stage yielding only the items matching `predicate`.
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Returns a stage yielding at most `n` items.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strand_iter::{Sequence, as_seq};
    /// assert_eq!(as_seq(vec![1, 2, 3]).take(10).collect(), vec![1, 2, 3]);
    /// assert_eq!(as_seq(vec![1, 2, 3]).take(0).collect(), Vec::<i32>::new());
    /// ```
    #[inline]
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Returns a stage yielding `f(item)` for every upstream item.
    #[inline]
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Returns `true` if every remaining item matches `predicate`.
    ///
    /// Stops at the first item that does not match; the items after it stay
    /// in the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strand_iter::{Sequence, as_seq};
    /// let mut seq = as_seq(vec![2, 4, 5, 6]);
    /// assert!(!seq.all(|v| v % 2 == 0));
    /// assert_eq!(seq.next(), Some(6));
    /// ```
    fn all<P>(&mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(value) = self.next() {
            if !predicate(&value) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if any remaining item matches `predicate`.
    ///
    /// Stops at the first match; the items after it stay in the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strand_iter::{Sequence, as_seq};
    /// let mut seq = as_seq(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    /// assert!(seq.any(|v| *v > 5));
    /// assert_eq!(seq.next(), Some(7));
    /// ```
    #[inline]
    fn any<P>(&mut self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).is_some()
    }

    /// Returns the first remaining item matching `predicate`.
    ///
    /// Stops at the first match; the items after it stay in the sequence.
    #[inline]
    fn find<P>(&mut self, predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate).next()
    }

    /// Drains the sequence into a `Vec`, in production order.
    fn collect(&mut self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut collected = Vec::with_capacity(self.size_hint().0);
        self.for_each(|value| collected.push(value));
        collected
    }

    /// Returns a stage repeating this sequence forever.
    ///
    /// Each time a round is exhausted the stage restarts from a clone of
    /// `self` as it is now. If `self` has no items the stage has none
    /// either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strand_iter::{Sequence, as_seq};
    /// let cycled = as_seq(vec![1, 2, 3]).cycle();
    /// assert_eq!(cycled.take(7).collect(), vec![1, 2, 3, 1, 2, 3, 1]);
    /// ```
    #[inline]
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized + Clone,
    {
        Cycle::new(self)
    }

    /// Borrows the sequence so a stage chain can pull from it without taking
    /// ownership.
    #[inline]
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Adapts the sequence into a standard [`Iterator`].
    #[inline]
    fn iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }
}

impl<S> Sequence for &mut S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::as_seq;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Yields `1, 2, 3, ...` and records how many items were pulled.
    struct Counter {
        current: u32,
        pulls: Rc<Cell<u32>>,
    }

    impl Counter {
        fn new() -> (Self, Rc<Cell<u32>>) {
            let pulls = Rc::new(Cell::new(0));
            (
                Self {
                    current: 0,
                    pulls: Rc::clone(&pulls),
                },
                pulls,
            )
        }
    }

    impl Sequence for Counter {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            self.pulls.set(self.pulls.get() + 1);
            self.current += 1;
            Some(self.current)
        }
    }

    fn one_to_ten() -> crate::source::Source<i32> {
        as_seq((1..=10).collect::<Vec<_>>())
    }

    #[test]
    fn test_next_until_exhausted() {
        let mut seq = one_to_ten();
        let mut expected = 1;
        while let Some(value) = seq.next() {
            assert_eq!(value, expected);
            expected += 1;
        }
        assert_eq!(expected, 11);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_for_each_drains_in_order() {
        let mut seq = one_to_ten();
        let mut seen = Vec::new();
        seq.for_each(|v| seen.push(v));
        assert_eq!(seen, (1..=10).collect::<Vec<_>>());
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_collect() {
        assert_eq!(one_to_ten().collect(), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_collect_evens() {
        assert_eq!(one_to_ten().filter(|v| v % 2 == 0).collect(), vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_reduce_sum() {
        assert_eq!(one_to_ten().reduce(|acc, v| acc + v), Some(55));
    }

    #[test]
    fn test_reduce_empty_is_none() {
        let mut empty = as_seq(Vec::<i32>::new());
        assert_eq!(empty.reduce(|acc, v| acc + v), None);
    }

    #[test]
    fn test_reduce_single_item_is_seed() {
        let mut seq = as_seq(vec![7]);
        assert_eq!(seq.reduce(|_, _| unreachable!("single item needs no folding")), Some(7));
    }

    #[test]
    fn test_take() {
        assert_eq!(one_to_ten().take(5).collect(), vec![1, 2, 3, 4, 5]);
        assert_eq!(one_to_ten().take(15).collect(), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_all() {
        assert!(one_to_ten().all(|v| *v > 0));
        assert!(!one_to_ten().all(|v| *v > 5));
    }

    #[test]
    fn test_all_leaves_rest_unconsumed() {
        let mut seq = one_to_ten();
        assert!(!seq.all(|v| *v < 3));
        assert_eq!(seq.next(), Some(4));
    }

    #[test]
    fn test_any() {
        assert!(one_to_ten().any(|v| *v > 5));
        assert!(!one_to_ten().any(|v| *v > 10));
    }

    #[test]
    fn test_any_short_circuits() {
        let (mut counter, pulls) = Counter::new();
        let mut checked = 0;
        assert!(counter.any(|v| {
            checked += 1;
            *v > 5
        }));
        assert_eq!(checked, 6);
        assert_eq!(pulls.get(), 6);
        assert_eq!(counter.next(), Some(7));
    }

    #[test]
    fn test_all_short_circuits_on_infinite_sequence() {
        let (mut counter, pulls) = Counter::new();
        assert!(!counter.all(|v| *v < 4));
        assert_eq!(pulls.get(), 4);
        assert_eq!(counter.next(), Some(5));
    }

    #[test]
    fn test_find() {
        assert_eq!(one_to_ten().find(|v| *v == 5), Some(5));
        assert_eq!(one_to_ten().find(|v| *v == 11), None);

        let mut seq = one_to_ten();
        assert_eq!(seq.find(|v| v % 2 == 0), Some(2));
        assert_eq!(seq.find(|v| v % 2 == 0), Some(4));
    }

    #[test]
    fn test_map() {
        let labels = as_seq(vec![1, 2, 3]).map(|v| v.to_string()).collect();
        assert_eq!(labels, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_by_ref_keeps_ownership() {
        let mut seq = one_to_ten();
        let head = seq.by_ref().take(3).collect();
        assert_eq!(head, vec![1, 2, 3]);
        assert_eq!(seq.next(), Some(4));
    }

    #[test]
    fn test_lazy_stages_pull_nothing_until_pulled() {
        let (counter, pulls) = Counter::new();
        let mut chain = counter.filter(|v| v % 2 == 0).map(|v| v * 10).take(2);
        assert_eq!(pulls.get(), 0);
        assert_eq!(chain.next(), Some(20));
        assert_eq!(pulls.get(), 2);
        assert_eq!(chain.collect(), vec![40]);
        assert_eq!(pulls.get(), 4);
        assert_eq!(chain.next(), None);
        assert_eq!(pulls.get(), 4);
    }

    #[test]
    fn test_boxed_trait_object() {
        let mut boxed: Box<dyn Sequence<Item = i32>> =
            Box::new(as_seq(vec![1, 2, 3, 4]).filter(|v| *v > 2));
        assert_eq!(boxed.collect(), vec![3, 4]);
    }
}
