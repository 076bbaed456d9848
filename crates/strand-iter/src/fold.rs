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

//! # Folds
//!
//! Aggregations over a whole sequence, built on [`Sequence::reduce`]. Like
//! `reduce` they return `None` for a sequence with no items left.
//!
//! - `max` / `min`: ranked through [`Comparable`], ties keep the later item.
//! - `max_by` / `min_by`: ranked through a [`Comparator`] template.
//! - `sum`: plain addition.
//! - `checked_sum`: addition that gives up with `None` on overflow.

use crate::sequence::Sequence;
use num_traits::CheckedAdd;
use std::cmp::Ordering;
use std::ops::Add;
use strand_cmp::{Comparable, Comparator};

/// Returns the greatest remaining item.
///
/// # Examples
///
/// ```rust
/// # use strand_iter::{as_seq, max};
/// assert_eq!(max(as_seq((1..=10).collect::<Vec<_>>())), Some(10));
/// assert_eq!(max(as_seq(vec!["pear", "apple", "fig"])), Some("pear"));
/// ```
#[inline]
pub fn max<S>(mut seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Comparable,
{
    seq.reduce(|acc, value| match acc.compare(&value) {
        Ordering::Greater => acc,
        _ => value,
    })
}

/// Returns the smallest remaining item.
#[inline]
pub fn min<S>(mut seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Comparable,
{
    seq.reduce(|acc, value| match acc.compare(&value) {
        Ordering::Less => acc,
        _ => value,
    })
}

/// Returns the greatest remaining item according to `comparator`.
///
/// # Examples
///
/// ```rust
/// # use strand_cmp::by;
/// # use strand_iter::{as_seq, max_by};
/// let by_len = by!(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// assert_eq!(max_by(as_seq(vec!["fig", "banana", "kiwi"]), &by_len), Some("banana"));
/// ```
#[inline]
pub fn max_by<S>(mut seq: S, comparator: &Comparator<'_, S::Item>) -> Option<S::Item>
where
    S: Sequence,
{
    seq.reduce(|acc, value| match comparator.compare(&acc, &value) {
        Ordering::Greater => acc,
        _ => value,
    })
}

/// Returns the smallest remaining item according to `comparator`.
#[inline]
pub fn min_by<S>(mut seq: S, comparator: &Comparator<'_, S::Item>) -> Option<S::Item>
where
    S: Sequence,
{
    seq.reduce(|acc, value| match comparator.compare(&acc, &value) {
        Ordering::Less => acc,
        _ => value,
    })
}

/// Adds up the remaining items.
///
/// # Examples
///
/// ```rust
/// # use strand_iter::{as_seq, sum};
/// assert_eq!(sum(as_seq((1..=10).collect::<Vec<_>>())), Some(55));
/// assert_eq!(sum(as_seq(Vec::<i32>::new())), None);
/// ```
#[inline]
pub fn sum<S>(mut seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Add<Output = S::Item>,
{
    seq.reduce(|acc, value| acc + value)
}

/// Adds up the remaining items, returning `None` on overflow or when the
/// sequence has no items left.
///
/// Stops pulling at the item that overflows.
///
/// # Examples
///
/// ```rust
/// # use strand_iter::{as_seq, checked_sum};
/// assert_eq!(checked_sum(as_seq(vec![100_u8, 100])), Some(200));
/// assert_eq!(checked_sum(as_seq(vec![200_u8, 100])), None);
/// ```
pub fn checked_sum<S>(mut seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: CheckedAdd,
{
    let mut acc = seq.next()?;
    while let Some(value) = seq.next() {
        acc = acc.checked_add(&value)?;
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::as_seq;
    use proptest::prelude::*;
    use strand_cmp::by;

    fn one_to_ten() -> crate::source::Source<i32> {
        as_seq((1..=10).collect::<Vec<_>>())
    }

    #[test]
    fn test_max() {
        assert_eq!(max(one_to_ten()), Some(10));
        assert_eq!(max(as_seq(vec![3, 9, 2])), Some(9));
        assert_eq!(max(as_seq(vec![1.5, -2.0, 0.25])), Some(1.5));
    }

    #[test]
    fn test_min() {
        assert_eq!(min(one_to_ten()), Some(1));
        assert_eq!(min(as_seq(vec!['q', 'c', 'x'])), Some('c'));
    }

    #[test]
    fn test_max_empty_is_none() {
        assert_eq!(max(as_seq(Vec::<u64>::new())), None);
        assert_eq!(min(as_seq(Vec::<u64>::new())), None);
    }

    #[test]
    fn test_max_tie_keeps_later_item() {
        let by_len = by!(|a: &&str, b: &&str| a.len().cmp(&b.len()));
        assert_eq!(max_by(as_seq(vec!["ab", "cd"]), &by_len), Some("cd"));
        assert_eq!(min_by(as_seq(vec!["ab", "cd"]), &by_len), Some("cd"));
    }

    #[test]
    fn test_min_by_comparator_chain() {
        let by_abs = by!(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
        assert_eq!(min_by(as_seq(vec![-7, 3, -1, 5]), &by_abs), Some(-1));
        assert_eq!(max_by(as_seq(vec![-7, 3, -1, 5]), &by_abs), Some(-7));
    }

    #[test]
    fn test_max_over_stage() {
        assert_eq!(max(one_to_ten().filter(|v| v % 3 == 0)), Some(9));
        assert_eq!(max(one_to_ten().map(|v| -v)), Some(-1));
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(one_to_ten()), Some(55));
        assert_eq!(sum(as_seq(vec![0.5, 0.25])), Some(0.75));
        assert_eq!(sum(as_seq(Vec::<i32>::new())), None);
    }

    #[test]
    fn test_checked_sum() {
        assert_eq!(checked_sum(one_to_ten()), Some(55));
        assert_eq!(checked_sum(as_seq(vec![i64::MAX, 1])), None);
        assert_eq!(checked_sum(as_seq(Vec::<i64>::new())), None);
    }

    #[test]
    fn test_checked_sum_stops_at_overflow() {
        let mut seq = as_seq(vec![250_u8, 10, 1, 2]);
        assert_eq!(checked_sum(&mut seq), None);
        assert_eq!(seq.next(), Some(1));
    }

    proptest! {
        #[test]
        fn prop_max_matches_std(values in proptest::collection::vec(any::<i32>(), 1..32)) {
            prop_assert_eq!(max(as_seq(values.clone())), values.iter().copied().max());
        }

        #[test]
        fn prop_checked_sum_matches_wide_sum(values in proptest::collection::vec(any::<i16>(), 1..16)) {
            let wide: i64 = values.iter().map(|v| i64::from(*v)).sum();
            let expected = i16::try_from(wide).ok();
            // Only compare when no prefix overflows, since checked_sum stops early.
            let prefix_ok = values
                .iter()
                .try_fold(0_i16, |acc, v| acc.checked_add(*v))
                .is_some();
            if prefix_ok {
                prop_assert_eq!(checked_sum(as_seq(values)), expected);
            }
        }
    }
}
