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

//! # Canonical Ranking Functions
//!
//! Free functions with the `(a, b) -> Ordering` shape that back the built-in
//! comparators. They are public so they can be chained into a
//! [`Comparator`](crate::comparator::Comparator) or handed to
//! `slice::sort_by` directly.
//!
//! - `compare_float`: float ranking where incomparable pairs tie.
//! - `compare_seq`: shorter-length-first, then element-wise.
//! - `compare_map`: smaller-size-first, then entry by entry over the left
//!   map. Traversal order of a `HashMap` is unspecified, so the result is
//!   only deterministic when at most one entry differs.
//! - `compare_btree_map`: the same rule walked in ascending key order, which
//!   makes it deterministic for any number of differing entries.

use crate::comparable::Comparable;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Ranks two floats; a pair that is neither less nor greater is `Equal`.
///
/// # Examples
///
/// ```rust
/// # use std::cmp::Ordering;
/// # use strand_cmp::rank::compare_float;
/// assert_eq!(compare_float(&1.0, &2.0), Ordering::Less);
/// assert_eq!(compare_float(&f64::NAN, &2.0), Ordering::Equal);
/// ```
#[inline]
pub fn compare_float<F>(a: &F, b: &F) -> Ordering
where
    F: Float,
{
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Ranks two sequences: the shorter one is less; equal lengths are compared
/// element by element and the first differing element decides.
///
/// This is not dictionary order: `[9]` is less than `[1, 2]`.
///
/// # Examples
///
/// ```rust
/// # use std::cmp::Ordering;
/// # use strand_cmp::rank::compare_seq;
/// assert_eq!(compare_seq(&[1, 2, 3], &[1, 2, 4]), Ordering::Less);
/// assert_eq!(compare_seq(&[1, 2], &[1, 2, 3]), Ordering::Less);
/// assert_eq!(compare_seq(&[9], &[1, 2]), Ordering::Less);
/// ```
pub fn compare_seq<T>(a: &[T], b: &[T]) -> Ordering
where
    T: Comparable,
{
    a.len().cmp(&b.len()).then_with(|| {
        a.iter()
            .zip(b)
            .map(|(x, y)| x.compare(y))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// Ranks two hash maps.
///
/// The smaller map is less. For maps of equal size, every key of `a` is
/// looked up in `b`: a key missing from `b` makes `a` less, otherwise the
/// values are ranked and the first non-equal pair decides.
///
/// # Determinism
///
/// Keys are visited in the map's iteration order, which is unspecified. The
/// result is only well-defined when at most one entry differs; use
/// [`compare_btree_map`] when several entries may differ.
pub fn compare_map<K, V, S>(a: &HashMap<K, V, S>, b: &HashMap<K, V, S>) -> Ordering
where
    K: Eq + Hash,
    V: Comparable,
    S: BuildHasher,
{
    a.len()
        .cmp(&b.len())
        .then_with(|| rank_entries(a.iter(), |key| b.get(key)))
}

/// Ranks two ordered maps with the same rule as [`compare_map`], visiting
/// keys of `a` in ascending order.
///
/// # Examples
///
/// ```rust
/// # use std::cmp::Ordering;
/// # use std::collections::BTreeMap;
/// # use strand_cmp::rank::compare_btree_map;
/// let a = BTreeMap::from([("a", 1), ("b", 5)]);
/// let b = BTreeMap::from([("a", 2), ("b", 1)]);
/// // "a" is visited first and decides.
/// assert_eq!(compare_btree_map(&a, &b), Ordering::Less);
/// ```
pub fn compare_btree_map<K, V>(a: &BTreeMap<K, V>, b: &BTreeMap<K, V>) -> Ordering
where
    K: Ord,
    V: Comparable,
{
    a.len()
        .cmp(&b.len())
        .then_with(|| rank_entries(a.iter(), |key| b.get(key)))
}

fn rank_entries<'m, K, V, I, L>(entries: I, mut lookup: L) -> Ordering
where
    K: 'm,
    V: Comparable + 'm,
    I: Iterator<Item = (&'m K, &'m V)>,
    L: FnMut(&K) -> Option<&'m V>,
{
    for (key, value) in entries {
        let Some(other) = lookup(key) else {
            return Ordering::Less;
        };
        match value.compare(other) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    Ordering::Equal
}
