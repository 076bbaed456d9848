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

//! # Comparators
//!
//! A [`Comparator`] is an immutable chain of ranking functions consulted in
//! registration order until one of them returns a non-equal result ("first
//! differing criterion wins"). Binding a subject with [`Comparator::is`]
//! yields a [`BoundComparator`] exposing the six comparison predicates; the
//! template itself is never mutated, so one template can be bound to many
//! subjects.
//!
//! ## Usage
//!
//! ```rust
//! use strand_cmp::{by, is};
//!
//! assert!(is(1).less(2));
//! assert!(is("a").greater("A"));
//!
//! // Compare strings ignoring case, reusing the same template.
//! let lowers = by!(|a: &&str, b: &&str| a.to_lowercase().cmp(&b.to_lowercase()));
//! assert!(lowers.is("FOO").equal("foo"));
//! assert!(lowers.is("Bar").less("baz"));
//! ```

use crate::comparable::Comparable;
use crate::error::ComparatorError;
use crate::rank::{compare_btree_map, compare_map, compare_seq};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

/// A shared ranking function `(a, b) -> Ordering`.
pub type RankFn<'f, T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync + 'f>;

/// Wraps a closure or function into a [`RankFn`].
#[inline]
pub fn rank_fn<'f, T, F>(f: F) -> RankFn<'f, T>
where
    F: Fn(&T, &T) -> Ordering + Send + Sync + 'f,
{
    Arc::new(f)
}

/// Builds a [`Comparator`] from one or more closures.
///
/// Expands to [`Comparator::by`], so it panics only if it is handed no
/// closures at all, which the macro grammar already rules out.
///
/// # Examples
///
/// ```rust
/// # use strand_cmp::by;
/// let by_len_then_text = by!(
///     |a: &&str, b: &&str| a.len().cmp(&b.len()),
///     |a: &&str, b: &&str| a.cmp(b),
/// );
/// assert!(by_len_then_text.is("zz").less("aaa"));
/// assert!(by_len_then_text.is("ab").less("ba"));
/// ```
#[macro_export]
macro_rules! by {
    ($($f:expr),+ $(,)?) => {
        $crate::comparator::Comparator::by([$($crate::comparator::rank_fn($f)),+])
    };
}

/// A reusable chain of ranking functions with no subject bound.
pub struct Comparator<'f, T> {
    chain: Arc<[RankFn<'f, T>]>,
}

impl<'f, T> Comparator<'f, T> {
    /// Creates a comparator from the given ranking functions, consulted in
    /// iteration order.
    ///
    /// # Panics
    ///
    /// Panics if `fns` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::cmp::Ordering;
    /// # use strand_cmp::comparator::{Comparator, rank_fn};
    /// let by_len = Comparator::by([rank_fn(|a: &Vec<i32>, b: &Vec<i32>| a.len().cmp(&b.len()))]);
    /// assert!(by_len.is(vec![9, 9]).less(vec![1, 2, 3]));
    /// ```
    pub fn by<I>(fns: I) -> Self
    where
        I: IntoIterator<Item = RankFn<'f, T>>,
    {
        match Self::try_by(fns) {
            Ok(comparator) => comparator,
            Err(e) => panic!("Invalid comparator: {}", e),
        }
    }

    /// Creates a comparator from the given ranking functions.
    ///
    /// Returns [`ComparatorError::NoRankingFunctions`] if `fns` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strand_cmp::comparator::{Comparator, RankFn};
    /// # use strand_cmp::error::ComparatorError;
    /// let empty: Vec<RankFn<'_, i32>> = Vec::new();
    /// assert_eq!(
    ///     Comparator::try_by(empty).err(),
    ///     Some(ComparatorError::NoRankingFunctions)
    /// );
    /// ```
    pub fn try_by<I>(fns: I) -> Result<Self, ComparatorError>
    where
        I: IntoIterator<Item = RankFn<'f, T>>,
    {
        let chain: Vec<RankFn<'f, T>> = fns.into_iter().collect();
        Self::from_chain(chain)
    }

    /// Creates a comparator from ranking function slots that may be empty.
    ///
    /// Returns [`ComparatorError::MissingRankingFunction`] for the first
    /// empty slot, or [`ComparatorError::NoRankingFunctions`] if there are no
    /// slots.
    pub fn try_from_slots<I>(slots: I) -> Result<Self, ComparatorError>
    where
        I: IntoIterator<Item = Option<RankFn<'f, T>>>,
    {
        let chain = slots
            .into_iter()
            .enumerate()
            .map(|(position, slot)| {
                slot.ok_or(ComparatorError::MissingRankingFunction { position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_chain(chain)
    }

    /// Creates a comparator with a single ranking function.
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'f,
    {
        Self {
            chain: Arc::from([rank_fn(f)]),
        }
    }

    fn from_chain(chain: Vec<RankFn<'f, T>>) -> Result<Self, ComparatorError> {
        if chain.is_empty() {
            return Err(ComparatorError::NoRankingFunctions);
        }
        tracing::trace!(criteria = chain.len(), "built comparator");
        Ok(Self {
            chain: Arc::from(chain),
        })
    }

    /// Returns a new comparator that consults `f` after every existing
    /// criterion. `self` is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strand_cmp::by;
    /// let by_len = by!(|a: &String, b: &String| a.len().cmp(&b.len()));
    /// let by_len_then_text = by_len.then(|a: &String, b: &String| a.cmp(b));
    ///
    /// assert!(by_len.is("ab".to_string()).equal("ba".to_string()));
    /// assert!(by_len_then_text.is("ab".to_string()).less("ba".to_string()));
    /// ```
    pub fn then<F>(&self, f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'f,
    {
        let chain: Vec<RankFn<'f, T>> = self
            .chain
            .iter()
            .cloned()
            .chain(std::iter::once(rank_fn(f)))
            .collect();
        Self {
            chain: Arc::from(chain),
        }
    }

    /// Ranks `a` against `b` through the chain: the first non-equal result
    /// wins, and `Equal` is returned when every criterion ties.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strand_cmp::by;
    /// let by_abs = by!(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
    /// let mut values = vec![-3, 1, -2];
    /// values.sort_by(|a, b| by_abs.compare(a, b));
    /// assert_eq!(values, vec![1, -2, -3]);
    /// ```
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.chain
            .iter()
            .map(|rank| rank(a, b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Binds `subject`, returning a comparator ready for the comparison
    /// predicates. The template is not modified.
    #[inline]
    pub fn is(&self, subject: T) -> BoundComparator<'f, T> {
        BoundComparator {
            template: self.clone(),
            subject,
        }
    }

    /// Returns the number of ranking functions in the chain.
    #[inline]
    pub fn criteria(&self) -> usize {
        self.chain.len()
    }
}

impl<'f, T> Clone for Comparator<'f, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            chain: Arc::clone(&self.chain),
        }
    }
}

impl<'f, T> std::fmt::Debug for Comparator<'f, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Comparator(criteria: {})", self.chain.len())
    }
}

impl<'f, T> std::fmt::Display for Comparator<'f, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Comparator(criteria: {})", self.chain.len())
    }
}

/// A comparator with a subject bound.
///
/// Every predicate ranks the subject against the operand, so
/// `is(a).less(b)` reads as "a is less than b".
pub struct BoundComparator<'f, T> {
    template: Comparator<'f, T>,
    subject: T,
}

impl<'f, T> BoundComparator<'f, T> {
    /// Returns the bound subject.
    #[inline]
    pub fn subject(&self) -> &T {
        &self.subject
    }

    /// Consumes the comparator and returns the bound subject.
    #[inline]
    pub fn into_subject(self) -> T {
        self.subject
    }

    /// Returns the unbound template this comparator was created from.
    #[inline]
    pub fn template(&self) -> &Comparator<'f, T> {
        &self.template
    }

    /// Returns a new comparator sharing the same chain, bound to `subject`.
    #[inline]
    pub fn is(&self, subject: T) -> Self {
        self.template.is(subject)
    }

    /// Ranks the subject against `other`.
    #[inline]
    pub fn compare<Q>(&self, other: Q) -> Ordering
    where
        Q: Borrow<T>,
    {
        self.template.compare(&self.subject, other.borrow())
    }

    /// Returns `true` if the subject is equal to `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strand_cmp::is;
    /// assert!(is(1).equal(1));
    /// ```
    #[inline]
    pub fn equal<Q>(&self, other: Q) -> bool
    where
        Q: Borrow<T>,
    {
        self.compare(other).is_eq()
    }

    /// Returns `true` if the subject is not equal to `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strand_cmp::is;
    /// assert!(is(1).not_equal(2));
    /// ```
    #[inline]
    pub fn not_equal<Q>(&self, other: Q) -> bool
    where
        Q: Borrow<T>,
    {
        self.compare(other).is_ne()
    }

    /// Returns `true` if the subject is less than `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strand_cmp::is;
    /// assert!(is(1).less(2));
    /// ```
    #[inline]
    pub fn less<Q>(&self, other: Q) -> bool
    where
        Q: Borrow<T>,
    {
        self.compare(other).is_lt()
    }

    /// Returns `true` if the subject is less than or equal to `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strand_cmp::is;
    /// assert!(is(1).less_equal(1));
    /// assert!(is(1).less_equal(2));
    /// ```
    #[inline]
    pub fn less_equal<Q>(&self, other: Q) -> bool
    where
        Q: Borrow<T>,
    {
        self.compare(other).is_le()
    }

    /// Returns `true` if the subject is greater than `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strand_cmp::is;
    /// assert!(is(2).greater(1));
    /// ```
    #[inline]
    pub fn greater<Q>(&self, other: Q) -> bool
    where
        Q: Borrow<T>,
    {
        self.compare(other).is_gt()
    }

    /// Returns `true` if the subject is greater than or equal to `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strand_cmp::is;
    /// assert!(is(1).greater_equal(1));
    /// assert!(is(2).greater_equal(1));
    /// ```
    #[inline]
    pub fn greater_equal<Q>(&self, other: Q) -> bool
    where
        Q: Borrow<T>,
    {
        self.compare(other).is_ge()
    }
}

impl<'f, T> Clone for BoundComparator<'f, T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            template: self.template.clone(),
            subject: self.subject.clone(),
        }
    }
}

impl<'f, T> std::fmt::Debug for BoundComparator<'f, T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundComparator")
            .field("criteria", &self.template.criteria())
            .field("subject", &self.subject)
            .finish()
    }
}

/// Binds `value` to the canonical ranking of its type.
///
/// # Examples
///
/// ```rust
/// # use strand_cmp::is;
/// assert!(is(1).greater(0));
/// assert!(is(true).greater(false));
/// assert!(is(vec![1_u8, 2, 3]).less(vec![2_u8]));
/// ```
#[inline]
pub fn is<'f, T>(value: T) -> BoundComparator<'f, T>
where
    T: Comparable + 'f,
{
    Comparator::from_fn(|a: &T, b: &T| a.compare(b)).is(value)
}

/// Binds a sequence, ranked shorter-length-first and then element-wise.
///
/// # Examples
///
/// ```rust
/// # use strand_cmp::is_seq;
/// assert!(is_seq(vec![1, 2, 3]).less(vec![1, 2, 4]));
/// assert!(is_seq(vec![1, 2]).less(vec![1, 2, 3]));
/// ```
#[inline]
pub fn is_seq<'f, T>(value: Vec<T>) -> BoundComparator<'f, Vec<T>>
where
    T: Comparable + 'f,
{
    Comparator::from_fn(|a: &Vec<T>, b: &Vec<T>| compare_seq(a, b)).is(value)
}

/// Binds a hash map, ranked by [`compare_map`].
///
/// Only well-defined when at most one entry differs between the maps.
///
/// # Examples
///
/// ```rust
/// # use std::collections::HashMap;
/// # use strand_cmp::is_map;
/// let a = HashMap::from([("foo", 1)]);
/// assert!(is_map(a).equal(HashMap::from([("foo", 1)])));
/// ```
#[inline]
pub fn is_map<'f, K, V, S>(value: HashMap<K, V, S>) -> BoundComparator<'f, HashMap<K, V, S>>
where
    K: Eq + Hash + 'f,
    V: Comparable + 'f,
    S: BuildHasher + 'f,
{
    Comparator::from_fn(|a: &HashMap<K, V, S>, b: &HashMap<K, V, S>| compare_map(a, b)).is(value)
}

/// Binds an ordered map, ranked by [`compare_btree_map`].
#[inline]
pub fn is_btree_map<'f, K, V>(value: BTreeMap<K, V>) -> BoundComparator<'f, BTreeMap<K, V>>
where
    K: Ord + 'f,
    V: Comparable + 'f,
{
    Comparator::from_fn(|a: &BTreeMap<K, V>, b: &BTreeMap<K, V>| compare_btree_map(a, b)).is(value)
}
