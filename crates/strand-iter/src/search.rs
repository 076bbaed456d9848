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

/// Returns the zero-based position of the first item equal to `item`, or
/// `None` if the sequence runs out first.
///
/// Pulls up to and including the match.
///
/// # Examples
///
/// ```rust
/// # use strand_iter::{as_seq, index};
/// assert_eq!(index(as_seq(vec!["a", "b", "c"]), &"c"), Some(2));
/// assert_eq!(index(as_seq(vec!["a", "b", "c"]), &"z"), None);
/// ```
pub fn index<S>(mut seq: S, item: &S::Item) -> Option<usize>
where
    S: Sequence,
    S::Item: PartialEq,
{
    let mut position = 0;
    while let Some(value) = seq.next() {
        if value == *item {
            return Some(position);
        }
        position += 1;
    }
    None
}

/// Returns the first item equal to `value`, if any.
///
/// Pulls up to and including the match.
///
/// # Examples
///
/// ```rust
/// # use strand_iter::{as_seq, find};
/// assert_eq!(find(as_seq(vec![1, 2, 3]), &2), Some(2));
/// assert_eq!(find(as_seq(vec![1, 2, 3]), &4), None);
/// ```
#[inline]
pub fn find<S>(mut seq: S, value: &S::Item) -> Option<S::Item>
where
    S: Sequence,
    S::Item: PartialEq,
{
    seq.find(|v| v == value)
}
