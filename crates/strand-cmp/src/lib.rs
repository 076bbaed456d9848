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

//! # Strand Cmp
//!
//! The ordering half of the Strand utilities: a single capability for
//! ordering values and comparators that compose several ranking functions
//! into one total order.
//!
//! ## Modules
//!
//! - `comparable`: the `Comparable` capability and its canonical
//!   implementations for integers, floats, `bool`, `char`, text, raw bytes
//!   and timestamps.
//! - `comparator`: `Comparator` templates built from ranking functions
//!   (`by!`, `Comparator::by`), subject binding (`is`) and the comparison
//!   predicates on `BoundComparator`.
//! - `rank`: canonical ranking functions for floats, sequences and maps.
//! - `error`: `ComparatorError`, raised for malformed ranking chains.
//!
//! ## Usage
//!
//! ```rust
//! use strand_cmp::{is, is_seq};
//!
//! assert!(is(1).less(2));
//! assert!(is_seq(vec![1, 2]).less(vec![1, 2, 3]));
//! ```
//!
//! ## Features
//!
//! - `chrono` (default): `Comparable` for `chrono::DateTime<Tz>` and
//!   `chrono::NaiveDateTime`.

pub mod comparable;
pub mod comparator;
pub mod error;
pub mod rank;

pub use comparable::Comparable;
pub use comparator::{BoundComparator, Comparator, RankFn, is, is_btree_map, is_map, is_seq};
pub use error::ComparatorError;
