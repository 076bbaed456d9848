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

//! # Strand Iter
//!
//! Lazy, pull-based sequences. A sequence exposes one required operation,
//! `next`; filtering, mapping, truncation, repetition, searching and
//! folding are all derived from it and shared by every stage.
//!
//! ## Modules
//!
//! - `sequence`: the `Sequence` trait and its provided operations.
//! - `source`: `Source<T>`, a sequence over a materialized list (`as_seq`).
//! - `filter`, `map`, `take`, `cycle`: the transformation stages.
//! - `search`: `index` and `find` by equality.
//! - `fold`: `max`, `min`, `max_by`, `min_by`, `sum`, `checked_sum`.
//! - `bridge`: `Iter` (sequence to `Iterator`) and `Lift` (`Iterator` to
//!   sequence).
//!
//! ## Cloning
//!
//! Every stage is `Clone` when its upstream (and closure) is. A clone
//! continues from the same position and advances independently of the
//! original, except for `Cycle`, whose clone starts a fresh round.
//!
//! ## Threading
//!
//! Pulling mutates the stage, and nothing is synchronized: a stage belongs
//! to one caller at a time. To iterate the same data from several places,
//! clone first and hand each place its own copy. `Source` shares its
//! values through an `Arc`, so clones of a `Source<T>` with `T: Send + Sync`
//! can move to other threads.
//!
//! ## Usage
//!
//! ```rust
//! use strand_iter::{Sequence, as_seq, max};
//!
//! let mut seq = as_seq(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//! assert!(seq.any(|v| *v > 5));
//! assert_eq!(seq.next(), Some(7));
//! assert_eq!(max(seq), Some(10));
//! ```

pub mod bridge;
pub mod cycle;
pub mod filter;
pub mod fold;
pub mod map;
pub mod search;
pub mod sequence;
pub mod source;
pub mod take;

pub use bridge::{Iter, Lift, lift};
pub use cycle::{Cycle, cycle};
pub use filter::Filter;
pub use fold::{checked_sum, max, max_by, min, min_by, sum};
pub use map::{Map, map};
pub use search::{find, index};
pub use sequence::Sequence;
pub use source::{Source, as_seq};
pub use strand_cmp::Comparable;
pub use take::Take;
