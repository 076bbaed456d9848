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

//! # Comparable Capability
//!
//! The single capability a type needs to take part in ordering: a total
//! `compare` against another value of the same type. Built-in scalar kinds
//! (integers, floats, `bool`, `char`, text, raw bytes and timestamps) ship
//! with canonical implementations here; host types implement the trait
//! themselves.
//!
//! ## Canonical rankings
//!
//! - Integers and `char`: numeric order.
//! - `bool`: `false < true`.
//! - Floats: neither-less-nor-greater means equal, so `NaN` ties with every
//!   value and `-0.0 == 0.0`.
//! - `str`, `String`, `[u8]`, `Vec<u8>`: lexicographic, byte-wise.
//! - Timestamps: chronological by instant, so the same instant expressed in
//!   two offsets compares as equal.
//!
//! ## Usage
//!
//! ```rust
//! use std::cmp::Ordering;
//! use strand_cmp::Comparable;
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl Comparable for Person {
//!     fn compare(&self, other: &Self) -> Ordering {
//!         self.age
//!             .compare(&other.age)
//!             .then_with(|| self.name.compare(&other.name))
//!     }
//! }
//!
//! let a = Person { name: "Ada".into(), age: 36 };
//! let b = Person { name: "Bob".into(), age: 36 };
//! assert_eq!(a.compare(&b), Ordering::Less);
//! ```

use crate::rank::compare_float;
use std::cmp::Ordering;

/// A type whose values can be ranked against each other.
///
/// `compare` must describe a total order for every value the caller intends
/// to compare: it returns `Less`, `Equal` or `Greater` as `self` is less
/// than, equal to, or greater than `other`.
pub trait Comparable {
    /// Compares `self` with `other` for order.
    fn compare(&self, other: &Self) -> Ordering;
}

impl<T> Comparable for &T
where
    T: Comparable + ?Sized,
{
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        T::compare(*self, *other)
    }
}

macro_rules! impl_comparable_via_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Comparable for $t {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_comparable_via_ord!(i8, i16, i32, i64, i128, isize);
impl_comparable_via_ord!(u8, u16, u32, u64, u128, usize);
impl_comparable_via_ord!(bool, char, std::time::SystemTime);

impl Comparable for f32 {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        compare_float(self, other)
    }
}

impl Comparable for f64 {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        compare_float(self, other)
    }
}

impl Comparable for [u8] {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

impl Comparable for Vec<u8> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.as_slice().compare(other.as_slice())
    }
}

impl Comparable for str {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.as_bytes().compare(other.as_bytes())
    }
}

impl Comparable for String {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.as_str().compare(other.as_str())
    }
}

#[cfg(feature = "chrono")]
impl<Tz> Comparable for chrono::DateTime<Tz>
where
    Tz: chrono::TimeZone,
{
    // `DateTime` equality and ordering go through the UTC instant.
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

#[cfg(feature = "chrono")]
impl Comparable for chrono::NaiveDateTime {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integers() {
        assert_eq!(1_i32.compare(&1), Ordering::Equal);
        assert_eq!(1_i64.compare(&2), Ordering::Less);
        assert_eq!(1_u32.compare(&0), Ordering::Greater);
        assert_eq!(usize::MAX.compare(&0), Ordering::Greater);
        assert_eq!(i128::MIN.compare(&i128::MAX), Ordering::Less);
    }

    #[test]
    fn test_bools_false_before_true() {
        assert_eq!(false.compare(&true), Ordering::Less);
        assert_eq!(true.compare(&false), Ordering::Greater);
        assert_eq!(true.compare(&true), Ordering::Equal);
    }

    #[test]
    fn test_chars() {
        assert_eq!('a'.compare(&'b'), Ordering::Less);
        assert_eq!('a'.compare(&'A'), Ordering::Greater);
    }

    #[test]
    fn test_floats() {
        assert_eq!(1.0_f64.compare(&2.0), Ordering::Less);
        assert_eq!(2.5_f32.compare(&2.5), Ordering::Equal);
        assert_eq!((-0.0_f64).compare(&0.0), Ordering::Equal);
        // NaN is neither less nor greater than anything.
        assert_eq!(f64::NAN.compare(&1.0), Ordering::Equal);
        assert_eq!(1.0_f64.compare(&f64::NAN), Ordering::Equal);
    }

    #[test]
    fn test_strings_are_byte_wise() {
        assert_eq!("a".compare(&"b"), Ordering::Less);
        // 'a' (0x61) sorts after 'A' (0x41).
        assert_eq!("a".compare(&"A"), Ordering::Greater);
        assert_eq!("ab".compare(&"b"), Ordering::Less);
        assert_eq!(String::from("abc").compare(&String::from("abc")), Ordering::Equal);
    }

    #[test]
    fn test_bytes_are_lexicographic() {
        assert_eq!(vec![1_u8].compare(&vec![2_u8]), Ordering::Less);
        assert_eq!(vec![1_u8, 2, 3].compare(&vec![2_u8]), Ordering::Less);
        assert_eq!(vec![1_u8, 2].compare(&vec![1_u8]), Ordering::Greater);
        let a: &[u8] = &[0, 9];
        let b: &[u8] = &[0, 9];
        assert_eq!(a.compare(&b), Ordering::Equal);
    }

    #[test]
    fn test_system_time() {
        let now = std::time::SystemTime::now();
        let later = now + std::time::Duration::from_secs(1);
        assert_eq!(now.compare(&later), Ordering::Less);
        assert_eq!(later.compare(&now), Ordering::Greater);
        assert_eq!(now.compare(&now), Ordering::Equal);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_datetime_same_instant_in_different_offsets_is_equal() {
        use chrono::{FixedOffset, TimeZone};

        let utc = FixedOffset::east_opt(0).unwrap();
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();

        let a = utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let b = cest.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let c = cest.with_ymd_and_hms(2024, 5, 1, 12, 0, 1).unwrap();

        assert_eq!(a.compare(&b), Ordering::Equal);
        assert_eq!(a.compare(&c), Ordering::Less);
        assert_eq!(c.compare(&a), Ordering::Greater);
    }

    #[test]
    fn test_references_delegate() {
        let a = 3_i32;
        let b = 4_i32;
        assert_eq!(<&i32 as Comparable>::compare(&&a, &&b), Ordering::Less);
    }

    proptest! {
        #[test]
        fn prop_integers_are_antisymmetric(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        }

        #[test]
        fn prop_strings_match_std_order(a in ".*", b in ".*") {
            prop_assert_eq!(a.compare(&b), a.cmp(&b));
        }

        #[test]
        fn prop_finite_floats_are_antisymmetric(a in -1.0e9_f64..1.0e9, b in -1.0e9_f64..1.0e9) {
            prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        }
    }
}
