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

/// The error type for building a [`Comparator`](crate::comparator::Comparator).
///
/// Both variants are caller programming errors. The panicking constructors
/// report them as a panic message; the `try_` constructors hand them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparatorError {
    /// No ranking function was supplied.
    NoRankingFunctions,
    /// A ranking function slot was empty.
    MissingRankingFunction {
        /// Zero-based position of the empty slot in the supplied chain.
        position: usize,
    },
}

impl std::fmt::Display for ComparatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRankingFunctions => write!(f, "At least one ranking function is required"),
            Self::MissingRankingFunction { position } => {
                write!(f, "The ranking function at position {} is missing", position)
            }
        }
    }
}

impl std::error::Error for ComparatorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ComparatorError::NoRankingFunctions.to_string(),
            "At least one ranking function is required"
        );
        assert_eq!(
            ComparatorError::MissingRankingFunction { position: 2 }.to_string(),
            "The ranking function at position 2 is missing"
        );
    }
}
