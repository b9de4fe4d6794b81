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

/// The error type for precondition violations on a `RangeTree`.
///
/// Every variant describes a caller bug. The panicking operations of
/// `RangeTree` report the same conditions through their panic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeTreeError {
    /// The tree holds no elements, so no index or range is valid.
    EmptyTree,
    /// The closed range `[start, end]` has `start > end`.
    InvalidRange {
        /// The requested first index.
        start: usize,
        /// The requested last index.
        end: usize,
    },
    /// A range given through `RangeBounds` selects no index at all
    /// (for example `3..3`).
    EmptyRange,
    /// An index lies outside `[0, len - 1]`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The number of elements in the tree.
        len: usize,
    },
    /// The delta `value - current` required by a point update is not
    /// representable in the element type.
    DeltaOverflow {
        /// The index being assigned.
        index: usize,
    },
}

impl std::fmt::Display for RangeTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTree => write!(f, "operation on an empty range tree"),
            Self::InvalidRange { start, end } => write!(
                f,
                "invalid range [{}, {}]: start must not exceed end",
                start, end
            ),
            Self::EmptyRange => write!(f, "range selects no index"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
            Self::DeltaOverflow { index } => write!(
                f,
                "point update at index {} needs a delta that overflows the element type",
                index
            ),
        }
    }
}

impl std::error::Error for RangeTreeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RangeTreeError::InvalidRange { start: 4, end: 2 }.to_string(),
            "invalid range [4, 2]: start must not exceed end"
        );
        assert_eq!(
            RangeTreeError::IndexOutOfBounds { index: 8, len: 8 }.to_string(),
            "index 8 out of bounds for length 8"
        );
        assert_eq!(
            RangeTreeError::EmptyTree.to_string(),
            "operation on an empty range tree"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&RangeTreeError::EmptyRange);
    }
}
