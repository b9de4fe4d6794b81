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

use cpkit_core::num::{constants::Zero, ops::checked_arithmetic::CheckedSubVal};
use num_traits::{PrimInt, Signed};

/// Element types a `RangeTree` can aggregate.
///
/// Any signed primitive integer qualifies. Deltas may be negative, which
/// rules out unsigned types. The type's maximum value serves as the neutral
/// element of the minimum.
pub trait RangeValue:
    PrimInt + Signed + Zero + CheckedSubVal + std::fmt::Debug + std::fmt::Display
{
    /// The neutral element of `min`, contributed by subtrees outside a query
    /// window.
    #[inline(always)]
    fn neutral() -> Self {
        Self::max_value()
    }
}

impl<T> RangeValue for T where
    T: PrimInt + Signed + Zero + CheckedSubVal + std::fmt::Debug + std::fmt::Display
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_of<T: RangeValue>() -> T {
        T::neutral()
    }

    #[test]
    fn test_neutral_is_type_maximum() {
        assert_eq!(neutral_of::<i8>(), i8::MAX);
        assert_eq!(neutral_of::<i64>(), i64::MAX);
        assert_eq!(neutral_of::<isize>(), isize::MAX);
    }

    #[test]
    fn test_neutral_is_identity_of_min() {
        for v in [-5_i32, 0, 17, i32::MIN, i32::MAX] {
            assert_eq!(v.min(neutral_of::<i32>()), v);
        }
    }
}
