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

use core::ops::Sub;

/// Checked subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use cpkit_core::num::ops::checked_arithmetic::CheckedSubVal;
/// let a: i32 = i32::MAX;
/// assert_eq!(a.checked_sub_val(-1), None);
/// assert_eq!(5_i32.checked_sub_val(7), Some(-2));
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if the result
    /// is not representable.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $src_method:ident, $($t:ty),*) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> Option<$t> {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

checked_impl_val!(
    CheckedSubVal,
    checked_sub_val,
    checked_sub,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_sub_signed_delta() {
        // Deltas between two in-range values can still leave the type.
        assert_eq!(i16::MAX.checked_sub_val(i16::MIN), None);
        assert_eq!(0_i16.checked_sub_val(i16::MIN), None);
        assert_eq!(10_i16.checked_sub_val(-5), Some(15));
    }

    #[test]
    fn test_checked_sub_unsigned_underflow() {
        assert_eq!(0_usize.checked_sub_val(1), None);
        assert_eq!(7_usize.checked_sub_val(7), Some(0));
    }
}
