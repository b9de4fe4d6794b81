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

use core::ops::Add;

/// Saturating addition by value.
///
/// Clamps the result to the numeric bounds of the type instead of
/// overflowing. Counters that must never wrap use this.
///
/// # Examples
///
/// ```rust
/// # use cpkit_core::num::ops::saturating_arithmetic::SaturatingAddVal;
/// assert_eq!(250_u8.saturating_add_val(10), 255);
/// assert_eq!((-120_i8).saturating_add_val(-20), -128);
/// assert_eq!(u64::MAX.saturating_add_val(1), u64::MAX);
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

macro_rules! saturating_impl_val {
    ($($t:ty),*) => {
        $(
            impl SaturatingAddVal for $t {
                #[inline(always)]
                fn saturating_add_val(self, v: Self) -> Self {
                    <$t>::saturating_add(self, v)
                }
            }
        )*
    };
}

saturating_impl_val!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_add_clamps_high() {
        assert_eq!(u32::MAX.saturating_add_val(1), u32::MAX);
        assert_eq!(i32::MAX.saturating_add_val(5), i32::MAX);
    }

    #[test]
    fn test_saturating_add_clamps_low() {
        assert_eq!(i8::MIN.saturating_add_val(-1), i8::MIN);
    }

    #[test]
    fn test_saturating_add_in_range() {
        assert_eq!(41_u64.saturating_add_val(1), 42);
    }
}
