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

use num_traits::PrimInt;
use std::{
    cmp::{max, min},
    iter::FusedIterator,
    ops::{Bound, RangeBounds, RangeInclusive},
};

/// A closed interval `[start, end]` where both bounds are inclusive.
///
/// A closed interval always holds at least one point, which makes it the
/// natural description of a segment tree node's span: a leaf is the
/// singleton `[i, i]` and an internal node splits at its floor midpoint into
/// `[start, mid]` and `[mid + 1, end]`.
///
/// # Invariants
/// `start` must always be less than or equal to `end`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
}

/// An iterator over the integer points of a `ClosedInterval`.
///
/// # Examples
///
/// ```rust
/// # use cpkit_core::math::interval::ClosedInterval;
/// let iv = ClosedInterval::new(1, 4);
/// let points: Vec<_> = iv.iter().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
#[derive(Clone, Debug)]
pub struct ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    front: T,
    back: T,
    exhausted: bool,
}

impl<T> Iterator for ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.front;
        // Stepping past `back` could overflow when `back == T::max_value()`.
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.front + T::one();
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.back - T::one();
        }
        Some(result)
    }
}

impl<T> ExactSizeIterator for ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    fn len(&self) -> usize {
        if self.exhausted {
            return 0;
        }
        (self.back - self.front)
            .to_usize()
            .and_then(|d| d.checked_add(1))
            .expect("ClosedIntervalIterator: remaining length exceeds usize::MAX")
    }
}

impl<T> FusedIterator for ClosedIntervalIterator<T> where T: PrimInt {}

impl<T> ClosedInterval<T>
where
    T: PrimInt,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cpkit_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(0, 9);
    /// assert_eq!(iv.len(), 10);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "Invalid interval: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates a new `ClosedInterval` if `start <= end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cpkit_core::math::interval::ClosedInterval;
    /// assert!(ClosedInterval::try_new(3, 3).is_some());
    /// assert!(ClosedInterval::try_new(4, 3).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Creates a new `ClosedInterval` without checking the invariant in
    /// release builds.
    ///
    /// The caller must ensure `start <= end`; a `debug_assert!` catches
    /// violations during development.
    #[inline]
    pub fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start <= end,
            "Invalid interval: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates the singleton interval `[value, value]`.
    #[inline]
    pub fn singleton(value: T) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the inclusive end bound.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns the number of points in the interval (`end - start + 1`).
    ///
    /// The result is computed in `T`; an interval covering the whole domain
    /// of `T` overflows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cpkit_core::math::interval::ClosedInterval;
    /// assert_eq!(ClosedInterval::new(4, 4).len(), 1);
    /// assert_eq!(ClosedInterval::new(-2, 2).len(), 5);
    /// ```
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> T {
        self.end - self.start + T::one()
    }

    /// Returns `true` if the interval holds exactly one point.
    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `value` lies in `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cpkit_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(0, 10);
    /// assert!(iv.contains_point(0));
    /// assert!(iv.contains_point(10));
    /// assert!(!iv.contains_point(11));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cpkit_core::math::interval::ClosedInterval;
    /// let a = ClosedInterval::new(0, 10);
    /// assert!(a.contains_interval(ClosedInterval::new(2, 8)));
    /// assert!(a.contains_interval(a));
    /// assert!(!a.contains_interval(ClosedInterval::new(5, 11)));
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if the two intervals share at least one point.
    ///
    /// Closed intervals that touch at a bound intersect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cpkit_core::math::interval::ClosedInterval;
    /// let a = ClosedInterval::new(0, 5);
    /// assert!(a.intersects(ClosedInterval::new(5, 9)));
    /// assert!(!a.intersects(ClosedInterval::new(6, 9)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns `true` if the two intervals share no point.
    #[inline]
    pub fn disjoint(&self, other: Self) -> bool {
        !self.intersects(other)
    }

    /// Calculates the intersection of two intervals, or `None` if they are
    /// disjoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cpkit_core::math::interval::ClosedInterval;
    /// let a = ClosedInterval::new(0, 10);
    /// let b = ClosedInterval::new(5, 15);
    /// assert_eq!(a.intersection(b), Some(ClosedInterval::new(5, 10)));
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        Self::try_new(max(self.start, other.start), min(self.end, other.end))
    }

    /// Returns the floor midpoint, i.e. `floor((start + end) / 2)`.
    ///
    /// Computed as `start + (end - start) / 2` so that it does not overflow
    /// when `start + end` would.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cpkit_core::math::interval::ClosedInterval;
    /// assert_eq!(ClosedInterval::new(0, 7).midpoint(), 3);
    /// assert_eq!(ClosedInterval::new(2, 2).midpoint(), 2);
    /// assert_eq!(ClosedInterval::new(-3, 0).midpoint(), -2);
    /// ```
    #[inline]
    pub fn midpoint(&self) -> T {
        self.start + ((self.end - self.start) >> 1)
    }

    /// Splits the interval at its floor midpoint into `[start, mid]` and
    /// `[mid + 1, end]`.
    ///
    /// Returns `None` for a singleton, which cannot be split.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cpkit_core::math::interval::ClosedInterval;
    /// let (left, right) = ClosedInterval::new(0, 4).split().unwrap();
    /// assert_eq!(left, ClosedInterval::new(0, 2));
    /// assert_eq!(right, ClosedInterval::new(3, 4));
    /// assert!(ClosedInterval::new(7, 7).split().is_none());
    /// ```
    #[inline]
    pub fn split(&self) -> Option<(Self, Self)> {
        if self.is_singleton() {
            return None;
        }
        let mid = self.midpoint();
        Some((
            Self::new_unchecked(self.start, mid),
            Self::new_unchecked(mid + T::one(), self.end),
        ))
    }

    /// Creates an iterator over the points in the interval.
    #[inline]
    pub fn iter(&self) -> ClosedIntervalIterator<T> {
        ClosedIntervalIterator {
            front: self.start,
            back: self.end,
            exhausted: false,
        }
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> RangeBounds<T> for ClosedInterval<T>
where
    T: PrimInt,
{
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.end)
    }
}

impl<T> IntoIterator for ClosedInterval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &ClosedInterval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<RangeInclusive<T>> for ClosedInterval<T>
where
    T: PrimInt,
{
    /// # Panics
    ///
    /// Panics if the range is empty (`start > end`).
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T> From<ClosedInterval<T>> for RangeInclusive<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(iv: ClosedInterval<T>) -> Self {
        iv.start..=iv.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let iv = ClosedInterval::new(10, 20);
        assert_eq!(iv.start(), 10);
        assert_eq!(iv.end(), 20);
        assert_eq!(iv.len(), 11);
        assert!(!iv.is_singleton());
    }

    #[test]
    fn test_construction_singleton() {
        let iv = ClosedInterval::singleton(4_usize);
        assert_eq!(iv, ClosedInterval::new(4, 4));
        assert_eq!(iv.len(), 1);
        assert!(iv.is_singleton());
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedInterval::try_new(5, 10).is_some());
        assert!(ClosedInterval::try_new(5, 5).is_some());
        assert!(ClosedInterval::try_new(10, 5).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        let _ = ClosedInterval::new(3, 2);
    }

    #[test]
    fn test_contains_and_intersects() {
        let a = ClosedInterval::new(2, 6);
        assert!(a.contains_point(2));
        assert!(a.contains_point(6));
        assert!(!a.contains_point(1));

        assert!(a.contains_interval(ClosedInterval::new(3, 6)));
        assert!(!a.contains_interval(ClosedInterval::new(1, 6)));

        assert!(a.intersects(ClosedInterval::new(6, 8)));
        assert!(a.intersects(ClosedInterval::new(0, 2)));
        assert!(a.disjoint(ClosedInterval::new(7, 8)));
        assert!(a.disjoint(ClosedInterval::new(0, 1)));
    }

    #[test]
    fn test_intersection() {
        let a = ClosedInterval::new(0, 10);
        assert_eq!(
            a.intersection(ClosedInterval::new(10, 12)),
            Some(ClosedInterval::new(10, 10))
        );
        assert_eq!(a.intersection(ClosedInterval::new(11, 12)), None);
    }

    #[test]
    fn test_midpoint_is_floor() {
        assert_eq!(ClosedInterval::new(0, 1).midpoint(), 0);
        assert_eq!(ClosedInterval::new(1, 4).midpoint(), 2);
        assert_eq!(ClosedInterval::new(-5, -2).midpoint(), -4);
        assert_eq!(ClosedInterval::new(i32::MAX - 1, i32::MAX).midpoint(), i32::MAX - 1);
    }

    #[test]
    fn test_split_partitions_interval() {
        let iv = ClosedInterval::new(0_usize, 6);
        let (left, right) = iv.split().unwrap();
        assert_eq!(left, ClosedInterval::new(0, 3));
        assert_eq!(right, ClosedInterval::new(4, 6));
        assert_eq!(left.len() + right.len(), iv.len());
        assert_eq!(left.end() + 1, right.start());
    }

    #[test]
    fn test_iterator() {
        let iv = ClosedInterval::new(1, 3);
        assert_eq!(iv.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(iv.iter().len(), 3);
        assert_eq!(iv.iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_iterator_meets_in_middle() {
        let mut it = ClosedInterval::new(0, 2).iter();
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_iterator_at_type_maximum() {
        let iv = ClosedInterval::new(u8::MAX - 1, u8::MAX);
        assert_eq!(iv.iter().collect::<Vec<_>>(), vec![254, 255]);
    }

    #[test]
    fn test_into_iterator_traits() {
        let iv = ClosedInterval::new(0, 2);
        let mut sum = 0;
        for x in &iv {
            sum += x;
        }
        for x in iv {
            sum += x;
        }
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_display_debug() {
        let iv = ClosedInterval::new(1, 5);
        assert_eq!(format!("{}", iv), "[1, 5]");
        assert_eq!(
            format!("{:?}", iv),
            "ClosedInterval { start: 1, end: 5 }"
        );
    }

    #[test]
    fn test_range_inclusive_conversions() {
        let iv: ClosedInterval<i64> = (2..=9).into();
        assert_eq!(iv, ClosedInterval::new(2, 9));
        let range: RangeInclusive<i64> = iv.into();
        assert_eq!(range, 2..=9);
    }

    #[test]
    fn test_range_bounds() {
        let iv = ClosedInterval::new(3, 7);
        assert_eq!(iv.start_bound(), Bound::Included(&3));
        assert_eq!(iv.end_bound(), Bound::Included(&7));
        assert!(iv.contains(&7));
        assert!(!iv.contains(&8));
    }
}
