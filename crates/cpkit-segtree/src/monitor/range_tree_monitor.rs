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

use crate::{stats::RangeTreeStatistics, value::RangeValue};
use cpkit_core::math::interval::ClosedInterval;

/// Trait for observing the operations applied to a `RangeTree`.
///
/// Hooks fire after the operation completed, with the tree's statistics
/// already updated.
pub trait RangeTreeMonitor<T>
where
    T: RangeValue,
{
    /// Called once when the tree has been built over `len` elements.
    fn on_build(&mut self, _len: usize) {}

    /// Called after a range-minimum query over `window` returned `result`.
    fn on_query(
        &mut self,
        window: ClosedInterval<usize>,
        result: T,
        statistics: &RangeTreeStatistics,
    );

    /// Called after `delta` was added to every element of `window`.
    fn on_range_update(
        &mut self,
        window: ClosedInterval<usize>,
        delta: T,
        statistics: &RangeTreeStatistics,
    );

    /// Called after the element at `index` changed from `previous` to `value`.
    fn on_point_update(
        &mut self,
        index: usize,
        previous: T,
        value: T,
        statistics: &RangeTreeStatistics,
    );

    /// Returns the name of the monitor.
    fn name(&self) -> &str;
}

impl<T> std::fmt::Debug for dyn RangeTreeMonitor<T>
where
    T: RangeValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RangeTreeMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn RangeTreeMonitor<T>
where
    T: RangeValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RangeTreeMonitor({})", self.name())
    }
}
