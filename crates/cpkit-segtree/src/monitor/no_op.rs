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

use crate::{
    monitor::range_tree_monitor::RangeTreeMonitor, stats::RangeTreeStatistics,
    value::RangeValue,
};
use cpkit_core::math::interval::ClosedInterval;

/// A monitor that implements `RangeTreeMonitor` but does nothing on any of
/// the events.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor<T>
where
    T: RangeValue,
{
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NoOperationMonitor<T>
where
    T: RangeValue,
{
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> RangeTreeMonitor<T> for NoOperationMonitor<T>
where
    T: RangeValue,
{
    #[inline(always)]
    fn on_query(
        &mut self,
        _window: ClosedInterval<usize>,
        _result: T,
        _statistics: &RangeTreeStatistics,
    ) {
    }

    #[inline(always)]
    fn on_range_update(
        &mut self,
        _window: ClosedInterval<usize>,
        _delta: T,
        _statistics: &RangeTreeStatistics,
    ) {
    }

    #[inline(always)]
    fn on_point_update(
        &mut self,
        _index: usize,
        _previous: T,
        _value: T,
        _statistics: &RangeTreeStatistics,
    ) {
    }

    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_dyn_display() {
        let monitor = NoOperationMonitor::<i64>::new();
        assert_eq!(monitor.name(), "NoOperationMonitor");

        let boxed: Box<dyn RangeTreeMonitor<i64>> = Box::new(monitor);
        assert_eq!(format!("{}", boxed), "RangeTreeMonitor(NoOperationMonitor)");
        assert_eq!(format!("{:?}", boxed), "RangeTreeMonitor(NoOperationMonitor)");
    }
}
