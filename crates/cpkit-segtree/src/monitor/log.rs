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

/// A monitor that prints one row per operation to standard output.
///
/// ```text
/// Op     | Window           | Argument     | Result       | Nodes
/// ------------------------------------------------------------------
/// query  | [1, 4]           | -            | 2            | 9
/// ```
#[derive(Debug, Clone)]
pub struct LogMonitor<T>
where
    T: RangeValue,
{
    print_header: bool,
    rows_logged: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> LogMonitor<T>
where
    T: RangeValue,
{
    /// Creates a new `LogMonitor`. When `print_header` is set, the column
    /// header is printed once the tree has been built.
    pub fn new(print_header: bool) -> Self {
        Self {
            print_header,
            rows_logged: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the number of rows printed so far, header excluded.
    #[inline]
    pub fn rows_logged(&self) -> u64 {
        self.rows_logged
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<6} | {:<16} | {:<12} | {:<12} | {:<10}",
            "Op", "Window", "Argument", "Result", "Nodes"
        );
        println!("{}", "-".repeat(66));
    }

    #[inline(always)]
    fn log_line(
        &mut self,
        op: &str,
        window: &str,
        argument: &str,
        result: &str,
        statistics: &RangeTreeStatistics,
    ) {
        println!(
            "{:<6} | {:<16} | {:<12} | {:<12} | {:<10}",
            op, window, argument, result, statistics.nodes_visited
        );
        self.rows_logged += 1;
    }
}

impl<T> Default for LogMonitor<T>
where
    T: RangeValue,
{
    fn default() -> Self {
        Self::new(true)
    }
}

impl<T> std::fmt::Display for LogMonitor<T>
where
    T: RangeValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(print_header: {}, rows_logged: {})",
            self.print_header, self.rows_logged
        )
    }
}

impl<T> RangeTreeMonitor<T> for LogMonitor<T>
where
    T: RangeValue,
{
    fn on_build(&mut self, len: usize) {
        if self.print_header {
            println!("Range tree built over {} elements.", len);
            self.print_header();
        }
    }

    fn on_query(
        &mut self,
        window: ClosedInterval<usize>,
        result: T,
        statistics: &RangeTreeStatistics,
    ) {
        let window = window.to_string();
        let result = result.to_string();
        self.log_line("query", &window, "-", &result, statistics);
    }

    fn on_range_update(
        &mut self,
        window: ClosedInterval<usize>,
        delta: T,
        statistics: &RangeTreeStatistics,
    ) {
        let window = window.to_string();
        let argument = format!("{:+}", delta);
        self.log_line("add", &window, &argument, "-", statistics);
    }

    fn on_point_update(
        &mut self,
        index: usize,
        previous: T,
        value: T,
        statistics: &RangeTreeStatistics,
    ) {
        let window = ClosedInterval::singleton(index).to_string();
        let argument = format!("{} -> {}", previous, value);
        self.log_line("assign", &window, &argument, "-", statistics);
    }

    fn name(&self) -> &str {
        "LogMonitor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_counted_per_event() {
        let mut monitor = LogMonitor::<i32>::new(false);
        let stats = RangeTreeStatistics::default();

        monitor.on_build(4);
        monitor.on_query(ClosedInterval::new(0, 3), 1, &stats);
        monitor.on_range_update(ClosedInterval::new(1, 2), -4, &stats);
        monitor.on_point_update(3, 7, 9, &stats);

        assert_eq!(monitor.rows_logged(), 3);
    }

    #[test]
    fn test_display() {
        let monitor = LogMonitor::<i64>::default();
        assert_eq!(
            monitor.to_string(),
            "LogMonitor(print_header: true, rows_logged: 0)"
        );
        assert_eq!(monitor.name(), "LogMonitor");
    }
}
