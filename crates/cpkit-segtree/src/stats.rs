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

use cpkit_core::num::ops::saturating_arithmetic::SaturatingAddVal;

/// Counters collected by a `RangeTree` across its operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeTreeStatistics {
    /// Total tree nodes entered by queries, updates and materialization.
    pub nodes_visited: u64,
    /// Pending deltas applied to a node and handed to its children.
    pub lazy_pushes: u64,
    /// Completed range-minimum queries, point reads included.
    pub queries: u64,
    /// Completed range-add updates.
    pub range_updates: u64,
    /// Completed point assignments.
    pub point_updates: u64,
    /// The deepest node level entered; the root is level 0.
    pub max_depth: u64,
}

impl RangeTreeStatistics {
    #[inline]
    pub fn on_node_visited(&mut self, depth: u64) {
        self.nodes_visited = self.nodes_visited.saturating_add_val(1);
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn on_lazy_push(&mut self) {
        self.lazy_pushes = self.lazy_pushes.saturating_add_val(1);
    }

    #[inline]
    pub fn on_query(&mut self) {
        self.queries = self.queries.saturating_add_val(1);
    }

    #[inline]
    pub fn on_range_update(&mut self) {
        self.range_updates = self.range_updates.saturating_add_val(1);
    }

    #[inline]
    pub fn on_point_update(&mut self) {
        self.point_updates = self.point_updates.saturating_add_val(1);
    }

    /// Total operations issued against the tree.
    #[inline]
    pub fn operations(&self) -> u64 {
        self.queries
            .saturating_add_val(self.range_updates)
            .saturating_add_val(self.point_updates)
    }
}

impl std::fmt::Display for RangeTreeStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Range Tree Statistics:")?;
        writeln!(f, "  Nodes visited:        {}", self.nodes_visited)?;
        writeln!(f, "  Lazy pushes:          {}", self.lazy_pushes)?;
        writeln!(f, "  Queries:              {}", self.queries)?;
        writeln!(f, "  Range updates:        {}", self.range_updates)?;
        writeln!(f, "  Point updates:        {}", self.point_updates)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_and_depth() {
        let mut stats = RangeTreeStatistics::default();
        stats.on_node_visited(0);
        stats.on_node_visited(3);
        stats.on_node_visited(2);
        stats.on_query();
        stats.on_range_update();
        stats.on_point_update();
        stats.on_point_update();

        assert_eq!(stats.nodes_visited, 3);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.operations(), 4);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = RangeTreeStatistics {
            lazy_pushes: u64::MAX,
            ..Default::default()
        };
        stats.on_lazy_push();
        assert_eq!(stats.lazy_pushes, u64::MAX);
    }

    #[test]
    fn test_display_lists_counters() {
        let stats = RangeTreeStatistics {
            nodes_visited: 12,
            ..Default::default()
        };
        let rendered = stats.to_string();
        assert!(rendered.starts_with("Range Tree Statistics:"));
        assert!(rendered.contains("Nodes visited:        12"));
    }
}
