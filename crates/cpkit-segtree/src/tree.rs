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

//! Range-minimum segment tree with lazy range-add propagation.
//!
//! `RangeTree` keeps two flat buffers of `4n` slots indexed like a binary
//! heap: `tree[i]` holds the minimum of node `i`'s span and `lazy[i]` holds
//! an additive delta that has been applied to the whole span logically but
//! not yet to `tree[i]` or to the children of `i`.
//!
//! Node `1` spans `[0, n - 1]`; a node spanning `[s, e]` with `s < e` has
//! children `2i` over `[s, m]` and `2i + 1` over `[m + 1, e]` where
//! `m = floor((s + e) / 2)`. The split is fixed at construction and shared
//! by every traversal.
//!
//! Every recursive visit starts with `push`, which moves the node from
//! "dirty" (non-zero lazy slot) to "clean": the delta is added to the
//! node's aggregate and accumulated into the children's lazy slots. Only
//! after that may a traversal read the node's aggregate or descend.

use crate::{
    error::RangeTreeError,
    monitor::{no_op::NoOperationMonitor, range_tree_monitor::RangeTreeMonitor},
    stats::RangeTreeStatistics,
    value::RangeValue,
};
use cpkit_core::math::interval::ClosedInterval;
use std::ops::{Bound, RangeBounds};

/// Heap index of the root node.
const ROOT: usize = 1;

#[inline(always)]
const fn left_child(node: usize) -> usize {
    node << 1
}

#[inline(always)]
const fn right_child(node: usize) -> usize {
    (node << 1) | 1
}

/// A segment tree answering range-minimum queries under range-add updates.
///
/// # Examples
///
/// ```rust
/// # use cpkit_segtree::tree::RangeTree;
/// let mut tree = RangeTree::new(vec![1, 3, 2, 4, 5, 6, 7, 8]);
/// assert_eq!(tree.range_min(1, 4), 2);
///
/// tree.point_update(2, 0);
/// assert_eq!(tree.range_min(1, 4), 0);
///
/// tree.update_range(1, 3, 2);
/// assert_eq!(tree.to_vec(), vec![1, 5, 2, 6, 5, 6, 7, 8]);
/// assert_eq!(tree.range_min(1, 4), 2);
/// ```
///
/// # Empty trees
///
/// A tree built from no values is valid but every query and update on it
/// fails with `RangeTreeError::EmptyTree`; `min` returns `None`.
///
/// # Arithmetic
///
/// Deltas are added with the element type's native `+`. Keeping every
/// logical value, and every accumulated pending delta, inside the range of
/// `T` is the caller's obligation; overflow panics in debug builds.
#[derive(Clone)]
pub struct RangeTree<T, M = NoOperationMonitor<T>>
where
    T: RangeValue,
    M: RangeTreeMonitor<T>,
{
    len: usize,
    tree: Vec<T>,
    lazy: Vec<T>,
    statistics: RangeTreeStatistics,
    monitor: M,
}

impl<T> RangeTree<T>
where
    T: RangeValue,
{
    /// Builds a tree over `values` with the default no-op monitor.
    ///
    /// Runs in O(n).
    #[inline]
    pub fn new(values: Vec<T>) -> Self {
        Self::with_monitor(values, NoOperationMonitor::new())
    }

    /// Builds a tree over a copy of `values`.
    #[inline]
    pub fn from_slice(values: &[T]) -> Self {
        Self::with_monitor(values, NoOperationMonitor::new())
    }
}

impl<T, M> RangeTree<T, M>
where
    T: RangeValue,
    M: RangeTreeMonitor<T>,
{
    /// Builds a tree over `values` that reports every operation to
    /// `monitor`.
    pub fn with_monitor<V>(values: V, monitor: M) -> Self
    where
        V: AsRef<[T]>,
    {
        let values = values.as_ref();
        let len = values.len();
        let slots = len.saturating_mul(4);

        let mut tree = Self {
            len,
            tree: vec![T::neutral(); slots],
            lazy: vec![T::ZERO; slots],
            statistics: RangeTreeStatistics::default(),
            monitor,
        };

        if len > 0 {
            tree.build(values, ROOT, ClosedInterval::new_unchecked(0, len - 1));
        }
        tree.monitor.on_build(len);
        tree
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the statistics collected so far.
    #[inline]
    pub fn statistics(&self) -> &RangeTreeStatistics {
        &self.statistics
    }

    /// Resets all statistics counters to zero.
    #[inline]
    pub fn reset_statistics(&mut self) {
        self.statistics = RangeTreeStatistics::default();
    }

    /// Returns a reference to the monitor.
    #[inline]
    pub fn monitor(&self) -> &M {
        &self.monitor
    }

    /// Returns a mutable reference to the monitor.
    #[inline]
    pub fn monitor_mut(&mut self) -> &mut M {
        &mut self.monitor
    }

    /// Consumes the tree and returns its monitor.
    #[inline]
    pub fn into_monitor(self) -> M {
        self.monitor
    }

    /// Returns the minimum over the closed range `[start, end]`.
    ///
    /// Takes `&mut self` because pending deltas on the visited path are
    /// pushed down; the logical contents never change.
    ///
    /// # Panics
    ///
    /// Panics if the tree is empty, `start > end`, or `end >= len`.
    pub fn range_min(&mut self, start: usize, end: usize) -> T {
        self.try_range_min(start, end)
            .unwrap_or_else(|e| panic!("called `RangeTree::range_min` with {}", e))
    }

    /// Returns the minimum over the closed range `[start, end]`, or the
    /// violated precondition.
    pub fn try_range_min(&mut self, start: usize, end: usize) -> Result<T, RangeTreeError> {
        let window = self.validate_window(start, end)?;
        Ok(self.query_window(window))
    }

    /// Returns the minimum over any `RangeBounds<usize>` window, such as
    /// `2..5`, `..=3` or `..`.
    ///
    /// Unbounded ends resolve to the first and last index. Windows that
    /// select nothing or reach past the end are rejected, never clamped.
    pub fn query<R>(&mut self, range: R) -> Result<T, RangeTreeError>
    where
        R: RangeBounds<usize>,
    {
        let window = self.resolve_bounds(&range)?;
        Ok(self.query_window(window))
    }

    /// Returns the current value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get(&mut self, index: usize) -> T {
        self.try_get(index)
            .unwrap_or_else(|e| panic!("called `RangeTree::get` with {}", e))
    }

    /// Returns the current value at `index`, or the violated precondition.
    pub fn try_get(&mut self, index: usize) -> Result<T, RangeTreeError> {
        self.try_range_min(index, index)
    }

    /// Returns the minimum over all elements, or `None` for an empty tree.
    pub fn min(&mut self) -> Option<T> {
        self.query(..).ok()
    }

    /// Adds `delta` to every element in the closed range `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if the tree is empty, `start > end`, or `end >= len`.
    pub fn update_range(&mut self, start: usize, end: usize, delta: T) {
        self.try_update_range(start, end, delta)
            .unwrap_or_else(|e| panic!("called `RangeTree::update_range` with {}", e))
    }

    /// Adds `delta` to every element in the closed range `[start, end]`, or
    /// returns the violated precondition without touching the tree.
    pub fn try_update_range(
        &mut self,
        start: usize,
        end: usize,
        delta: T,
    ) -> Result<(), RangeTreeError> {
        let window = self.validate_window(start, end)?;
        self.add_window(window, delta);
        Ok(())
    }

    /// Adds `delta` to every element of any `RangeBounds<usize>` window.
    pub fn add<R>(&mut self, range: R, delta: T) -> Result<(), RangeTreeError>
    where
        R: RangeBounds<usize>,
    {
        let window = self.resolve_bounds(&range)?;
        self.add_window(window, delta);
        Ok(())
    }

    /// Sets the element at `index` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len` or the required delta overflows `T`.
    pub fn point_update(&mut self, index: usize, value: T) {
        self.try_point_update(index, value)
            .unwrap_or_else(|e| panic!("called `RangeTree::point_update` with {}", e))
    }

    /// Sets the element at `index` to `value`, or returns the violated
    /// precondition without touching the tree.
    ///
    /// The assignment is a range update of `value - current` over
    /// `[index, index]`. The current value is read through the tree, so
    /// earlier range updates covering `index` are accounted for.
    pub fn try_point_update(&mut self, index: usize, value: T) -> Result<(), RangeTreeError> {
        let window = self.validate_window(index, index)?;
        let span = self.root_span();

        let previous = self.query_node(ROOT, span, window, 0);
        let delta = value
            .checked_sub_val(previous)
            .ok_or(RangeTreeError::DeltaOverflow { index })?;
        self.update_node(ROOT, span, window, delta, 0);

        self.statistics.on_point_update();
        self.monitor
            .on_point_update(index, previous, value, &self.statistics);
        Ok(())
    }

    /// Returns the current value of every element, in index order.
    ///
    /// Pushes every pending delta down to the leaves; runs in O(n).
    pub fn to_vec(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        if self.len > 0 {
            self.collect_leaves(ROOT, self.root_span(), 0, &mut out);
        }
        out
    }

    #[inline(always)]
    fn root_span(&self) -> ClosedInterval<usize> {
        debug_assert!(self.len > 0, "called `root_span` on an empty tree");
        ClosedInterval::new_unchecked(0, self.len - 1)
    }

    fn validate_window(
        &self,
        start: usize,
        end: usize,
    ) -> Result<ClosedInterval<usize>, RangeTreeError> {
        if self.len == 0 {
            return Err(RangeTreeError::EmptyTree);
        }
        if start > end {
            return Err(RangeTreeError::InvalidRange { start, end });
        }
        if end >= self.len {
            return Err(RangeTreeError::IndexOutOfBounds {
                index: end,
                len: self.len,
            });
        }
        Ok(ClosedInterval::new_unchecked(start, end))
    }

    fn resolve_bounds<R>(&self, range: &R) -> Result<ClosedInterval<usize>, RangeTreeError>
    where
        R: RangeBounds<usize>,
    {
        if self.len == 0 {
            return Err(RangeTreeError::EmptyTree);
        }

        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.checked_add(1).ok_or(RangeTreeError::EmptyRange)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e,
            Bound::Excluded(&e) => e.checked_sub(1).ok_or(RangeTreeError::EmptyRange)?,
            Bound::Unbounded => self.len - 1,
        };

        if start > end {
            return Err(RangeTreeError::EmptyRange);
        }
        self.validate_window(start, end)
    }

    fn query_window(&mut self, window: ClosedInterval<usize>) -> T {
        let result = self.query_node(ROOT, self.root_span(), window, 0);
        self.statistics.on_query();
        self.monitor.on_query(window, result, &self.statistics);
        result
    }

    fn add_window(&mut self, window: ClosedInterval<usize>, delta: T) {
        self.update_node(ROOT, self.root_span(), window, delta, 0);
        self.statistics.on_range_update();
        self.monitor
            .on_range_update(window, delta, &self.statistics);
    }

    fn build(&mut self, values: &[T], node: usize, span: ClosedInterval<usize>) {
        match span.split() {
            None => self.tree[node] = values[span.start()],
            Some((left, right)) => {
                self.build(values, left_child(node), left);
                self.build(values, right_child(node), right);
                self.pull(node);
            }
        }
    }

    /// Brings `node` from dirty to clean.
    ///
    /// Must run before the node's aggregate is read or its children are
    /// visited.
    #[inline(always)]
    fn push(&mut self, node: usize, span: ClosedInterval<usize>) {
        let pending = self.lazy[node];
        if pending == T::ZERO {
            return;
        }

        self.tree[node] = self.tree[node] + pending;
        if !span.is_singleton() {
            let (left, right) = (left_child(node), right_child(node));
            self.lazy[left] = self.lazy[left] + pending;
            self.lazy[right] = self.lazy[right] + pending;
        }
        self.lazy[node] = T::ZERO;
        self.statistics.on_lazy_push();
    }

    /// Recomputes an internal node from its two children. Both children must
    /// be clean.
    #[inline(always)]
    fn pull(&mut self, node: usize) {
        debug_assert!(
            self.lazy[left_child(node)] == T::ZERO && self.lazy[right_child(node)] == T::ZERO,
            "called `pull` on node {} with a dirty child",
            node
        );
        self.tree[node] = self.tree[left_child(node)].min(self.tree[right_child(node)]);
    }

    fn query_node(
        &mut self,
        node: usize,
        span: ClosedInterval<usize>,
        window: ClosedInterval<usize>,
        depth: u64,
    ) -> T {
        self.statistics.on_node_visited(depth);
        self.push(node, span);

        if span.disjoint(window) {
            return T::neutral();
        }
        if window.contains_interval(span) {
            return self.tree[node];
        }

        // A singleton span is either disjoint from or covered by the window.
        let (left, right) = span
            .split()
            .expect("partially covered span holds at least two indices");
        let left_min = self.query_node(left_child(node), left, window, depth + 1);
        let right_min = self.query_node(right_child(node), right, window, depth + 1);
        left_min.min(right_min)
    }

    fn update_node(
        &mut self,
        node: usize,
        span: ClosedInterval<usize>,
        window: ClosedInterval<usize>,
        delta: T,
        depth: u64,
    ) {
        self.statistics.on_node_visited(depth);
        self.push(node, span);

        if span.disjoint(window) {
            return;
        }
        if window.contains_interval(span) {
            self.lazy[node] = self.lazy[node] + delta;
            self.push(node, span);
            return;
        }

        let (left, right) = span
            .split()
            .expect("partially covered span holds at least two indices");
        self.update_node(left_child(node), left, window, delta, depth + 1);
        self.update_node(right_child(node), right, window, delta, depth + 1);
        self.pull(node);
    }

    fn collect_leaves(
        &mut self,
        node: usize,
        span: ClosedInterval<usize>,
        depth: u64,
        out: &mut Vec<T>,
    ) {
        self.statistics.on_node_visited(depth);
        self.push(node, span);

        match span.split() {
            None => out.push(self.tree[node]),
            Some((left, right)) => {
                self.collect_leaves(left_child(node), left, depth + 1, out);
                self.collect_leaves(right_child(node), right, depth + 1, out);
            }
        }
    }
}

impl<T, M> std::fmt::Debug for RangeTree<T, M>
where
    T: RangeValue,
    M: RangeTreeMonitor<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeTree")
            .field("len", &self.len)
            .field("monitor", &self.monitor.name())
            .field("statistics", &self.statistics)
            .finish()
    }
}

impl<T> From<Vec<T>> for RangeTree<T>
where
    T: RangeValue,
{
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T> From<&[T]> for RangeTree<T>
where
    T: RangeValue,
{
    #[inline]
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T> FromIterator<T> for RangeTree<T>
where
    T: RangeValue,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
