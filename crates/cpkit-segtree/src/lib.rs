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

//! cpkit-segtree: range-minimum segment tree with lazy range-add updates
//!
//! The crate provides `tree::RangeTree`, a segment tree over a fixed-length
//! array of signed integers answering "minimum over `[l, r]`" in O(log n)
//! while supporting O(log n) additive updates on whole ranges and point
//! assignments.
//!
//! Core flow
//! - Build a `RangeTree` from the initial values (`RangeTree::new`,
//!   `From<Vec<T>>`, or `collect()`).
//! - Query with `range_min` / `query`, mutate with `update_range` / `add`
//!   and `point_update`.
//! - Every operation has a `try_` form that reports precondition violations
//!   as `error::RangeTreeError` instead of panicking.
//!
//! Design highlights
//! - Nodes live in flat buffers with heap indexing (children of `i` at `2i`
//!   and `2i + 1`); the shape is fixed by the length at construction.
//! - A single push routine runs on entry to every visited node, so children
//!   are only ever read or combined after their parent's pending delta has
//!   been handed down.
//! - Monitors observe operations without touching the hot path; the default
//!   `NoOperationMonitor` compiles away.
//!
//! Module map
//! - `tree`: the `RangeTree` itself.
//! - `value`: the `RangeValue` bound for element types.
//! - `error`: precondition violations.
//! - `monitor`: operation observers (no-op, log).
//! - `stats`: lightweight counters.

pub mod error;
pub mod monitor;
pub mod stats;
pub mod tree;
pub mod value;
