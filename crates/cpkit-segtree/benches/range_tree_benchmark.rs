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

use cpkit_segtree::tree::RangeTree;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SIZES: [usize; 4] = [1 << 10, 1 << 14, 1 << 17, 1 << 20];
const OPERATIONS: usize = 4096;

#[derive(Clone, Copy)]
enum Operation {
    Query(usize, usize),
    Add(usize, usize, i64),
    Assign(usize, i64),
}

fn random_values(rng: &mut StdRng, n: usize) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(-1_000_000..=1_000_000)).collect()
}

fn random_window(rng: &mut StdRng, n: usize) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    (a.min(b), a.max(b))
}

/// A fixed mix of roughly 50% queries, 40% range adds and 10% assignments.
fn random_operations(rng: &mut StdRng, n: usize) -> Vec<Operation> {
    (0..OPERATIONS)
        .map(|_| {
            let (start, end) = random_window(rng, n);
            match rng.random_range(0..10) {
                0..5 => Operation::Query(start, end),
                5..9 => Operation::Add(start, end, rng.random_range(-100..=100)),
                _ => Operation::Assign(start, rng.random_range(-1_000_000..=1_000_000)),
            }
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("range_tree_build");

    for n in SIZES {
        let values = random_values(&mut rng, n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| RangeTree::from_slice(black_box(values)))
        });
    }
    group.finish();
}

fn bench_mixed_operations(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("range_tree_mixed_operations");

    for n in SIZES {
        let tree = RangeTree::new(random_values(&mut rng, n));
        let operations = random_operations(&mut rng, n);

        group.throughput(Throughput::Elements(OPERATIONS as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &operations, |b, ops| {
            b.iter_batched_ref(
                || tree.clone(),
                |tree| {
                    for &op in ops {
                        match op {
                            Operation::Query(start, end) => {
                                black_box(tree.range_min(start, end));
                            }
                            Operation::Add(start, end, delta) => {
                                tree.update_range(start, end, delta)
                            }
                            Operation::Assign(index, value) => tree.point_update(index, value),
                        }
                    }
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_mixed_operations);
criterion_main!(benches);
