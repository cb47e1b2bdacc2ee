//! Sweep benchmarks for the boundary-merge combinator.
//!
//! Run with:
//! ```bash
//! cargo bench --bench combine
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use rangeset_rs::endpoint::Endpoint;
use rangeset_rs::range_set::RangeSet;
use rangeset_rs::table::TruthTable;

// ============================================================================
// Helper: random well-formed sets
// ============================================================================

/// Random valid set with `num_ranges` intervals over `[0, 100 * num_ranges)`.
fn random_set(rng: &mut ChaCha8Rng, num_ranges: usize) -> RangeSet {
    let universe = 100 * num_ranges as i64;
    let mut values: Vec<i64> = (0..universe).choose_multiple(rng, 2 * num_ranges);
    values.sort_unstable();
    values
        .into_iter()
        .map(|v| Endpoint::new(v, rng.gen_bool(0.5)))
        .collect()
}

// ============================================================================
// Benchmark: pairwise operations
// ============================================================================

fn bench_pairwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine/pairwise");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for num_ranges in [10, 100, 1000, 10000] {
        let a = random_set(&mut rng, num_ranges);
        let b = random_set(&mut rng, num_ranges);
        group.throughput(Throughput::Elements((a.endpoints().len() + b.endpoints().len()) as u64));

        for (name, table) in [
            ("union", TruthTable::UNION),
            ("intersection", TruthTable::INTERSECTION),
            ("xor", TruthTable::SYMMETRIC_DIFFERENCE),
        ] {
            group.bench_with_input(BenchmarkId::new(name, num_ranges), &(&a, &b), |bench, (a, b)| {
                bench.iter(|| a.operate(table, [*b]));
            });
        }
    }

    group.finish();
}

// ============================================================================
// Benchmark: left fold over many sets
// ============================================================================

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine/fold");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for num_sets in [2, 8, 32] {
        let sets: Vec<RangeSet> = (0..num_sets).map(|_| random_set(&mut rng, 100)).collect();

        group.bench_with_input(BenchmarkId::new("union_many", num_sets), &sets, |bench, sets| {
            bench.iter(|| sets[0].union_many(&sets[1..]));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: notation
// ============================================================================

fn bench_notation(c: &mut Criterion) {
    let mut group = c.benchmark_group("notation");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for num_ranges in [100, 10000] {
        let text = random_set(&mut rng, num_ranges).to_string();
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("parse", num_ranges), &text, |bench, text| {
            bench.iter(|| text.parse::<RangeSet>());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pairwise, bench_fold, bench_notation);

criterion_main!(benches);
