// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

// Derived algorithms against the equivalent iterator chains.
//
// Every algorithm goes through a callback per element, so the interesting
// number is how close it gets to the hand-written iterator version:
// - transform vs map/collect
// - first_match vs find
// - partition vs Iterator::partition
// - OrderedMap traversal vs BTreeMap traversal

use std::collections::BTreeMap;

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use enumerable::algorithms::{first_match, fold, partition, transform};
use enumerable::capability::{Numeric, Registry, capability};
use enumerable::ordered_map::OrderedMap;

// Fixed seed so every run measures the same data.
fn random_values(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

// =============================================================================
// Transform Benchmarks
// =============================================================================

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for size in [100, 10_000, 1_000_000] {
        let values = random_values(size, 1);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("enumerable", size), &values, |b, values| {
            b.iter(|| black_box(transform(values, |n| n * 2)));
        });

        group.bench_with_input(BenchmarkId::new("iterator", size), &values, |b, values| {
            b.iter(|| black_box(values.iter().map(|n| n * 2).collect::<Vec<_>>()));
        });
    }

    group.finish();
}

// =============================================================================
// Search Benchmarks
// =============================================================================

fn bench_first_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_match");

    for size in [100, 10_000, 1_000_000] {
        // The only match sits at the very end.
        let mut values: Vec<i64> = (0..size as i64).collect();
        values.push(-1);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("enumerable", size), &values, |b, values| {
            b.iter(|| black_box(first_match(values, |n| **n < 0)));
        });

        group.bench_with_input(BenchmarkId::new("iterator", size), &values, |b, values| {
            b.iter(|| black_box(values.iter().find(|n| **n < 0)));
        });
    }

    group.finish();
}

// =============================================================================
// Partition Benchmarks
// =============================================================================

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");

    for size in [100, 10_000, 1_000_000] {
        let values = random_values(size, 2);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("closure", size), &values, |b, values| {
            b.iter(|| black_box(partition(values, |n| *n % 2 != 0)));
        });

        group.bench_with_input(BenchmarkId::new("capability", size), &values, |b, values| {
            b.iter(|| black_box(partition(values, capability(i64::is_odd))));
        });

        let registry: Registry<i64> = Registry::numeric();
        group.bench_with_input(BenchmarkId::new("registry", size), &values, |b, values| {
            b.iter(|| {
                let odd = registry.predicate::<&i64>("odd?").unwrap();
                black_box(partition(values, odd))
            });
        });

        group.bench_with_input(BenchmarkId::new("iterator", size), &values, |b, values| {
            b.iter(|| black_box(values.iter().partition::<Vec<&i64>, _>(|n| **n % 2 != 0)));
        });
    }

    group.finish();
}

// =============================================================================
// Map Traversal Benchmarks
// =============================================================================

fn bench_map_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_traversal");

    for size in [100, 10_000, 100_000] {
        let values = random_values(size, 3);
        let ordered: OrderedMap<i64, i64> = values.iter().map(|n| (*n, n / 2)).collect();
        let sorted: BTreeMap<i64, i64> = values.iter().map(|n| (*n, n / 2)).collect();
        group.throughput(Throughput::Elements(ordered.len() as u64));

        group.bench_with_input(BenchmarkId::new("OrderedMap", size), &ordered, |b, map| {
            b.iter(|| black_box(fold(map, 0i64, |acc, (k, v)| acc.wrapping_add(k ^ v))));
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &sorted, |b, map| {
            b.iter(|| black_box(fold(map, 0i64, |acc, (k, v)| acc.wrapping_add(k ^ v))));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_transform,
    bench_first_match,
    bench_partition,
    bench_map_traversal,
);

criterion_main!(benches);
