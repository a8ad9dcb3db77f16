//! Criterion benchmarks for the partitioning engines.
//!
//! Instances are uniformly random integers from a fixed seed so runs are
//! comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_partition::greedy::{CompleteGreedy, GreedyRunner};
use u_partition::kk::{CompleteKarmarkarKarp, KarmarkarKarpRunner};
use u_partition::PartitionConfig;

fn instance(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(1..1_000_000)).collect()
}

fn bench_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_shot");

    for &(n, k) in &[(100usize, 2usize), (400, 3), (400, 7)] {
        let numbers = instance(n, 42);
        let config = PartitionConfig::new(k);
        let id = format!("n{}_k{}", n, k);

        group.bench_with_input(BenchmarkId::new("kk", &id), &numbers, |b, nums| {
            b.iter(|| black_box(KarmarkarKarpRunner::run(black_box(nums), &config)))
        });
        group.bench_with_input(BenchmarkId::new("greedy", &id), &numbers, |b, nums| {
            b.iter(|| black_box(GreedyRunner::run(black_box(nums), &config)))
        });
    }
    group.finish();
}

fn bench_complete_kk(c: &mut Criterion) {
    let mut group = c.benchmark_group("complete_kk");
    group.sample_size(10);

    for &(n, k) in &[(30usize, 2usize), (30, 3), (20, 4)] {
        let numbers = instance(n, 7);
        let config = PartitionConfig::new(k);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("n{}_k{}", n, k)),
            &numbers,
            |b, nums| {
                b.iter(|| {
                    let search = CompleteKarmarkarKarp::new(black_box(nums), &config);
                    black_box(search.map(|s| s.take(3).count()))
                })
            },
        );
    }
    group.finish();
}

fn bench_complete_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("complete_greedy");
    group.sample_size(10);

    for &(n, k) in &[(30usize, 2usize), (30, 3), (20, 4)] {
        let numbers = instance(n, 7);
        let config = PartitionConfig::new(k);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("n{}_k{}", n, k)),
            &numbers,
            |b, nums| {
                b.iter(|| {
                    let search = CompleteGreedy::new(black_box(nums), &config);
                    black_box(search.map(|s| s.take(5).count()))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_one_shot,
    bench_complete_kk,
    bench_complete_greedy
);
criterion_main!(benches);
