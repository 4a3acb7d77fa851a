use binfit::{Algorithm, Packer};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

criterion_main!(benches);
criterion_group!(benches, random_order_bench, ascending_order_bench);

const SIZES: [usize; 3] = [1000, 5000, 10000];
const CAPACITY: u64 = 10;

fn random_items(n: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(0);
    (0..n).map(|_| rng.random_range(1..=CAPACITY)).collect()
}

/// Items in random order, sizes uniform in [1, capacity]
fn random_order_bench(c: &mut Criterion) {
    bench_group(c, "random_order", random_items);
}

/// Items sorted ascending, the unfavourable order for First Fit
fn ascending_order_bench(c: &mut Criterion) {
    bench_group(c, "ascending_order", |n| {
        let mut items = random_items(n);
        items.sort_unstable();
        items
    });
}

fn bench_group(c: &mut Criterion, name: &str, make_items: impl Fn(usize) -> Vec<u64>) {
    let packer = Packer::default();
    let mut group = c.benchmark_group(name);
    for n in SIZES {
        let items = make_items(n);
        group.throughput(criterion::Throughput::Elements(n as u64));
        for algorithm in [Algorithm::FirstFit, Algorithm::FirstFitDecreasing] {
            group.bench_function(BenchmarkId::new(algorithm.to_string(), n), |b| {
                b.iter(|| packer.count(algorithm, black_box(&items), CAPACITY))
            });
        }
    }
    group.finish();
}
