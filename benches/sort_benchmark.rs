use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use gradesort::bench::synthetic_records;
use gradesort::sort::{bubble_sort, merge_sort};

fn bench_sorters(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xB0B5);
    let mut group = c.benchmark_group("sort");
    for n in [10, 100, 1000] {
        let base = synthetic_records(&mut rng, n);
        group.bench_with_input(BenchmarkId::new("bubble", n), &base, |b, base| {
            b.iter(|| {
                let mut copy = base.clone();
                bubble_sort(black_box(&mut copy));
                copy
            })
        });
        group.bench_with_input(BenchmarkId::new("merge", n), &base, |b, base| {
            b.iter(|| merge_sort(black_box(base)))
        });
    }
    group.finish();
}

fn bench_merge_scaling(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xCAFE);
    let mut group = c.benchmark_group("merge_scaling");
    for n in [1000, 10_000, 100_000] {
        let base = synthetic_records(&mut rng, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &base, |b, base| {
            b.iter(|| merge_sort(black_box(base)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sorters, bench_merge_scaling);
criterion_main!(benches);
