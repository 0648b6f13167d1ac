use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mcpi::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

fn bench_sample_hits(c: &mut Criterion) {
    let sampler = Sampler::new();
    c.bench_function("sample_hits_10k", |b| {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        b.iter(|| sampler.sample_hits(black_box(10_000), &mut rng))
    });
}

fn bench_estimate(c: &mut Criterion) {
    let mut rng = Xoshiro256Plus::seed_from_u64(42);
    let hits = Sampler::new().sample_hits(100_000, &mut rng).unwrap();
    c.bench_function("estimate_100k", |b| {
        b.iter(|| estimate(black_box(&hits)))
    });
}

fn bench_sweep(c: &mut Criterion) {
    let mut rng = Xoshiro256Plus::seed_from_u64(42);
    let hits = Sampler::new().sample_hits(100_000, &mut rng).unwrap();
    let sizes = sample_sizes(10, 100_000, 200, 10.0, true).unwrap();

    let mut group = c.benchmark_group("sweep_100k");
    group.bench_function("one_pass", |b| {
        b.iter(|| Convergence::from_hits(black_box(&hits), sizes.clone()))
    });
    group.bench_function("per_prefix", |b| {
        b.iter(|| {
            sizes
                .iter()
                .map(|&n| estimate(black_box(&hits[..n])))
                .collect::<Vec<_>>()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_sample_hits, bench_estimate, bench_sweep);
criterion_main!(benches);
