//! Benchmark for noise sampling performance.
//!
//! TARGET: 1,000,000 samples per second
//!
//! Run with: cargo bench --package seedforge_noise --bench noise_benchmark

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use seedforge_noise::{Fractal, FractalParams, SimplexNoise, ValueNoise};

fn benchmark_single_sample(c: &mut Criterion) {
    let simplex = SimplexNoise::new(42);
    let value = ValueNoise::new(42);

    c.bench_function("simplex_2d_sample", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(simplex.noise2d(black_box(x), black_box(x * 0.7)))
        });
    });

    c.bench_function("simplex_3d_sample", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(simplex.noise3d(black_box(x), black_box(x * 0.7), black_box(x * 0.3)))
        });
    });

    c.bench_function("value_3d_sample", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(value.noise3d(black_box(x), black_box(x * 0.7), black_box(x * 0.3)))
        });
    });
}

fn benchmark_million_samples(c: &mut Criterion) {
    let noise = SimplexNoise::new(42);

    let mut group = c.benchmark_group("million_samples");
    group.throughput(Throughput::Elements(1_000_000));
    group.sample_size(10);

    group.bench_function("1M_simplex_2d_samples", |b| {
        b.iter(|| {
            for i in 0..1_000_000 {
                let x = f64::from(i % 1000) * 0.1;
                let y = f64::from(i / 1000) * 0.1;
                black_box(noise.noise2d(x, y));
            }
        });
    });

    group.finish();
}

fn benchmark_fractal(c: &mut Criterion) {
    let params = FractalParams {
        octaves: 6,
        ..FractalParams::default()
    };
    let Ok(terrain) = Fractal::new(SimplexNoise::new(42), params) else {
        return;
    };

    c.bench_function("fbm_6_octaves", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(terrain.fbm(black_box(x), Some(x * 0.7), None))
        });
    });

    c.bench_function("ridged_6_octaves", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(terrain.ridged(black_box(x), Some(x * 0.7), None))
        });
    });
}

fn benchmark_table_build(c: &mut Criterion) {
    c.bench_function("simplex_table_build", |b| {
        let mut seed = 0i64;
        b.iter(|| {
            seed += 1;
            black_box(SimplexNoise::new(seed))
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_sample,
    benchmark_million_samples,
    benchmark_fractal,
    benchmark_table_build
);
criterion_main!(benches);
