#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fractal_perlin::PerlinNoise;
use std::hint::black_box;

/// Sample a `side x side` grid in the xy plane at the given spacing.
fn sample_grid(noise: &PerlinNoise, side: i32, spacing: f64) {
    for gx in 0..side {
        for gy in 0..side {
            black_box(noise.noise_2d(f64::from(gx) * spacing, f64::from(gy) * spacing));
        }
    }
}

fn bench_single_samples(c: &mut Criterion) {
    let noise = PerlinNoise::with_seed(0);

    c.bench_function("noise_1d", |b| {
        b.iter(|| noise.noise_1d(black_box(12.34)));
    });
    c.bench_function("noise_2d", |b| {
        b.iter(|| noise.noise_2d(black_box(12.34), black_box(-5.67)));
    });
    c.bench_function("noise_3d", |b| {
        b.iter(|| noise.noise_3d(black_box(12.34), black_box(-5.67), black_box(8.9)));
    });
}

fn bench_octave_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise_3d_octaves");
    for octaves in [1, 4, 8, 16] {
        let mut noise = PerlinNoise::with_seed(0);
        noise.octaves = octaves;
        group.bench_with_input(BenchmarkId::from_parameter(octaves), &noise, |b, n| {
            b.iter(|| n.noise_3d(black_box(12.34), black_box(-5.67), black_box(8.9)));
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let noise = PerlinNoise::with_seed(0);

    let mut group = c.benchmark_group("noise_2d_grid");
    for side in [16, 64] {
        group.throughput(criterion::Throughput::Elements((side * side) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{side}x{side}")),
            &side,
            |b, &s| {
                b.iter(|| sample_grid(&noise, s, 0.05));
            },
        );
    }
    group.finish();
}

fn bench_reseed(c: &mut Criterion) {
    let mut noise = PerlinNoise::new();
    let mut seed = 0i64;

    c.bench_function("reseed", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            noise.seed(black_box(seed));
        });
    });
}

criterion_group!(
    benches,
    bench_single_samples,
    bench_octave_counts,
    bench_grid,
    bench_reseed
);
criterion_main!(benches);
