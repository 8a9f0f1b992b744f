//! Criterion benchmarks for conditioning, the pair-space lift and the surface grid.
//! Focus sizes: n in {32, 64, 128, 256} curve points.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use inscribed::curve::presets::{sample_preset, BlobCfg, Preset, ReplayToken};
use inscribed::curve::prepare;
use inscribed::lift::lift;
use inscribed::surface::build;

fn blob(n: usize, seed: u64) -> Vec<inscribed::CurvePoint> {
    sample_preset(
        Preset::Blob {
            cfg: BlobCfg::default(),
            token: ReplayToken { seed, index: 0 },
        },
        n,
    )
}

fn bench_lift(c: &mut Criterion) {
    let mut group = c.benchmark_group("lift");
    for &n in &[32usize, 64, 128, 256] {
        group.bench_with_input(BenchmarkId::new("prepare", n), &n, |b, &n| {
            b.iter_batched(
                || blob(97, 11),
                |raw| {
                    let _curve = prepare(&raw, n);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("lift", n), &n, |b, &n| {
            let curve = prepare(&blob(97, 12), n);
            b.iter(|| lift(&curve))
        });

        group.bench_with_input(BenchmarkId::new("surface_48", n), &n, |b, &n| {
            let samples = lift(&prepare(&blob(97, 13), n));
            b.iter(|| build(&samples, 48))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lift);
criterion_main!(benches);
