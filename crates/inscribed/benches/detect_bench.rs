//! Criterion benchmarks for rectangle detection.
//!
//! - Circle: worst case for bucket occupancy (every diameter collides).
//! - Blob: typical freehand-like input.
//! - Tolerance sweep on a fixed blob to show the cost of loose tolerances.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use inscribed::curve::presets::{sample_preset, BlobCfg, Preset, ReplayToken};
use inscribed::curve::prepare;
use inscribed::detect::detect;
use inscribed::lift::lift;

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    for &n in &[64usize, 128, 256] {
        let circle = lift(&prepare(&sample_preset(Preset::Circle, n), n));
        group.bench_with_input(BenchmarkId::new("circle", n), &circle, |b, s| {
            b.iter(|| detect(s, 0.03, 500))
        });

        let blob = lift(&prepare(
            &sample_preset(
                Preset::Blob {
                    cfg: BlobCfg::default(),
                    token: ReplayToken { seed: 5, index: n as u64 },
                },
                n,
            ),
            n,
        ));
        group.bench_with_input(BenchmarkId::new("blob", n), &blob, |b, s| {
            b.iter(|| detect(s, 0.03, 500))
        });
    }

    let fixed = lift(&prepare(
        &sample_preset(
            Preset::Blob {
                cfg: BlobCfg::default(),
                token: ReplayToken { seed: 9, index: 0 },
            },
            128,
        ),
        128,
    ));
    for &tol in &[0.005f64, 0.02, 0.05, 0.1] {
        group.bench_with_input(BenchmarkId::new("blob128_tol", tol), &tol, |b, &tol| {
            b.iter(|| detect(&fixed, tol, 500))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_detect);
criterion_main!(benches);
