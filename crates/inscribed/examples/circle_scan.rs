//! Scan preset curves for inscribed rectangles and print a short report.
//!
//! Purpose
//! - A quick, code-backed look at how many rectangles the detector finds on
//!   regular and irregular curves, and how long the pipeline takes.
//!
//! Run with `cargo run -p inscribed --example circle_scan`.

use std::time::Instant;

use inscribed::curve::presets::{sample_preset, BlobCfg, Preset, ReplayToken};
use inscribed::pipeline::{analyze, PipelineCfg};

fn main() {
    let presets = [
        ("circle", Preset::Circle),
        ("ellipse", Preset::Ellipse { rx: 2.0, ry: 1.0 }),
        ("squircle", Preset::Superellipse { exponent: 4.0 }),
        (
            "blob",
            Preset::Blob {
                cfg: BlobCfg::default(),
                token: ReplayToken { seed: 1, index: 0 },
            },
        ),
    ];
    let cfg = PipelineCfg::default();
    for (name, preset) in presets {
        let raw = sample_preset(preset, 180);
        let start = Instant::now();
        let out = analyze(&raw, &cfg);
        let elapsed = start.elapsed().as_secs_f64() * 1e3;
        println!(
            "curve={name} points={} samples={} tolerance={:.4} rectangles={} time_ms={elapsed:.3}",
            out.curve.len(),
            out.samples.len(),
            out.tolerance,
            out.rectangles.len()
        );
        if let Some(r) = out.rectangles.first() {
            println!(
                "  first: indices={:?} center=({:.3}, {:.3}) aspect={:.3} area={:.3}",
                r.pair_indices,
                r.midpoint.0,
                r.midpoint.1,
                r.aspect_ratio(),
                r.area()
            );
        }
    }
}
