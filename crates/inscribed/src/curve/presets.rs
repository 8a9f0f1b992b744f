//! Parametric preset curves (circle, ellipse, superellipse, random blob).
//!
//! Presets feed the pipeline in tests, benches and the CLI the same way a
//! freehand stroke would. Points are sampled uniformly in the curve
//! parameter, not in arc length; run them through `prepare` for even spacing.
//!
//! Blobs are reproducible: a `ReplayToken (seed, index)` is mixed into a single
//! RNG so a given token always draws the same curve.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::CurvePoint;

/// Replay token to make blob draws reproducible and indexable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Radial blob: `r(t) = base_radius * (1 + Σ_m a_m cos(m t + φ_m))` for `m = 1..=lobes`.
#[derive(Clone, Copy, Debug)]
pub struct BlobCfg {
    pub lobes: usize,
    /// Total relative amplitude, split randomly across the lobes. Clamped to [0, 0.9].
    pub radial_jitter: f64,
    pub base_radius: f64,
}

impl Default for BlobCfg {
    fn default() -> Self {
        Self {
            lobes: 5,
            radial_jitter: 0.35,
            base_radius: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Preset {
    /// Unit circle.
    Circle,
    Ellipse { rx: f64, ry: f64 },
    /// `|x|^e + |y|^e = 1`; `e = 2` is the circle, large `e` approaches the square.
    Superellipse { exponent: f64 },
    Blob { cfg: BlobCfg, token: ReplayToken },
}

/// Sample `count` points (at least 3) counterclockwise, starting at angle 0.
pub fn sample_preset(preset: Preset, count: usize) -> Vec<CurvePoint> {
    let n = count.max(3);
    let angles = (0..n).map(move |k| TAU * k as f64 / n as f64);
    match preset {
        Preset::Circle => angles
            .map(|t| CurvePoint {
                x: t.cos(),
                y: t.sin(),
            })
            .collect(),
        Preset::Ellipse { rx, ry } => angles
            .map(|t| CurvePoint {
                x: rx * t.cos(),
                y: ry * t.sin(),
            })
            .collect(),
        Preset::Superellipse { exponent } => {
            let e = exponent.max(0.1);
            let warp = |c: f64| c.signum() * c.abs().powf(2.0 / e);
            angles
                .map(|t| CurvePoint {
                    x: warp(t.cos()),
                    y: warp(t.sin()),
                })
                .collect()
        }
        Preset::Blob { cfg, token } => {
            let mut rng = token.to_std_rng();
            let lobes = cfg.lobes.max(1);
            let jitter = cfg.radial_jitter.clamp(0.0, 0.9);
            let r0 = cfg.base_radius.max(1e-9);
            let mut weights: Vec<f64> = (0..lobes).map(|_| rng.gen::<f64>()).collect();
            let sum: f64 = weights.iter().sum();
            if sum > 0.0 {
                weights.iter_mut().for_each(|w| *w *= jitter / sum);
            }
            let phases: Vec<f64> = (0..lobes).map(|_| rng.gen::<f64>() * TAU).collect();
            angles
                .map(|t| {
                    let bump: f64 = weights
                        .iter()
                        .zip(&phases)
                        .enumerate()
                        .map(|(m, (a, phi))| a * ((m + 1) as f64 * t + phi).cos())
                        .sum();
                    let r = r0 * (1.0 + bump).max(1e-6);
                    CurvePoint {
                        x: r * t.cos(),
                        y: r * t.sin(),
                    }
                })
                .collect()
        }
    }
}
