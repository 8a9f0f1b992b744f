//! Detector output and knobs.

use serde::{Deserialize, Serialize};

use crate::curve::CurvePoint;

/// An inscribed rectangle found on the curve.
///
/// `points` run clockwise; `pair_indices[k]` is the curve index of `points[k]`.
/// The four indices are pairwise distinct.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub points: [CurvePoint; 4],
    /// Mean midpoint of the two colliding chords (the rectangle center).
    pub midpoint: (f64, f64),
    /// Mean length of the two colliding chords (the diagonal length).
    pub distance: f64,
    pub pair_indices: [usize; 4],
}

impl Rectangle {
    /// Sorted curve indices; identifies the rectangle regardless of vertex order.
    pub fn canonical_key(&self) -> [usize; 4] {
        canonical_key(self.pair_indices)
    }

    /// Edge lengths `|p[k+1] - p[k]|`, cyclic.
    pub fn side_lengths(&self) -> [f64; 4] {
        std::array::from_fn(|k| self.points[k].distance(&self.points[(k + 1) % 4]))
    }

    /// Approximate area from two adjacent sides.
    pub fn area(&self) -> f64 {
        let s = self.side_lengths();
        0.5 * (s[0] + s[2]) * 0.5 * (s[1] + s[3])
    }

    /// Long side over short side (≥ 1). Infinite for a collapsed side.
    pub fn aspect_ratio(&self) -> f64 {
        let s = self.side_lengths();
        let a = 0.5 * (s[0] + s[2]);
        let b = 0.5 * (s[1] + s[3]);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if lo > 0.0 {
            hi / lo
        } else {
            f64::INFINITY
        }
    }
}

#[inline]
pub(crate) fn canonical_key(mut idx: [usize; 4]) -> [usize; 4] {
    idx.sort_unstable();
    idx
}

/// Detector configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectCfg {
    /// Pair-space coincidence tolerance (same units as the curve). Floored at 0.001.
    pub tolerance: f64,
    /// Hard cap on emitted rectangles.
    pub max_count: usize,
}

impl Default for DetectCfg {
    fn default() -> Self {
        Self {
            tolerance: 0.03,
            max_count: 200,
        }
    }
}
