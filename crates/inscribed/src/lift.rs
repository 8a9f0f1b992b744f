//! Pair-space lift: every unordered point pair becomes `(mid_x, mid_y, distance)`.
//!
//! Two chords of a closed curve are the diagonals of an inscribed rectangle
//! exactly when their lifted samples coincide, which is what `detect` looks for.
//! The lift is O(n²) in time and memory; keep curves to a few hundred points.

use serde::{Deserialize, Serialize};

use crate::curve::CurvePoint;

/// Practical cap on the number of curve points fed to `lift`
/// (`MAX_LIFT_POINTS²/2` samples are materialized).
pub const MAX_LIFT_POINTS: usize = 600;

/// One lifted chord. Never mutated after `lift` creates it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairSample {
    /// Curve indices with `i < j`.
    pub i: usize,
    pub j: usize,
    pub p1: CurvePoint,
    pub p2: CurvePoint,
    pub mx: f64,
    pub my: f64,
    /// Chord length `|p2 - p1|`.
    pub d: f64,
}

impl PairSample {
    #[inline]
    fn new(i: usize, j: usize, p1: CurvePoint, p2: CurvePoint) -> Self {
        Self {
            i,
            j,
            p1,
            p2,
            mx: 0.5 * (p1.x + p2.x),
            my: 0.5 * (p1.y + p2.y),
            d: (p2.x - p1.x).hypot(p2.y - p1.y),
        }
    }

    /// True if the two chords share an endpoint index.
    #[inline]
    pub fn shares_index(&self, other: &PairSample) -> bool {
        self.i == other.i || self.i == other.j || self.j == other.i || self.j == other.j
    }
}

/// Lift all pairs of finite curve points.
///
/// Non-finite points are skipped entirely; the remaining points keep their
/// positions in `curve` as indices. Fewer than two finite points yields an
/// empty vector. Samples are ordered by `i`, then `j`.
pub fn lift(curve: &[CurvePoint]) -> Vec<PairSample> {
    let valid: Vec<(usize, CurvePoint)> = curve
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, p)| p.is_finite())
        .collect();
    let n = valid.len();
    if n < 2 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(n * (n - 1) / 2);
    for (a, &(i, p1)) in valid.iter().enumerate() {
        for &(j, p2) in &valid[a + 1..] {
            out.push(PairSample::new(i, j, p1, p2));
        }
    }
    out
}
