//! Surface grid: the lifted cloud binned onto a regular `(mid_x, mid_y)` grid.
//!
//! Each cell holds the mean chord length of the samples that land in it.
//! The grid is for display only; detection works on the raw samples.
//! Cells that receive no sample are filled by expanding-neighbourhood
//! averaging, then by the global mean, so every output cell is finite.

use serde::{Deserialize, Serialize};

use crate::cfg::{
    GRID_MAX_RES, GRID_MIN_RES, GRID_RANGE_EPS, GRID_RANGE_PAD, INPAINT_MAX_RADIUS,
    INPAINT_PASSES,
};
use crate::lift::PairSample;

/// Dense height grid over pair space. `cells[row][col]` sits at `(x_axis[col], y_axis[row])`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGrid {
    pub x_axis: Vec<f64>,
    pub y_axis: Vec<f64>,
    pub cells: Vec<Vec<f64>>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub max_distance: f64,
}

impl Default for SurfaceGrid {
    /// `[-1, 1] × [-1, 1]` with no cells; returned for empty input.
    fn default() -> Self {
        Self {
            x_axis: Vec::new(),
            y_axis: Vec::new(),
            cells: Vec::new(),
            x_range: (-1.0, 1.0),
            y_range: (-1.0, 1.0),
            max_distance: 0.0,
        }
    }
}

impl SurfaceGrid {
    #[inline]
    pub fn rows(&self) -> usize {
        self.y_axis.len()
    }
    #[inline]
    pub fn cols(&self) -> usize {
        self.x_axis.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value of the cell nearest to `(x, y)`; `None` outside the ranges or on an empty grid.
    pub fn value_at(&self, x: f64, y: f64) -> Option<f64> {
        if self.is_empty() || !in_range(x, self.x_range) || !in_range(y, self.y_range) {
            return None;
        }
        let col = bin(x, self.x_range, self.cols() - 1);
        let row = bin(y, self.y_range, self.rows() - 1);
        self.cells.get(row)?.get(col).copied()
    }
}

#[inline]
fn in_range(v: f64, (lo, hi): (f64, f64)) -> bool {
    v >= lo && v <= hi
}

/// Nearest grid line for `v`, clamped to `[0, res]`.
#[inline]
fn bin(v: f64, (lo, hi): (f64, f64), res: usize) -> usize {
    let ratio = (v - lo) / (hi - lo);
    let k = (ratio * res as f64).round();
    if k.is_nan() || k <= 0.0 {
        0
    } else {
        (k as usize).min(res)
    }
}

fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if hi - lo < GRID_RANGE_EPS {
        (lo - GRID_RANGE_PAD, hi + GRID_RANGE_PAD)
    } else {
        (lo, hi)
    }
}

/// Bin `samples` onto a `(resolution + 1)²` grid of mean chord lengths.
///
/// `resolution` is clamped to `[12, 120]`. Samples with non-finite fields are
/// ignored; if none remain the default grid is returned.
pub fn build(samples: &[PairSample], resolution: usize) -> SurfaceGrid {
    let finite: Vec<&PairSample> = samples
        .iter()
        .filter(|s| s.mx.is_finite() && s.my.is_finite() && s.d.is_finite())
        .collect();
    if finite.is_empty() {
        return SurfaceGrid::default();
    }
    let res = resolution.clamp(GRID_MIN_RES, GRID_MAX_RES);
    let size = res + 1;
    let x_range = padded_range(finite.iter().map(|s| s.mx));
    let y_range = padded_range(finite.iter().map(|s| s.my));

    let mut sum = vec![0.0; size * size];
    let mut count = vec![0u32; size * size];
    let mut max_distance: f64 = 0.0;
    for s in &finite {
        let idx = bin(s.my, y_range, res) * size + bin(s.mx, x_range, res);
        sum[idx] += s.d;
        count[idx] += 1;
        max_distance = max_distance.max(s.d);
    }
    let mut cells: Vec<Option<f64>> = sum
        .iter()
        .zip(&count)
        .map(|(&s, &c)| (c > 0).then(|| s / c as f64))
        .collect();
    inpaint(&mut cells, size);

    let axis = |(lo, hi): (f64, f64)| -> Vec<f64> {
        (0..size)
            .map(|k| lo + (hi - lo) * k as f64 / res as f64)
            .collect()
    };
    SurfaceGrid {
        x_axis: axis(x_range),
        y_axis: axis(y_range),
        cells: cells
            .chunks(size)
            .map(|row| row.iter().map(|c| c.unwrap_or(0.0)).collect())
            .collect(),
        x_range,
        y_range,
        max_distance,
    }
}

/// Fill empty cells in place; afterwards every cell is `Some`.
///
/// Each pass reads a snapshot of the previous pass, so the result does not
/// depend on scan order.
fn inpaint(cells: &mut [Option<f64>], size: usize) {
    let populated: Vec<f64> = cells.iter().flatten().copied().collect();
    for _ in 0..INPAINT_PASSES {
        let snapshot = cells.to_vec();
        let mut changed = false;
        for row in 0..size {
            for col in 0..size {
                let idx = row * size + col;
                if snapshot[idx].is_some() {
                    continue;
                }
                if let Some(v) = neighbourhood_mean(&snapshot, size, row, col) {
                    cells[idx] = Some(v);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    let fallback = if populated.is_empty() {
        0.0
    } else {
        populated.iter().sum::<f64>() / populated.len() as f64
    };
    for c in cells.iter_mut().filter(|c| c.is_none()) {
        *c = Some(fallback);
    }
}

/// Mean of the filled cells in the smallest square window (radius 1..=4) that has any.
fn neighbourhood_mean(cells: &[Option<f64>], size: usize, row: usize, col: usize) -> Option<f64> {
    for r in 1..=INPAINT_MAX_RADIUS {
        let rows = row.saturating_sub(r)..=(row + r).min(size - 1);
        let mut acc = 0.0;
        let mut n = 0usize;
        for y in rows {
            for x in col.saturating_sub(r)..=(col + r).min(size - 1) {
                if let Some(v) = cells[y * size + x] {
                    acc += v;
                    n += 1;
                }
            }
        }
        if n > 0 {
            return Some(acc / n as f64);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::presets::{sample_preset, BlobCfg, Preset, ReplayToken};
    use crate::curve::CurvePoint;
    use crate::lift::lift;
    use proptest::prelude::*;

    fn sample(mx: f64, my: f64, d: f64) -> PairSample {
        let p = CurvePoint { x: mx, y: my };
        PairSample {
            i: 0,
            j: 1,
            p1: p,
            p2: p,
            mx,
            my,
            d,
        }
    }

    fn all_finite(g: &SurfaceGrid) -> bool {
        g.cells.iter().flatten().all(|v| v.is_finite())
    }

    #[test]
    fn empty_samples_give_default_grid() {
        let g = build(&[], 40);
        assert_eq!(g, SurfaceGrid::default());
        assert!(g.is_empty());
        assert_eq!(g.x_range, (-1.0, 1.0));
        assert_eq!(g.value_at(0.0, 0.0), None);
    }

    #[test]
    fn resolution_is_clamped() {
        let s = vec![sample(0.0, 0.0, 1.0), sample(1.0, 1.0, 2.0)];
        let lo = build(&s, 3);
        assert_eq!((lo.rows(), lo.cols()), (13, 13));
        let hi = build(&s, 500);
        assert_eq!((hi.rows(), hi.cols()), (121, 121));
        assert_eq!(hi.cells.len(), 121);
        assert!(hi.cells.iter().all(|r| r.len() == 121));
    }

    #[test]
    fn single_sample_floods_whole_grid() {
        let g = build(&[sample(2.0, -1.0, 0.75)], 12);
        assert_eq!(g.x_range, (1.5, 2.5));
        assert_eq!(g.y_range, (-1.5, -0.5));
        assert!(g.cells.iter().flatten().all(|&v| (v - 0.75).abs() < 1e-12));
        assert_eq!(g.max_distance, 0.75);
    }

    #[test]
    fn coincident_samples_average() {
        let s = vec![
            sample(0.0, 0.0, 1.0),
            sample(0.0, 0.0, 3.0),
            sample(1.0, 1.0, 5.0),
        ];
        let g = build(&s, 12);
        assert!((g.cells[0][0] - 2.0).abs() < 1e-12);
        assert!((g.cells[12][12] - 5.0).abs() < 1e-12);
        assert_eq!(g.value_at(0.01, 0.02), Some(g.cells[0][0]));
        assert_eq!(g.value_at(2.0, 0.0), None);
        assert!((g.x_axis[6] - 0.5).abs() < 1e-12);
        assert!(all_finite(&g));
    }

    #[test]
    fn sparse_corners_fall_back_to_global_mean() {
        // populated cells only at opposite corners of a 121² grid; radius-4 windows
        // over 3 passes reach 12 cells, leaving the middle for the global mean
        let s = vec![sample(0.0, 0.0, 1.0), sample(1.0, 1.0, 3.0)];
        let g = build(&s, 120);
        assert!((g.cells[60][60] - 2.0).abs() < 1e-12);
        assert!((g.cells[0][1] - 1.0).abs() < 1e-12);
        assert!(all_finite(&g));
    }

    #[test]
    fn non_finite_samples_are_ignored() {
        let g = build(&[sample(f64::NAN, 0.0, 1.0)], 20);
        assert_eq!(g, SurfaceGrid::default());
    }

    #[test]
    fn blob_surface_is_dense() {
        let curve = sample_preset(
            Preset::Blob {
                cfg: BlobCfg::default(),
                token: ReplayToken { seed: 3, index: 1 },
            },
            40,
        );
        let samples = lift(&curve);
        let g = build(&samples, 60);
        assert_eq!(g.rows(), 61);
        assert!(all_finite(&g));
        let max_d = samples.iter().map(|s| s.d).fold(0.0, f64::max);
        assert_eq!(g.max_distance, max_d);
        assert!(g.cells.iter().flatten().all(|&v| v <= max_d + 1e-12));
    }

    proptest! {
        #[test]
        fn prop_cells_always_finite(
            coords in prop::collection::vec((-5.0..5.0f64, -5.0..5.0f64), 2..30),
            resolution in 12usize..=120
        ) {
            let curve: Vec<CurvePoint> = coords.iter().map(|&(x, y)| CurvePoint { x, y }).collect();
            let g = build(&lift(&curve), resolution);
            prop_assert_eq!(g.rows(), resolution + 1);
            prop_assert_eq!(g.cols(), resolution + 1);
            prop_assert!(all_finite(&g));
        }
    }
}
