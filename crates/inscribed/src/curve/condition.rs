//! Curve conditioning: bounds, rescaling, arc-length resampling, smoothing.
//!
//! All operations are pure and never fail. Inputs that are too short or too
//! degenerate for an operation come back unchanged (or as a default box), so
//! callers can chain them without checks.

use serde::{Deserialize, Serialize};

use super::types::{extents, sanitize, BoundingSquare, CurvePoint};
use crate::cfg::{
    BOUNDS_EPS, CLOSE_EPS, MAX_SMOOTH_WEIGHT, MIN_RESAMPLE, SCALE_EPS, SEGMENT_EPS,
};

/// Knobs for `prepare_with`. The defaults are the canonical `prepare` pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionCfg {
    /// Resampled point count (at least 24 points are always emitted).
    pub target_count: usize,
    pub smooth_passes: usize,
    /// Laplacian weight, clamped to `[0, 0.48]`.
    pub smooth_alpha: f64,
    /// Half of the larger side of the normalized bounding box.
    pub target_radius: f64,
}

impl Default for ConditionCfg {
    fn default() -> Self {
        Self {
            target_count: 96,
            smooth_passes: 1,
            smooth_alpha: 0.18,
            target_radius: 2.3,
        }
    }
}

/// Padded square box around the points, centered on the middle of their extents.
///
/// The extents' middle is used rather than the mean so the unpadded square
/// always reaches exactly to the outermost points; a mean-centered box of the
/// same span would cut off one side of a lopsided set.
///
/// `pad` is relative: the half span is `max(w, h) / 2 * (1 + pad)`.
/// Empty input, or input collapsed to a single point, yields the default
/// square of span 6 at the origin. A single zero-width axis is inflated by
/// ±1 before padding, so the result never has zero span.
pub fn bounds(points: &[CurvePoint], pad: f64) -> BoundingSquare {
    let Some((mut x0, mut x1, mut y0, mut y1)) = extents(points) else {
        return BoundingSquare::default();
    };
    let flat_x = x1 - x0 < BOUNDS_EPS;
    let flat_y = y1 - y0 < BOUNDS_EPS;
    if flat_x && flat_y {
        return BoundingSquare::default();
    }
    if flat_x {
        x0 -= 1.0;
        x1 += 1.0;
    }
    if flat_y {
        y0 -= 1.0;
        y1 += 1.0;
    }
    let pad = if pad.is_finite() { pad.max(0.0) } else { 0.0 };
    let half_span = 0.5 * (x1 - x0).max(y1 - y0) * (1.0 + pad);
    BoundingSquare {
        center: CurvePoint {
            x: 0.5 * (x0 + x1),
            y: 0.5 * (y0 + y1),
        },
        half_span,
    }
}

/// Recenter on the bounding-box center and scale so `max(w, h) == 2 * target_radius`.
///
/// Spans below 1e-9 keep scale 1 (translation only).
pub fn normalize_scale(points: &[CurvePoint], target_radius: f64) -> Vec<CurvePoint> {
    let Some((x0, x1, y0, y1)) = extents(points) else {
        return points.to_vec();
    };
    let cx = 0.5 * (x0 + x1);
    let cy = 0.5 * (y0 + y1);
    let span = (x1 - x0).max(y1 - y0);
    let scale = if span < SCALE_EPS || !target_radius.is_finite() {
        1.0
    } else {
        2.0 * target_radius / span
    };
    points
        .iter()
        .map(|p| CurvePoint {
            x: (p.x - cx) * scale,
            y: (p.y - cy) * scale,
        })
        .collect()
}

/// Resample a closed polygon to `max(24, target_count)` points spaced evenly by arc length.
///
/// The path is closed with a synthetic copy of the first point unless the
/// endpoints already coincide within 1e-6. Segments shorter than 1e-9 do not
/// contribute. Fewer than 3 finite points, or zero perimeter, returns the
/// input unchanged.
pub fn resample_closed(points: &[CurvePoint], target_count: usize) -> Vec<CurvePoint> {
    let mut path = sanitize(points);
    if path.len() < 3 {
        return points.to_vec();
    }
    let first = path[0];
    if first.distance(&path[path.len() - 1]) > CLOSE_EPS {
        path.push(first);
    }

    // (start point, end point, cumulative length at start, length)
    let mut segments: Vec<(CurvePoint, CurvePoint, f64, f64)> = Vec::with_capacity(path.len());
    let mut total = 0.0;
    for w in path.windows(2) {
        let len = w[0].distance(&w[1]);
        if len >= SEGMENT_EPS {
            segments.push((w[0], w[1], total, len));
            total += len;
        }
    }
    if segments.is_empty() || total < SEGMENT_EPS {
        return points.to_vec();
    }

    let count = target_count.max(MIN_RESAMPLE);
    let step = total / count as f64;
    let mut out = Vec::with_capacity(count);
    let mut seg = 0;
    for k in 0..count {
        let target = k as f64 * step;
        while seg + 1 < segments.len() && segments[seg].2 + segments[seg].3 < target {
            seg += 1;
        }
        let (a, b, start, len) = segments[seg];
        let t = ((target - start) / len).clamp(0.0, 1.0);
        out.push(a.lerp(&b, t));
    }
    out
}

/// Cyclic 3-point Laplacian smoothing: `p * (1 - 2w) + (prev + next) * w`.
///
/// `w = clamp(alpha, 0, 0.48)`. Needs at least 4 points and one pass.
pub fn smooth_closed(points: &[CurvePoint], passes: usize, alpha: f64) -> Vec<CurvePoint> {
    let n = points.len();
    if n < 4 || passes == 0 {
        return points.to_vec();
    }
    let w = if alpha.is_finite() {
        alpha.clamp(0.0, MAX_SMOOTH_WEIGHT)
    } else {
        0.0
    };
    let keep = 1.0 - 2.0 * w;
    let mut cur = points.to_vec();
    let mut next = vec![CurvePoint::default(); n];
    for _ in 0..passes {
        for k in 0..n {
            let prev = cur[(k + n - 1) % n];
            let succ = cur[(k + 1) % n];
            next[k] = CurvePoint {
                x: cur[k].x * keep + (prev.x + succ.x) * w,
                y: cur[k].y * keep + (prev.y + succ.y) * w,
            };
        }
        std::mem::swap(&mut cur, &mut next);
    }
    cur
}

/// Canonical conditioning for raw input: resample, one light smoothing pass,
/// then normalize to radius 2.3.
pub fn prepare(points: &[CurvePoint], target_count: usize) -> Vec<CurvePoint> {
    prepare_with(
        points,
        &ConditionCfg {
            target_count,
            ..ConditionCfg::default()
        },
    )
}

/// `prepare` with every knob exposed. Non-finite points are dropped first.
pub fn prepare_with(points: &[CurvePoint], cfg: &ConditionCfg) -> Vec<CurvePoint> {
    let clean = sanitize(points);
    let resampled = resample_closed(&clean, cfg.target_count);
    let smoothed = smooth_closed(&resampled, cfg.smooth_passes, cfg.smooth_alpha);
    normalize_scale(&smoothed, cfg.target_radius)
}
