//! Rectangle acceptance test for four points.
//!
//! The test is approximate. Corners must be near-perpendicular, opposite
//! sides and the two diagonals must match in squared length, and two adjacent
//! sides plus a diagonal must satisfy Pythagoras. Slack grows with the
//! tolerance and with the squared diagonal (floored at 1).

use nalgebra::Vector2;

use crate::cfg::{
    ANGLE_BASE, ANGLE_SLOPE, DEGENERATE_EPS, LENGTH_BASE, LENGTH_SLOPE, MIN_TOLERANCE,
    PYTHAGORAS_SLACK,
};
use crate::curve::CurvePoint;

/// Tolerances below 0.001 (or non-finite) are raised to 0.001.
#[inline]
pub(crate) fn clamp_tolerance(tolerance: f64) -> f64 {
    if tolerance.is_finite() {
        tolerance.max(MIN_TOLERANCE)
    } else {
        MIN_TOLERANCE
    }
}

/// Permutation that orders `points` clockwise around their centroid.
///
/// Sorted by decreasing polar angle (y up); ties keep input order.
pub fn order_clockwise(points: &[CurvePoint; 4]) -> [usize; 4] {
    let cx = points.iter().map(|p| p.x).sum::<f64>() / 4.0;
    let cy = points.iter().map(|p| p.y).sum::<f64>() / 4.0;
    let angle = |k: usize| (points[k].y - cy).atan2(points[k].x - cx);
    let mut order = [0, 1, 2, 3];
    order.sort_by(|&a, &b| {
        angle(b)
            .partial_cmp(&angle(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}

/// True if the four points form a rectangle within `tolerance`, in any input order.
pub fn validate(points: &[CurvePoint; 4], tolerance: f64) -> bool {
    let order = order_clockwise(points);
    let ordered = order.map(|k| points[k]);
    validate_ordered(&ordered, clamp_tolerance(tolerance))
}

/// `validate` for points already in cyclic order and a clamped tolerance.
pub(crate) fn validate_ordered(points: &[CurvePoint; 4], tol: f64) -> bool {
    if !points.iter().all(CurvePoint::is_finite) {
        return false;
    }
    let v: [Vector2<f64>; 4] = points.map(CurvePoint::to_vec);

    let max_cos = ANGLE_BASE + tol * ANGLE_SLOPE;
    for k in 0..4 {
        let a = v[(k + 3) % 4] - v[k];
        let b = v[(k + 1) % 4] - v[k];
        let (na, nb) = (a.norm(), b.norm());
        if na < DEGENERATE_EPS || nb < DEGENERATE_EPS {
            return false;
        }
        if (a.dot(&b) / (na * nb)).abs() > max_cos {
            return false;
        }
    }

    let mut d2 = [
        (v[0] - v[1]).norm_squared(),
        (v[0] - v[2]).norm_squared(),
        (v[0] - v[3]).norm_squared(),
        (v[1] - v[2]).norm_squared(),
        (v[1] - v[3]).norm_squared(),
        (v[2] - v[3]).norm_squared(),
    ];
    d2.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    if d2[0] < DEGENERATE_EPS {
        return false;
    }
    let eps = (LENGTH_BASE + tol * LENGTH_SLOPE) * d2[5].max(1.0);

    let sides_pair_up = (d2[0] - d2[1]).abs() <= eps && (d2[2] - d2[3]).abs() <= eps;
    let diagonals_match = (d2[4] - d2[5]).abs() <= eps;
    let right_triangle = (d2[0] + d2[2] - d2[4]).abs() <= eps * PYTHAGORAS_SLACK;
    sides_pair_up && diagonals_match && right_triangle
}
