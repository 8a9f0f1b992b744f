//! Point and bounding-box types shared by the whole pipeline.
//!
//! - `CurvePoint`: a finite planar point. Raw input goes through
//!   `CurvePoint::new` or `sanitize`, which drop non-finite coordinates.
//! - `BoundingSquare`: a square window (equal x/y span) around a point set.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Planar curve point.
///
/// Fields are public for cheap construction in tight loops; the pipeline
/// entry points filter non-finite values, so use `new` at the boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl CurvePoint {
    /// Validated constructor: `None` if either coordinate is NaN or infinite.
    #[inline]
    pub fn new(x: f64, y: f64) -> Option<Self> {
        let p = Self { x, y };
        p.is_finite().then_some(p)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_vec(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn distance(&self, other: &CurvePoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation `self + (other - self) * t`.
    #[inline]
    pub fn lerp(&self, other: &CurvePoint, t: f64) -> CurvePoint {
        CurvePoint {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// Drop non-finite points, keeping the order of the rest.
pub fn sanitize(points: &[CurvePoint]) -> Vec<CurvePoint> {
    points.iter().copied().filter(CurvePoint::is_finite).collect()
}

/// Square window `[cx - h, cx + h] × [cy - h, cy + h]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingSquare {
    pub center: CurvePoint,
    pub half_span: f64,
}

impl Default for BoundingSquare {
    /// Span 6 around the origin; used for empty or degenerate input.
    fn default() -> Self {
        Self {
            center: CurvePoint { x: 0.0, y: 0.0 },
            half_span: 3.0,
        }
    }
}

impl BoundingSquare {
    #[inline]
    pub fn span(&self) -> f64 {
        2.0 * self.half_span
    }
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.center.x - self.half_span
    }
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.center.x + self.half_span
    }
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.center.y - self.half_span
    }
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.center.y + self.half_span
    }
    #[inline]
    pub fn contains(&self, p: &CurvePoint) -> bool {
        (p.x - self.center.x).abs() <= self.half_span
            && (p.y - self.center.y).abs() <= self.half_span
    }
}

/// Axis-aligned extents `(min_x, max_x, min_y, max_y)` of the finite points.
pub(crate) fn extents(points: &[CurvePoint]) -> Option<(f64, f64, f64, f64)> {
    let mut it = points.iter().filter(|p| p.is_finite());
    let first = it.next()?;
    let init = (first.x, first.x, first.y, first.y);
    Some(it.fold(init, |(x0, x1, y0, y1), p| {
        (x0.min(p.x), x1.max(p.x), y0.min(p.y), y1.max(p.y))
    }))
}
