//! Tolerance defaults for the curve pipeline (internal).
//!
//! Policy
//! - Fixed constants; runtime knobs live in `ConditionCfg`, `DetectCfg` and
//!   `PipelineCfg`. The rectangle acceptance thresholds are empirical and
//!   tuned against hand-drawn curves, not derived.

/// Spans below this are treated as zero when rescaling a curve.
pub(crate) const SCALE_EPS: f64 = 1e-9;
/// First and last point closer than this count as an already closed path.
pub(crate) const CLOSE_EPS: f64 = 1e-6;
/// Segments shorter than this are skipped when measuring arc length.
pub(crate) const SEGMENT_EPS: f64 = 1e-9;
/// Bounding extents below this are degenerate.
pub(crate) const BOUNDS_EPS: f64 = 1e-9;
/// Grid ranges narrower than this get widened by `GRID_RANGE_PAD`.
pub(crate) const GRID_RANGE_EPS: f64 = 1e-8;
pub(crate) const GRID_RANGE_PAD: f64 = 0.5;

/// Minimum number of points emitted by `resample_closed`.
pub(crate) const MIN_RESAMPLE: usize = 24;
/// Smoothing weight is clamped to `[0, MAX_SMOOTH_WEIGHT]` to keep the filter stable.
pub(crate) const MAX_SMOOTH_WEIGHT: f64 = 0.48;

/// Grid resolution bounds and inpainting schedule.
pub(crate) const GRID_MIN_RES: usize = 12;
pub(crate) const GRID_MAX_RES: usize = 120;
pub(crate) const INPAINT_PASSES: usize = 3;
pub(crate) const INPAINT_MAX_RADIUS: usize = 4;

/// Floor for the detector tolerance.
pub(crate) const MIN_TOLERANCE: f64 = 1e-3;
/// Rectangle acceptance: `|cos(corner)| <= ANGLE_BASE + tol * ANGLE_SLOPE`.
pub(crate) const ANGLE_BASE: f64 = 0.16;
pub(crate) const ANGLE_SLOPE: f64 = 0.8;
/// Rectangle acceptance: squared-length slack
/// `(LENGTH_BASE + tol * LENGTH_SLOPE) * max(diag², 1)`.
pub(crate) const LENGTH_BASE: f64 = 0.18;
pub(crate) const LENGTH_SLOPE: f64 = 1.5;
/// Extra slack factor on the Pythagorean check.
pub(crate) const PYTHAGORAS_SLACK: f64 = 1.2;
/// Edges or pairwise distances below this reject a quadruple outright.
pub(crate) const DEGENERATE_EPS: f64 = 1e-12;
