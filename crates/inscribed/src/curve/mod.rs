//! Curve conditioning for raw point lists.
//!
//! Purpose
//! - Turn freehand strokes or preset output into a well-formed closed
//!   polyline: even arc-length spacing, a light smoothing pass, and a fixed
//!   scale, so that one tolerance fits every input.
//!
//! Layout
//! - `types`: `CurvePoint`, `BoundingSquare`, boundary filtering.
//! - `condition`: `bounds`, `normalize_scale`, `resample_closed`,
//!   `smooth_closed`, `prepare`.
//! - `presets`: parametric and random test curves.

mod condition;
pub mod presets;
mod types;

pub use condition::{
    bounds, normalize_scale, prepare, prepare_with, resample_closed, smooth_closed, ConditionCfg,
};
pub use types::{sanitize, BoundingSquare, CurvePoint};

#[cfg(test)]
mod tests;
