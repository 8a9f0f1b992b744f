//! Inscribed rectangles on closed planar curves via pair-space lifting.
//!
//! Pipeline
//! - `curve`: condition raw point lists into closed, uniformly sampled curves.
//! - `lift`: map every unordered point pair to `(mid_x, mid_y, distance)`.
//! - `surface`: bin the lifted cloud into a dense grid for display.
//! - `detect`: find disjoint pairs that coincide in pair space and validate
//!   the four underlying points as a rectangle.
//!
//! Two chords that share a midpoint and a length are the diagonals of a
//! rectangle, so coincidences in the lifted space replace an O(n⁴) search
//! over point quadruples.
//!
//! Every stage is a pure function of its input; degenerate input yields a
//! default or an empty result rather than an error.

pub mod api;
mod cfg;
pub mod curve;
pub mod detect;
pub mod lift;
pub mod pipeline;
pub mod surface;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use curve::{BoundingSquare, CurvePoint};
pub use detect::Rectangle;
pub use lift::PairSample;
pub use surface::SurfaceGrid;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::curve::presets::{sample_preset, BlobCfg, Preset, ReplayToken};
    pub use crate::curve::{
        bounds, normalize_scale, prepare, resample_closed, sanitize, smooth_closed,
        BoundingSquare, ConditionCfg, CurvePoint,
    };
    pub use crate::detect::{detect, validate, DetectCfg, Rectangle};
    pub use crate::lift::{lift, PairSample};
    pub use crate::pipeline::{analyze, Analysis, PipelineCfg, Tolerance};
    pub use crate::surface::{build, SurfaceGrid};
    pub use nalgebra::Vector2 as Vec2;
}
