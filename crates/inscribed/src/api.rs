//! Curated API surface for downstream tools (renderers, the CLI).
//!
//! Important
//! - Prefer these re-exports over reaching into submodules; the module layout
//!   may change, this list is what callers are expected to use.

// Curve conditioning
pub use crate::curve::{
    bounds, normalize_scale, prepare, prepare_with, resample_closed, sanitize, smooth_closed,
    BoundingSquare, ConditionCfg, CurvePoint,
};
// Preset curves
pub use crate::curve::presets::{sample_preset, BlobCfg, Preset, ReplayToken};
// Pair space
pub use crate::lift::{lift, PairSample, MAX_LIFT_POINTS};
pub use crate::surface::{build as build_surface, SurfaceGrid};
// Rectangles
pub use crate::detect::{detect, detect_with, order_clockwise, validate, DetectCfg, Rectangle};
// Whole pipeline
pub use crate::pipeline::{analyze, Analysis, ConfigError, PipelineCfg, Tolerance};
