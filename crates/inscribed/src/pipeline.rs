//! End-to-end driver: condition → lift → {surface grid, rectangles}.
//!
//! Every call recomputes from the given snapshot and owns its buffers; there
//! is no state between calls. `analyze` never fails. `PipelineCfg::validate`
//! is the one place that rejects settings, for callers that read them from
//! outside (config files, UI fields).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::curve::{bounds, prepare_with, sanitize, ConditionCfg, CurvePoint};
use crate::detect::{detect, Rectangle};
use crate::lift::{lift, PairSample, MAX_LIFT_POINTS};
use crate::surface::{build, SurfaceGrid};

/// Detector tolerance, either absolute or relative to the curve's bounding span.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tolerance {
    Absolute(f64),
    /// Fraction of the side of the curve's bounding square.
    Relative(f64),
}

impl Tolerance {
    /// Absolute tolerance for a curve whose bounding square has side `span`.
    #[inline]
    pub fn resolve(&self, span: f64) -> f64 {
        match *self {
            Tolerance::Absolute(t) => t,
            Tolerance::Relative(f) => f * span,
        }
    }

    #[inline]
    fn value(&self) -> f64 {
        match *self {
            Tolerance::Absolute(v) | Tolerance::Relative(v) => v,
        }
    }
}

impl Default for Tolerance {
    /// About 0.03 on a curve normalized to radius 2.3.
    fn default() -> Self {
        Tolerance::Relative(0.0065)
    }
}

/// Settings for one `analyze` call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineCfg {
    pub condition: ConditionCfg,
    /// Use the input points as the curve (only non-finite points are dropped).
    pub skip_conditioning: bool,
    pub grid_resolution: usize,
    pub tolerance: Tolerance,
    pub max_rectangles: usize,
}

impl Default for PipelineCfg {
    fn default() -> Self {
        Self {
            condition: ConditionCfg::default(),
            skip_conditioning: false,
            grid_resolution: 48,
            tolerance: Tolerance::default(),
            max_rectangles: 200,
        }
    }
}

/// Rejected pipeline settings.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidParams { reason: String },
    TooManyPoints { requested: usize, max: usize },
}

impl ConfigError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid pipeline config: {reason}"),
            Self::TooManyPoints { requested, max } => write!(
                f,
                "{requested} curve points exceed the lift limit of {max} points"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl PipelineCfg {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tol = self.tolerance.value();
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::invalid("tolerance must be finite and > 0"));
        }
        if self.max_rectangles == 0 {
            return Err(ConfigError::invalid("max_rectangles must be > 0"));
        }
        let r = self.condition.target_radius;
        if !r.is_finite() || r <= 0.0 {
            return Err(ConfigError::invalid("target_radius must be finite and > 0"));
        }
        if !self.condition.smooth_alpha.is_finite() {
            return Err(ConfigError::invalid("smooth_alpha must be finite"));
        }
        if !self.skip_conditioning && self.condition.target_count > MAX_LIFT_POINTS {
            return Err(ConfigError::TooManyPoints {
                requested: self.condition.target_count,
                max: MAX_LIFT_POINTS,
            });
        }
        Ok(())
    }

    /// Length check against a concrete input.
    ///
    /// Conditioned curves are bounded by `condition.target_count`, which
    /// `validate` already covers; raw curves are as long as their finite input.
    pub fn check_input(&self, raw: &[CurvePoint]) -> Result<(), ConfigError> {
        if !self.skip_conditioning {
            return Ok(());
        }
        let n = raw.iter().filter(|p| p.is_finite()).count();
        if n > MAX_LIFT_POINTS {
            return Err(ConfigError::TooManyPoints {
                requested: n,
                max: MAX_LIFT_POINTS,
            });
        }
        Ok(())
    }
}

/// Everything one pipeline run produces.
///
/// Sample and rectangle indices refer to positions in `curve`.
#[derive(Clone, Debug, Serialize)]
pub struct Analysis {
    pub curve: Vec<CurvePoint>,
    pub samples: Vec<PairSample>,
    pub grid: SurfaceGrid,
    pub rectangles: Vec<Rectangle>,
    /// Absolute tolerance the detector ran with.
    pub tolerance: f64,
}

/// Run the full pipeline on a raw point list.
pub fn analyze(raw: &[CurvePoint], cfg: &PipelineCfg) -> Analysis {
    let curve = if cfg.skip_conditioning {
        sanitize(raw)
    } else {
        prepare_with(raw, &cfg.condition)
    };
    tracing::debug!(raw = raw.len(), points = curve.len(), "curve conditioned");

    let samples = lift(&curve);
    let span = bounds(&curve, 0.0).span();
    let tolerance = cfg.tolerance.resolve(span);
    tracing::debug!(samples = samples.len(), span, tolerance, "pair space lifted");

    let grid = build(&samples, cfg.grid_resolution);
    let rectangles = detect(&samples, tolerance, cfg.max_rectangles);
    tracing::debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        rectangles = rectangles.len(),
        "analysis done"
    );
    Analysis {
        curve,
        samples,
        grid,
        rectangles,
        tolerance,
    }
}
