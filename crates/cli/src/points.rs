use anyhow::{bail, Context, Result};
use inscribed::CurvePoint;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Point shapes accepted in input files: `[x, y]` pairs or `{"x": .., "y": ..}` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Pair([f64; 2]),
    Object { x: f64, y: f64 },
}

impl RawPoint {
    fn finite(self) -> Option<CurvePoint> {
        match self {
            RawPoint::Pair([x, y]) | RawPoint::Object { x, y } => CurvePoint::new(x, y),
        }
    }
}

/// Parse a JSON array of points. Non-finite points are dropped.
pub fn parse_points(json: &str) -> Result<Vec<CurvePoint>> {
    let raw: Vec<RawPoint> = serde_json::from_str(json).context("parsing point list")?;
    let total = raw.len();
    let points: Vec<CurvePoint> = raw
        .into_iter()
        .filter_map(RawPoint::finite)
        .collect();
    if points.len() < total {
        tracing::warn!(dropped = total - points.len(), "non-finite points dropped");
    }
    Ok(points)
}

pub fn read_points(path: &Path) -> Result<Vec<CurvePoint>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let points = parse_points(&text).with_context(|| format!("in {}", path.display()))?;
    if points.is_empty() {
        bail!("{} contains no finite points", path.display());
    }
    Ok(points)
}
