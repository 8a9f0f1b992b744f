//! Rectangle detection by coincidence search in pair space.
//!
//! Purpose
//! - Two chords with the same midpoint and the same length are the diagonals
//!   of a rectangle. Instead of testing all point quadruples, walk the lifted
//!   samples once, look up earlier samples within `tol` on every axis through
//!   a spatial hash, and validate the four endpoints of each disjoint match.
//!
//! Guarantees
//! - Output order is the order in which rectangles are found; identical input
//!   gives identical output.
//! - A quadruple of curve indices is emitted at most once.
//! - Chords sharing an endpoint never match, and a sample never matches itself
//!   (it is inserted only after its own query).
//!
//! Layout
//! - `types`: `Rectangle`, `DetectCfg`.
//! - `hash`: the `(mx, my, d)` spatial hash.
//! - `validate`: the rectangle acceptance test.

mod hash;
mod types;
mod validate;

use std::collections::HashSet;

use crate::lift::PairSample;

use hash::SpatialHash;
use types::canonical_key;
pub use types::{DetectCfg, Rectangle};
use validate::{clamp_tolerance, validate_ordered};
pub use validate::{order_clockwise, validate};

/// Find up to `max_count` rectangles among `samples`.
///
/// `tolerance` bounds the per-axis difference between two colliding samples
/// and loosens the rectangle validation; it is floored at 0.001.
pub fn detect(samples: &[PairSample], tolerance: f64, max_count: usize) -> Vec<Rectangle> {
    let tol = clamp_tolerance(tolerance);
    let mut found = Vec::new();
    if max_count == 0 {
        return found;
    }
    let mut hash = SpatialHash::new(tol);
    let mut seen: HashSet<[usize; 4]> = HashSet::new();

    for (si, s) in samples.iter().enumerate() {
        if !(s.mx.is_finite() && s.my.is_finite() && s.d.is_finite()) {
            continue;
        }
        let key = hash.key(s);
        for ci in hash.neighbours(key) {
            let c = &samples[ci];
            if s.shares_index(c) || !coincident(s, c, tol) {
                continue;
            }
            let quad = [s.i, s.j, c.i, c.j];
            let canon = canonical_key(quad);
            if seen.contains(&canon) {
                continue;
            }
            let corners = [s.p1, s.p2, c.p1, c.p2];
            let order = order_clockwise(&corners);
            let points = order.map(|k| corners[k]);
            if !validate_ordered(&points, tol) {
                continue;
            }
            seen.insert(canon);
            found.push(Rectangle {
                points,
                midpoint: (0.5 * (s.mx + c.mx), 0.5 * (s.my + c.my)),
                distance: 0.5 * (s.d + c.d),
                pair_indices: order.map(|k| quad[k]),
            });
            if found.len() >= max_count {
                tracing::trace!(max_count, scanned = si + 1, "rectangle cap reached");
                return found;
            }
        }
        hash.insert(key, si);
    }
    found
}

/// `detect` with a `DetectCfg`.
pub fn detect_with(samples: &[PairSample], cfg: &DetectCfg) -> Vec<Rectangle> {
    detect(samples, cfg.tolerance, cfg.max_count)
}

/// Exact per-axis check behind the coarse hash lookup.
#[inline]
fn coincident(a: &PairSample, b: &PairSample, tol: f64) -> bool {
    (a.mx - b.mx).abs() <= tol && (a.my - b.my).abs() <= tol && (a.d - b.d).abs() <= tol
}
