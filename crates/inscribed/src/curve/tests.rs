use super::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn pt(x: f64, y: f64) -> CurvePoint {
    CurvePoint { x, y }
}

fn triangle() -> Vec<CurvePoint> {
    vec![pt(0.0, 0.0), pt(4.0, 0.0), pt(0.0, 3.0)]
}

#[test]
fn new_rejects_non_finite() {
    assert!(CurvePoint::new(1.0, 2.0).is_some());
    assert!(CurvePoint::new(f64::NAN, 0.0).is_none());
    assert!(CurvePoint::new(0.0, f64::INFINITY).is_none());
    let raw = vec![pt(0.0, 0.0), pt(f64::NAN, 1.0), pt(1.0, 1.0)];
    assert_eq!(sanitize(&raw), vec![pt(0.0, 0.0), pt(1.0, 1.0)]);
}

#[test]
fn bounds_default_on_empty_and_single_point() {
    assert_eq!(bounds(&[], 0.1), BoundingSquare::default());
    assert_eq!(bounds(&[pt(5.0, 5.0)], 0.1), BoundingSquare::default());
    let d = BoundingSquare::default();
    assert!((d.span() - 6.0).abs() < 1e-12);
    assert_eq!(d.center, pt(0.0, 0.0));
}

#[test]
fn bounds_is_square_and_padded() {
    let b = bounds(&[pt(0.0, 0.0), pt(4.0, 2.0)], 0.25);
    assert!((b.center.x - 2.0).abs() < 1e-12 && (b.center.y - 1.0).abs() < 1e-12);
    // half span = 4 / 2 * 1.25
    assert!((b.half_span - 2.5).abs() < 1e-12);
    assert!((b.max_x() - b.min_x() - (b.max_y() - b.min_y())).abs() < 1e-12);
    assert!(b.contains(&pt(4.0, 2.0)));
}

#[test]
fn bounds_contains_lopsided_set() {
    // mean x is 1.25, extents middle is 5
    let pts = [pt(0.0, 0.0), pt(0.0, 1.0), pt(0.0, 2.0), pt(10.0, 1.0)];
    let b = bounds(&pts, 0.0);
    assert!((b.center.x - 5.0).abs() < 1e-12 && (b.center.y - 1.0).abs() < 1e-12);
    assert!((b.span() - 10.0).abs() < 1e-12);
    assert!(pts.iter().all(|p| b.contains(p)));
}

#[test]
fn bounds_inflates_flat_axis() {
    // vertical segment: zero width, height 0.5 -> width becomes 2
    let b = bounds(&[pt(1.0, 0.0), pt(1.0, 0.5)], 0.0);
    assert!((b.half_span - 1.0).abs() < 1e-12);
    assert!((b.center.x - 1.0).abs() < 1e-12);
}

#[test]
fn normalize_scale_fits_target_radius() {
    let pts = vec![pt(10.0, 10.0), pt(14.0, 10.0), pt(14.0, 12.0)];
    let out = normalize_scale(&pts, 2.3);
    let b = bounds(&out, 0.0);
    assert!((b.span() - 4.6).abs() < 1e-12);
    // centered on the bounding-box center
    assert!((out[0].x + 2.3).abs() < 1e-12);
    assert!((out[1].x - 2.3).abs() < 1e-12);
}

#[test]
fn normalize_scale_tiny_span_only_translates() {
    let pts = vec![pt(1.0, 1.0), pt(1.0 + 1e-12, 1.0)];
    let out = normalize_scale(&pts, 2.3);
    assert!(out.iter().all(|p| p.x.abs() < 1e-9 && p.y.abs() < 1e-9));
}

fn inside_triangle(p: &CurvePoint, eps: f64) -> bool {
    // triangle (0,0), (4,0), (0,3): x >= 0, y >= 0, 3x + 4y <= 12
    p.x >= -eps && p.y >= -eps && 3.0 * p.x + 4.0 * p.y <= 12.0 + eps
}

#[test]
fn resample_triangle_count_and_hull() {
    let out = resample_closed(&triangle(), 30);
    assert_eq!(out.len(), 30);
    assert!(out.iter().all(|p| inside_triangle(p, 1e-9)));
    assert_eq!(out[0], pt(0.0, 0.0));
}

#[test]
fn resample_enforces_minimum_count() {
    assert_eq!(resample_closed(&triangle(), 5).len(), 24);
}

#[test]
fn resample_spacing_is_uniform() {
    // unit square, perimeter 4, 40 points -> spacing 0.1 along the path
    let sq = vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)];
    let out = resample_closed(&sq, 40);
    assert_eq!(out.len(), 40);
    for k in 0..10 {
        assert!((out[k].x - 0.1 * k as f64).abs() < 1e-9);
        assert!(out[k].y.abs() < 1e-9);
    }
    assert!((out[10].x - 1.0).abs() < 1e-9 && out[10].y.abs() < 1e-9);
}

#[test]
fn resample_already_closed_path_matches_open() {
    let mut closed = triangle();
    closed.push(pt(0.0, 0.0));
    let a = resample_closed(&triangle(), 36);
    let b = resample_closed(&closed, 36);
    for (p, q) in a.iter().zip(&b) {
        assert!(p.distance(q) < 1e-12);
    }
}

#[test]
fn resample_passes_through_short_or_degenerate_input() {
    let two = vec![pt(0.0, 0.0), pt(1.0, 0.0)];
    assert_eq!(resample_closed(&two, 30), two);
    let with_nan = vec![pt(0.0, 0.0), pt(f64::NAN, 0.0), pt(1.0, 0.0)];
    assert_eq!(resample_closed(&with_nan, 30).len(), 3);
    let same = vec![pt(2.0, 2.0); 5];
    assert_eq!(resample_closed(&same, 30), same);
}

#[test]
fn smooth_keeps_short_input_and_zero_passes() {
    assert_eq!(smooth_closed(&triangle(), 3, 0.2), triangle());
    let sq = vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)];
    assert_eq!(smooth_closed(&sq, 0, 0.2), sq);
}

#[test]
fn smooth_preserves_centroid_and_shrinks_square() {
    let sq = vec![pt(-1.0, -1.0), pt(1.0, -1.0), pt(1.0, 1.0), pt(-1.0, 1.0)];
    let out = smooth_closed(&sq, 1, 0.25);
    // corner (1,1): 0.5*(1,1) + 0.25*((1,-1) + (-1,1)) = (0.5, 0.5)
    assert!((out[2].x - 0.5).abs() < 1e-12 && (out[2].y - 0.5).abs() < 1e-12);
    let cx: f64 = out.iter().map(|p| p.x).sum::<f64>() / 4.0;
    assert!(cx.abs() < 1e-12);
}

#[test]
fn smooth_clamps_weight() {
    let sq = vec![pt(-1.0, -1.0), pt(1.0, -1.0), pt(1.0, 1.0), pt(-1.0, 1.0)];
    assert_eq!(smooth_closed(&sq, 1, 5.0), smooth_closed(&sq, 1, 0.48));
    assert_eq!(smooth_closed(&sq, 1, -1.0), sq);
}

#[test]
fn prepare_normalizes_noisy_stroke() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut raw: Vec<CurvePoint> = (0..50)
        .map(|k| {
            let t = std::f64::consts::TAU * k as f64 / 50.0;
            let r = 40.0 + rng.gen_range(-1.0..1.0);
            pt(100.0 + r * t.cos(), 50.0 + r * t.sin())
        })
        .collect();
    raw.insert(10, pt(f64::NAN, 0.0));
    let out = prepare(&raw, 64);
    assert_eq!(out.len(), 64);
    assert!(out.iter().all(CurvePoint::is_finite));
    let b = bounds(&out, 0.0);
    assert!((b.span() - 4.6).abs() < 1e-9);
    assert!(b.center.x.abs() < 1e-9 && b.center.y.abs() < 1e-9);
}
