//! Angle and arc primitives shared by the direction operations.
//!
//! Arc convention: a circle split into `num_arcs` equal sectors, sector `k`
//! centred on the angle `k * TAU / num_arcs + rotation` (radians, CCW from +x).
use std::f64::consts::TAU;

use super::{Vector2, SNAP_EPSILON, TOLERANCE};

/// Length of `v`, without intermediate overflow for large components.
#[must_use]
pub fn magnitude(v: &Vector2) -> f64 {
    v.x.hypot(v.y)
}

/// Returns `true` if `v` has no usable direction.
#[must_use]
pub fn is_zero(v: &Vector2) -> bool {
    magnitude(v) < TOLERANCE
}

/// `v` divided by its largest absolute component, so products stay in range.
fn rescaled(v: &Vector2) -> Vector2 {
    let largest = v.x.abs().max(v.y.abs());
    if largest > 0.0 {
        v / largest
    } else {
        *v
    }
}

/// 2D cross product `a.x * b.y - a.y * b.x`; positive when `b` lies CCW of `a`.
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Unsigned angle between `a` and `b` in radians, in `[0, π]`.
///
/// Computed as `atan2(|cross|, dot)` on rescaled inputs, which is exact for
/// parallel and anti-parallel inputs.
#[must_use]
pub fn unsigned_angle(a: &Vector2, b: &Vector2) -> f64 {
    signed_angle(a, b).abs()
}

/// Signed angle from `a` to `b` in radians, CCW positive, in `[-π, π]`.
#[must_use]
pub fn signed_angle(a: &Vector2, b: &Vector2) -> f64 {
    let (a, b) = (rescaled(a), rescaled(b));
    cross(&a, &b).atan2(a.dot(&b))
}

/// Snaps components with magnitude below [`SNAP_EPSILON`] to exactly zero.
#[must_use]
pub fn snap_to_zero(v: Vector2) -> Vector2 {
    v.map(|c| if c.abs() < SNAP_EPSILON { 0.0 } else { c })
}

/// Index of the arc whose bisector is angularly closest to `v`.
///
/// The continuous index `angle / TAU * num_arcs` is rounded half up, so a
/// direction sitting exactly on an arc boundary resolves to the higher index
/// before wrapping into `[0, num_arcs)`. The zero vector resolves to the arc
/// containing angle 0; callers must screen it out first.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn nearest_arc_index(v: &Vector2, num_arcs: u32, rotation_radians: f64) -> u32 {
    let n = f64::from(num_arcs.max(1));
    let angle = v.y.atan2(v.x) - rotation_radians;
    let raw = (angle / TAU * n + 0.5).floor();
    raw.rem_euclid(n) as u32
}

/// Unit bisector of arc `index`, with trig noise snapped to zero.
#[must_use]
pub fn arc_bisector(index: u32, num_arcs: u32, rotation_radians: f64) -> Vector2 {
    let angle = f64::from(index) * TAU / f64::from(num_arcs.max(1)) + rotation_radians;
    snap_to_zero(Vector2::new(angle.cos(), angle.sin()))
}
