use std::f64::consts::PI;

use nalgebra::Rotation2;

use crate::error::Result;
use crate::math::{angle, Vector2};

use super::validate;

/// Rotates `v` clockwise by `angle_radians`, preserving its magnitude.
///
/// Clockwise is the negative of the usual CCW-positive rotation:
/// `x' = x cos a + y sin a`, `y' = -x sin a + y cos a`.
#[must_use]
pub fn rotate_clockwise_by_radians(v: &Vector2, angle_radians: f64) -> Vector2 {
    Rotation2::new(-angle_radians) * *v
}

/// Rotates `v` clockwise by `angle_degrees`.
#[must_use]
pub fn rotate_clockwise_by_degrees(v: &Vector2, angle_degrees: f64) -> Vector2 {
    rotate_clockwise_by_radians(v, angle_degrees.to_radians())
}

/// Signed angle in degrees that rotates `from` onto `to`, CCW positive,
/// in `(-180, 180]`.
///
/// # Errors
///
/// Returns an error if either vector is zero or has a non-finite component.
pub fn signed_angle_ccw(from: &Vector2, to: &Vector2) -> Result<f64> {
    validate::direction("from", from)?;
    validate::direction("to", to)?;

    let radians = angle::signed_angle(from, to);
    // atan2 yields -π for a negative-zero cross; keep the half-open range.
    if radians <= -PI {
        Ok(PI.to_degrees())
    } else {
        Ok(radians.to_degrees())
    }
}
