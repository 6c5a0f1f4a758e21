use crate::math::{angle, Vector2};

/// Returns whether `v` lies inside the arc of total width `arc_angle_degrees`
/// centred on `bisector`.
///
/// The test is `angle(v, bisector) <= arc_angle_degrees / 2`, so a 0° arc
/// only accepts directions parallel to `bisector` and a 360° arc accepts
/// every non-zero `v`, the exact opposite included.
///
/// Returns `false` if either vector is zero or the arc angle is negative or NaN.
#[must_use]
pub fn is_direction_within_arc(v: &Vector2, bisector: &Vector2, arc_angle_degrees: f64) -> bool {
    if angle::is_zero(v) || angle::is_zero(bisector) {
        return false;
    }
    if arc_angle_degrees.is_nan() || arc_angle_degrees < 0.0 {
        return false;
    }
    // The unsigned angle never exceeds 180°.
    if arc_angle_degrees >= 360.0 {
        return true;
    }
    angle::unsigned_angle(v, bisector) <= (arc_angle_degrees * 0.5).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(degrees: f64) -> Vector2 {
        let r = degrees.to_radians();
        Vector2::new(r.cos(), r.sin())
    }

    #[test]
    fn zero_arc_matches_only_parallel() {
        let v = Vector2::new(-0.7, 2.3);
        assert!(is_direction_within_arc(&v, &v, 0.0));
        assert!(is_direction_within_arc(&(v * 4.0), &v, 0.0));
        assert!(!is_direction_within_arc(&v, &Vector2::new(-0.7, 2.4), 0.0));
    }

    #[test]
    fn full_arc_matches_opposite() {
        let v = Vector2::new(3.0, -1.0);
        assert!(is_direction_within_arc(&-v, &v, 360.0));
        assert!(is_direction_within_arc(&Vector2::y(), &v, 720.0));
    }

    #[test]
    fn half_width_bounds() {
        let forward = Vector2::x();
        assert!(is_direction_within_arc(&dir(29.0), &forward, 60.0));
        assert!(is_direction_within_arc(&dir(-29.0), &forward, 60.0));
        assert!(!is_direction_within_arc(&dir(31.0), &forward, 60.0));
        assert!(!is_direction_within_arc(&dir(-31.0), &forward, 60.0));
    }

    #[test]
    fn across_the_half_turn_seam() {
        let back = -Vector2::x();
        assert!(is_direction_within_arc(&dir(175.0), &back, 20.0));
        assert!(is_direction_within_arc(&dir(-175.0), &back, 20.0));
        assert!(!is_direction_within_arc(&dir(165.0), &back, 20.0));
    }

    #[test]
    fn huge_vectors_contain_themselves() {
        let v = Vector2::new(1e200, 1e200);
        assert!(is_direction_within_arc(&v, &v, 0.0));
        assert!(is_direction_within_arc(&v, &Vector2::new(1.0, 1.0), 0.0));
        assert!(!is_direction_within_arc(&v, &Vector2::new(1e200, -1e200), 179.0));
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        let v = Vector2::new(1.0, 1.0);
        assert!(!is_direction_within_arc(&Vector2::zeros(), &v, 360.0));
        assert!(!is_direction_within_arc(&v, &Vector2::zeros(), 360.0));
        assert!(!is_direction_within_arc(&v, &v, -1.0));
        assert!(!is_direction_within_arc(&v, &v, f64::NAN));
    }
}
