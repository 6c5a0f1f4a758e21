use crate::math::{angle, Vector2};

use super::containment::is_direction_within_arc;
use super::partition::ArcPartition;

/// Bias angles above a quadrant are clamped to this value.
pub const MAX_BIAS_DEGREES: f64 = 90.0;

/// One of the four axis-aligned directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    /// +x
    Right,
    /// +y
    Up,
    /// -x
    Left,
    /// -y
    Down,
}

impl Cardinal {
    /// All cardinals in CCW order starting at +x. Biasing tests them in this order.
    pub const ALL: [Cardinal; 4] = [Cardinal::Right, Cardinal::Up, Cardinal::Left, Cardinal::Down];

    #[must_use]
    pub fn unit_vector(self) -> Vector2 {
        match self {
            Cardinal::Right => Vector2::new(1.0, 0.0),
            Cardinal::Up => Vector2::new(0.0, 1.0),
            Cardinal::Left => Vector2::new(-1.0, 0.0),
            Cardinal::Down => Vector2::new(0.0, -1.0),
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Cardinal::Right => Cardinal::Left,
            Cardinal::Up => Cardinal::Down,
            Cardinal::Left => Cardinal::Right,
            Cardinal::Down => Cardinal::Up,
        }
    }

    /// The cardinal closest to `v`, or `None` for the zero vector.
    ///
    /// Diagonals resolve CCW, e.g. (1, 1) is `Up`.
    #[must_use]
    pub fn nearest(v: &Vector2) -> Option<Self> {
        let index = ArcPartition::cardinals().nearest_index(v)?;
        Self::ALL.get(index as usize).copied()
    }

    /// The first cardinal whose cone of total width `bias_angle_degrees`
    /// contains `v`.
    ///
    /// The bias is clamped to [`MAX_BIAS_DEGREES`]; a negative bias matches nothing.
    #[must_use]
    pub fn within_bias(v: &Vector2, bias_angle_degrees: f64) -> Option<Self> {
        if bias_angle_degrees.is_nan() || bias_angle_degrees < 0.0 {
            return None;
        }
        let bias = bias_angle_degrees.min(MAX_BIAS_DEGREES);
        Self::ALL
            .into_iter()
            .find(|c| is_direction_within_arc(v, &c.unit_vector(), bias))
    }
}

/// Snaps `v` onto a cardinal if it lies within that cardinal's bias cone,
/// preserving `|v|`. Otherwise `v` is returned unchanged.
///
/// Cones are `bias_angle_degrees` wide in total, clamped to 90°, so with the
/// maximum bias every non-zero direction snaps.
#[must_use]
pub fn bias_to_cardinals(v: &Vector2, bias_angle_degrees: f64) -> Vector2 {
    match Cardinal::within_bias(v, bias_angle_degrees) {
        Some(cardinal) => cardinal.unit_vector() * angle::magnitude(v),
        None => *v,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn dir(degrees: f64) -> Vector2 {
        let r = degrees.to_radians();
        Vector2::new(r.cos(), r.sin())
    }

    #[test]
    fn near_axis_snaps() {
        let v = Vector2::new(1.0, 0.01);
        assert_eq!(bias_to_cardinals(&v, 30.0), Vector2::new(angle::magnitude(&v), 0.0));

        // Only 1.15° off +y, well inside the 15° half-cone, so it snaps.
        let w = Vector2::new(0.01, 0.5);
        assert_eq!(bias_to_cardinals(&w, 30.0), Vector2::new(0.0, angle::magnitude(&w)));
    }

    #[test]
    fn outside_every_cone_is_unchanged() {
        // 31° off +y and 59° off +x: outside both 15° half-cones.
        let v = Vector2::new(0.3, 0.5);
        assert_eq!(bias_to_cardinals(&v, 30.0), v);
        assert_eq!(Cardinal::within_bias(&v, 30.0), None);
    }

    #[test]
    fn oversized_bias_is_clamped() {
        for deg in [0.0, 20.0, 44.0, 46.0, 133.0, 200.0, 310.0] {
            let v = dir(deg) * 1.5;
            assert_eq!(bias_to_cardinals(&v, 999.0), bias_to_cardinals(&v, 90.0));
        }
        let v = dir(140.0);
        assert_eq!(Cardinal::within_bias(&v, 999.0), Some(Cardinal::Left));
    }

    #[test]
    fn diagonal_at_full_bias_goes_to_first_cardinal() {
        // 45° from both +x and +y; +x is tested first.
        assert_eq!(Cardinal::within_bias(&Vector2::new(1.0, 1.0), 90.0), Some(Cardinal::Right));
        assert_eq!(Cardinal::within_bias(&Vector2::new(-1.0, 1.0), 90.0), Some(Cardinal::Up));
    }

    #[test]
    fn huge_vectors_snap_without_overflow() {
        let v = Vector2::new(1e200, 1e200);
        let r = bias_to_cardinals(&v, 90.0);
        assert_relative_eq!(r, Vector2::new(2.0_f64.sqrt() * 1e200, 0.0), max_relative = 1e-12);
        let near_down = Vector2::new(1e199, -1e201);
        assert_eq!(Cardinal::within_bias(&near_down, 10.0), Some(Cardinal::Down));
    }

    #[test]
    fn negative_bias_is_unchanged() {
        let v = Vector2::new(1.0, 0.0001);
        assert_eq!(bias_to_cardinals(&v, -5.0), v);
    }

    #[test]
    fn zero_bias_only_exact_axes() {
        assert_eq!(bias_to_cardinals(&Vector2::new(0.0, -2.0), 0.0), Vector2::new(0.0, -2.0));
        assert_eq!(Cardinal::within_bias(&Vector2::new(0.0, -2.0), 0.0), Some(Cardinal::Down));
        let off = Vector2::new(0.001, -2.0);
        assert_eq!(bias_to_cardinals(&off, 0.0), off);
    }

    #[test]
    fn zero_vector_is_unchanged() {
        assert_eq!(bias_to_cardinals(&Vector2::zeros(), 90.0), Vector2::zeros());
        assert_eq!(Cardinal::nearest(&Vector2::zeros()), None);
    }

    #[test]
    fn magnitude_preserved_when_snapping() {
        let v = dir(-84.0) * 7.0;
        let snapped = bias_to_cardinals(&v, 20.0);
        assert_relative_eq!(snapped, Vector2::new(0.0, -7.0), epsilon = 1e-12);
    }

    #[test]
    fn nearest_and_opposite() {
        assert_eq!(Cardinal::nearest(&dir(100.0)), Some(Cardinal::Up));
        assert_eq!(Cardinal::nearest(&dir(-170.0)), Some(Cardinal::Left));
        assert_eq!(Cardinal::nearest(&Vector2::new(1.0, 1.0)), Some(Cardinal::Up));
        for c in Cardinal::ALL {
            assert_eq!(c.opposite().opposite(), c);
            assert_eq!(c.opposite().unit_vector(), -c.unit_vector());
        }
    }
}
