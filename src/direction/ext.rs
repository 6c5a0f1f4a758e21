use crate::error::Result;
use crate::math::Vector2;

use super::{
    bias_to_cardinals, is_direction_within_arc, rotate_clockwise_by_radians,
    round_to_cardinals, round_to_nearest_arc, round_to_octants, signed_angle_ccw,
};

/// Method-call access to the direction operations on [`Vector2`].
///
/// ```
/// use arcsnap::direction::DirectionExt;
/// use arcsnap::math::{angle, Vector2};
///
/// let stick = Vector2::new(0.9, 0.2);
/// assert_eq!(stick.round_to_cardinals(), Vector2::new(angle::magnitude(&stick), 0.0));
/// ```
pub trait DirectionExt {
    /// See [`round_to_nearest_arc`].
    ///
    /// # Errors
    ///
    /// Returns an error if `num_arcs` is zero or an input is not finite.
    fn round_to_nearest_arc(&self, num_arcs: u32, rotation_degrees: f64) -> Result<Vector2>;

    /// See [`round_to_cardinals`].
    fn round_to_cardinals(&self) -> Vector2;

    /// See [`round_to_octants`].
    fn round_to_octants(&self) -> Vector2;

    /// See [`is_direction_within_arc`].
    fn is_within_arc(&self, bisector: &Vector2, arc_angle_degrees: f64) -> bool;

    /// See [`bias_to_cardinals`].
    fn bias_to_cardinals(&self, bias_angle_degrees: f64) -> Vector2;

    /// See [`rotate_clockwise_by_radians`].
    fn rotate_clockwise_by_radians(&self, angle_radians: f64) -> Vector2;

    /// See [`signed_angle_ccw`].
    ///
    /// # Errors
    ///
    /// Returns an error if either vector is zero or not finite.
    fn signed_angle_ccw_to(&self, to: &Vector2) -> Result<f64>;
}

impl DirectionExt for Vector2 {
    fn round_to_nearest_arc(&self, num_arcs: u32, rotation_degrees: f64) -> Result<Vector2> {
        round_to_nearest_arc(self, num_arcs, rotation_degrees)
    }

    fn round_to_cardinals(&self) -> Vector2 {
        round_to_cardinals(self)
    }

    fn round_to_octants(&self) -> Vector2 {
        round_to_octants(self)
    }

    fn is_within_arc(&self, bisector: &Vector2, arc_angle_degrees: f64) -> bool {
        is_direction_within_arc(self, bisector, arc_angle_degrees)
    }

    fn bias_to_cardinals(&self, bias_angle_degrees: f64) -> Vector2 {
        bias_to_cardinals(self, bias_angle_degrees)
    }

    fn rotate_clockwise_by_radians(&self, angle_radians: f64) -> Vector2 {
        rotate_clockwise_by_radians(self, angle_radians)
    }

    fn signed_angle_ccw_to(&self, to: &Vector2) -> Result<f64> {
        signed_angle_ccw(self, to)
    }
}
