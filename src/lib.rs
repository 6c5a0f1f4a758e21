pub mod direction;
pub mod error;
pub mod math;

pub use direction::{
    bias_to_cardinals, is_direction_within_arc, rotate_clockwise_by_radians, round_to_cardinals,
    round_to_nearest_arc, signed_angle_ccw, ArcPartition, Cardinal, DirectionExt,
};
pub use error::{ArcsnapError, Result};
