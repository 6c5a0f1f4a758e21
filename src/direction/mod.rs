mod cardinal;
mod containment;
mod ext;
mod partition;
mod rotation;
mod validate;

pub use cardinal::{bias_to_cardinals, Cardinal, MAX_BIAS_DEGREES};
pub use containment::is_direction_within_arc;
pub use ext::DirectionExt;
pub use partition::{round_to_cardinals, round_to_nearest_arc, round_to_octants, ArcPartition};
pub use rotation::{rotate_clockwise_by_degrees, rotate_clockwise_by_radians, signed_angle_ccw};
