pub mod angle;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Magnitudes below this are treated as the zero vector.
pub const TOLERANCE: f64 = 1e-10;

/// Bisector components below this magnitude are snapped to exactly zero.
///
/// `cos`/`sin` evaluated at cardinal angles leave residues around `1e-16`.
pub const SNAP_EPSILON: f64 = 1e-6;
