use crate::error::{ArgumentError, Result};
use crate::math::{angle, Vector2};

use super::validate;

/// A division of the full circle into `num_arcs` equal sectors, rotated
/// CCW by `rotation_degrees`.
///
/// Arc `k` is centred on `k * 360° / num_arcs + rotation_degrees`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPartition {
    num_arcs: u32,
    rotation_degrees: f64,
}

impl ArcPartition {
    /// Creates a new partition.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_arcs` is zero or `rotation_degrees` is not finite.
    pub fn new(num_arcs: u32, rotation_degrees: f64) -> Result<Self> {
        validate::arc_count(num_arcs)?;
        validate::finite_scalar("rotation_degrees", rotation_degrees)?;
        Ok(Self {
            num_arcs,
            rotation_degrees,
        })
    }

    /// The four axis-aligned arcs: +x, +y, -x, -y.
    #[must_use]
    pub fn cardinals() -> Self {
        Self {
            num_arcs: 4,
            rotation_degrees: 0.0,
        }
    }

    /// Eight arcs: the cardinals plus the diagonals.
    #[must_use]
    pub fn octants() -> Self {
        Self {
            num_arcs: 8,
            rotation_degrees: 0.0,
        }
    }

    #[must_use]
    pub fn num_arcs(&self) -> u32 {
        self.num_arcs
    }

    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    /// Angular width of each arc in degrees.
    #[must_use]
    pub fn arc_width_degrees(&self) -> f64 {
        360.0 / f64::from(self.num_arcs)
    }

    /// Index of the arc closest to `v`, or `None` for the zero vector.
    #[must_use]
    pub fn nearest_index(&self, v: &Vector2) -> Option<u32> {
        if angle::is_zero(v) {
            return None;
        }
        Some(angle::nearest_arc_index(
            v,
            self.num_arcs,
            self.rotation_degrees.to_radians(),
        ))
    }

    /// Unit bisector of arc `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index >= num_arcs`.
    pub fn bisector(&self, index: u32) -> Result<Vector2> {
        if index >= self.num_arcs {
            tracing::debug!(index, num_arcs = self.num_arcs, "rejected arc index");
            return Err(ArgumentError::ArcIndex {
                index,
                num_arcs: self.num_arcs,
            }
            .into());
        }
        Ok(self.unit_bisector(index))
    }

    /// Quantizes the direction of `v` to the nearest arc bisector, keeping `|v|`.
    ///
    /// The zero vector is returned unchanged.
    #[must_use]
    pub fn round(&self, v: &Vector2) -> Vector2 {
        let Some(index) = self.nearest_index(v) else {
            return *v;
        };
        tracing::trace!(index, num_arcs = self.num_arcs, "resolved nearest arc");
        self.unit_bisector(index) * angle::magnitude(v)
    }

    fn unit_bisector(&self, index: u32) -> Vector2 {
        angle::arc_bisector(index, self.num_arcs, self.rotation_degrees.to_radians())
    }
}

/// Rounds the direction of `v` to the nearest of `num_arcs` evenly spaced
/// arcs, rotated by `rotation_degrees`, preserving its magnitude.
///
/// Directions exactly on an arc boundary go to the arc with the higher
/// continuous index (e.g. +y with two arcs rounds to -x).
///
/// # Errors
///
/// Returns an error if `num_arcs` is zero, or if `rotation_degrees` or a
/// component of `v` is not finite.
pub fn round_to_nearest_arc(v: &Vector2, num_arcs: u32, rotation_degrees: f64) -> Result<Vector2> {
    let partition = ArcPartition::new(num_arcs, rotation_degrees)?;
    validate::finite_vector("v", v)?;
    Ok(partition.round(v))
}

/// Rounds `v` to the nearest of +x, +y, -x, -y, preserving its magnitude.
#[must_use]
pub fn round_to_cardinals(v: &Vector2) -> Vector2 {
    ArcPartition::cardinals().round(v)
}

/// Rounds `v` to the nearest cardinal or diagonal, preserving its magnitude.
#[must_use]
pub fn round_to_octants(v: &Vector2) -> Vector2 {
    ArcPartition::octants().round(v)
}
