//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector};
use crate::shape::shape_error::check_dimension;
use crate::shape::{ShapeError, SupportMap};
use crate::utils::{self, WSign};

/// Shape of a box.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Default for Cuboid {
    fn default() -> Self {
        Cuboid::new(Vector::repeat(1.0))
    }
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// Checks that every half-extent is positive.
    pub fn validate(&self) -> Result<(), ShapeError> {
        check_dimension("box", "half-extent x", self.half_extents.x)?;
        check_dimension("box", "half-extent y", self.half_extents.y)?;
        check_dimension("box", "half-extent z", self.half_extents.z)
    }

    /// Twice the smallest positive half-extent.
    #[inline]
    pub fn min_extent(&self) -> Real {
        utils::min_positive_component(&self.half_extents).unwrap_or(0.0) * 2.0
    }

    /// The distance between the center and any corner.
    #[inline]
    pub fn bounding_radius(&self) -> Real {
        self.half_extents.norm()
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        dir.copy_sign_to(self.half_extents).into()
    }
}
