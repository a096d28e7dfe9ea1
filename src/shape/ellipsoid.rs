//! Support mapping based Ellipsoid shape.

use crate::math::{Point, Real, Vector};
use crate::shape::shape_error::check_dimension;
use crate::shape::{ShapeError, SupportMap};
use crate::utils;

/// An axis-aligned ellipsoid centered at its local origin.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ellipsoid {
    /// The semi-axes lengths along `x`, `y` and `z`.
    pub scale: Vector<Real>,
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Ellipsoid::new(Vector::repeat(1.0))
    }
}

impl Ellipsoid {
    /// Creates a new ellipsoid from its semi-axes lengths.
    pub fn new(scale: Vector<Real>) -> Self {
        Ellipsoid { scale }
    }

    /// Checks that every semi-axis is positive.
    pub fn validate(&self) -> Result<(), ShapeError> {
        check_dimension("ellipsoid", "semi-axis x", self.scale.x)?;
        check_dimension("ellipsoid", "semi-axis y", self.scale.y)?;
        check_dimension("ellipsoid", "semi-axis z", self.scale.z)
    }

    /// Twice the smallest positive semi-axis.
    pub fn min_extent(&self) -> Real {
        utils::min_positive_component(&self.scale).unwrap_or(0.0) * 2.0
    }

    /// The largest semi-axis.
    pub fn bounding_radius(&self) -> Real {
        self.scale.max()
    }
}

impl SupportMap for Ellipsoid {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // The ellipsoid is the image of the unit sphere by `S = diag(scale)`, so its
        // support point along `d` is `S² d / |S d|`.
        let sd = self.scale.component_mul(dir);
        let norm = sd.norm();

        if norm > 0.0 {
            Point::from(self.scale.component_mul(&sd) / norm)
        } else {
            Point::new(0.0, 0.0, self.scale.z)
        }
    }
}
