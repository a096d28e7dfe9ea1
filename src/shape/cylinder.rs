//! Support mapping based Cylinder shape.

use crate::math::{Point, Real, Vector};
use crate::shape::shape_error::check_dimension;
use crate::shape::{ShapeError, SupportMap};
use num::Zero;

/// Cylinder shape with its principal axis aligned with the `z` axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Cylinder {
    /// The half-height of the cylinder.
    pub half_height: Real,
    /// The radius of the cylinder.
    pub radius: Real,
}

impl Default for Cylinder {
    fn default() -> Self {
        Cylinder::new(1.0, 1.0)
    }
}

impl Cylinder {
    /// Creates a new cylinder.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the cylinder along the `z` axis.
    /// * `radius` - the length of the cylinder along all other axis.
    pub fn new(half_height: Real, radius: Real) -> Cylinder {
        Cylinder {
            half_height,
            radius,
        }
    }

    /// Checks that both dimensions are positive.
    pub fn validate(&self) -> Result<(), ShapeError> {
        check_dimension("cylinder", "half-height", self.half_height)?;
        check_dimension("cylinder", "radius", self.radius)
    }

    /// The smallest of the diameter and the height.
    pub fn min_extent(&self) -> Real {
        (self.radius * 2.0).min(self.half_height * 2.0)
    }

    /// The distance between the center and the rims of the caps.
    pub fn bounding_radius(&self) -> Real {
        (self.half_height * self.half_height + self.radius * self.radius).sqrt()
    }
}

impl SupportMap for Cylinder {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut vres = *dir;

        vres[2] = 0.0;

        if vres.normalize_mut().is_zero() {
            vres = na::zero()
        } else {
            vres *= self.radius;
        }

        vres[2] = self.half_height.copysign(dir[2]);

        Point::from(vres)
    }
}
