//! Support mapping based Cone shape.

use crate::math::{Point, Real, Vector};
use crate::shape::shape_error::check_dimension;
use crate::shape::{ShapeError, SupportMap};
use num::Zero;

/// Cone shape with its principal axis aligned with the `z` axis.
///
/// The apex is at `z = half_height` and the base disk at `z = -half_height`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Cone {
    /// The half-height of the cone.
    pub half_height: Real,
    /// The base radius of the cone.
    pub radius: Real,
}

impl Default for Cone {
    fn default() -> Self {
        Cone::new(1.0, 1.0)
    }
}

impl Cone {
    /// Creates a new cone.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the cone along the `z` axis.
    /// * `radius` - the radius of the base disk.
    pub fn new(half_height: Real, radius: Real) -> Cone {
        Cone {
            half_height,
            radius,
        }
    }

    /// Checks that both dimensions are positive.
    pub fn validate(&self) -> Result<(), ShapeError> {
        check_dimension("cone", "half-height", self.half_height)?;
        check_dimension("cone", "base radius", self.radius)
    }

    /// The smallest of the base diameter and the height.
    pub fn min_extent(&self) -> Real {
        (self.radius * 2.0).min(self.half_height * 2.0)
    }

    /// The distance between the center and the base rim (the apex is never farther).
    pub fn bounding_radius(&self) -> Real {
        (self.half_height * self.half_height + self.radius * self.radius).sqrt()
    }
}

impl SupportMap for Cone {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut vres = *dir;

        vres[2] = 0.0;

        if vres.normalize_mut().is_zero() {
            vres = na::zero();
            vres[2] = self.half_height.copysign(dir[2]);
        } else {
            vres *= self.radius;
            vres[2] = -self.half_height;

            if dir.dot(&vres) < dir[2] * self.half_height {
                vres = na::zero();
                vres[2] = self.half_height
            }
        }

        Point::from(vres)
    }
}
