use na::Unit;

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::shape_error::check_dimension;
use crate::shape::{ShapeError, SupportMap};

/// A sphere centered at its local origin.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Sphere {
    /// The radius of the sphere.
    pub radius: Real,
}

impl Default for Sphere {
    fn default() -> Self {
        Sphere::new(1.0)
    }
}

impl Sphere {
    /// Creates a new sphere with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Sphere {
        Sphere { radius }
    }

    /// Checks that the radius is positive.
    pub fn validate(&self) -> Result<(), ShapeError> {
        check_dimension("sphere", "radius", self.radius)
    }

    /// The smallest extent of this sphere, i.e., its diameter.
    #[inline]
    pub fn min_extent(&self) -> Real {
        self.radius * 2.0
    }

    /// The largest distance between the local origin and the boundary.
    #[inline]
    pub fn bounding_radius(&self) -> Real {
        self.radius
    }
}

impl SupportMap for Sphere {
    #[inline]
    fn support_point(&self, m: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        // The sphere is rotation-invariant: skip the rotation of `dir`.
        let dir = Unit::try_new(*dir, 0.0).unwrap_or(m.rotation * Vector::z_axis());
        Point::from(m.translation.vector) + *dir * self.radius
    }

    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let dir = Unit::try_new(*dir, 0.0).unwrap_or(Vector::z_axis());
        Point::from(*dir * self.radius)
    }
}
