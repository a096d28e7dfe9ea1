use crate::math::{Point, Real, Vector};
use crate::shape::shape_error::check_dimension;
use crate::shape::{ShapeError, SupportMap};
use na::Unit;

#[derive(PartialEq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// A capsule shape: the segment `[-half_height, half_height]` of the `z` axis dilated by a sphere.
pub struct Capsule {
    /// Half the length of the inner segment.
    pub half_height: Real,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Default for Capsule {
    fn default() -> Self {
        Capsule::new(1.0, 1.0)
    }
}

impl Capsule {
    /// Creates a new capsule aligned with the `z` axis and with the given half-height and radius.
    pub fn new(half_height: Real, radius: Real) -> Self {
        Self {
            half_height,
            radius,
        }
    }

    /// The height of the inner segment of this capsule.
    pub fn height(&self) -> Real {
        self.half_height * 2.0
    }

    /// Checks that both dimensions are positive.
    pub fn validate(&self) -> Result<(), ShapeError> {
        check_dimension("capsule", "half-height", self.half_height)?;
        check_dimension("capsule", "radius", self.radius)
    }

    /// The smallest of the diameter and the segment length.
    pub fn min_extent(&self) -> Real {
        (self.radius * 2.0).min(self.height())
    }

    /// The distance between the center and the tips of the caps.
    pub fn bounding_radius(&self) -> Real {
        self.half_height + self.radius
    }
}

impl SupportMap for Capsule {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let unit = Unit::try_new(*dir, 0.0).unwrap_or(Vector::z_axis());
        // A direction orthogonal to the axis is supported by the whole segment: keep its middle.
        let z = if unit.z > 0.0 {
            self.half_height
        } else if unit.z < 0.0 {
            -self.half_height
        } else {
            0.0
        };

        Point::new(0.0, 0.0, z) + *unit * self.radius
    }
}
