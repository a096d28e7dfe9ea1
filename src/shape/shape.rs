use crate::math::{Point, Real, Vector};
use crate::shape::{
    Capsule, Cone, ConvexHull, Cuboid, Cylinder, Ellipsoid, ShapeError, Sphere, SupportMap,
};
use num_derive::FromPrimitive;

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A sphere shape.
    Sphere = 0,
    /// A box shape.
    Cuboid,
    /// A capsule shape.
    Capsule,
    /// A cone shape.
    Cone,
    /// A cylindrical shape.
    Cylinder,
    /// An ellipsoid shape.
    Ellipsoid,
    /// The convex hull of a point set.
    ConvexHull,
}

/// A convex shape that can be given to the proximity queries.
///
/// This is a closed set of variants: a query matches on it once per support
/// point evaluation instead of going through a trait object.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ConvexShape {
    /// A sphere.
    Sphere(Sphere),
    /// A box.
    Cuboid(Cuboid),
    /// A capsule aligned with the `z` axis.
    Capsule(Capsule),
    /// A cone aligned with the `z` axis.
    Cone(Cone),
    /// A cylinder aligned with the `z` axis.
    Cylinder(Cylinder),
    /// An axis-aligned ellipsoid.
    Ellipsoid(Ellipsoid),
    /// The convex hull of a point set.
    ConvexHull(ConvexHull),
}

impl ConvexShape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ConvexShape::Sphere(_) => ShapeType::Sphere,
            ConvexShape::Cuboid(_) => ShapeType::Cuboid,
            ConvexShape::Capsule(_) => ShapeType::Capsule,
            ConvexShape::Cone(_) => ShapeType::Cone,
            ConvexShape::Cylinder(_) => ShapeType::Cylinder,
            ConvexShape::Ellipsoid(_) => ShapeType::Ellipsoid,
            ConvexShape::ConvexHull(_) => ShapeType::ConvexHull,
        }
    }

    /// Checks that this shape has positive dimensions (or a non-empty point set).
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            ConvexShape::Sphere(s) => s.validate(),
            ConvexShape::Cuboid(s) => s.validate(),
            ConvexShape::Capsule(s) => s.validate(),
            ConvexShape::Cone(s) => s.validate(),
            ConvexShape::Cylinder(s) => s.validate(),
            ConvexShape::Ellipsoid(s) => s.validate(),
            ConvexShape::ConvexHull(s) => s.validate(),
        }
    }

    /// The smallest extent of this shape.
    pub fn min_extent(&self) -> Real {
        match self {
            ConvexShape::Sphere(s) => s.min_extent(),
            ConvexShape::Cuboid(s) => s.min_extent(),
            ConvexShape::Capsule(s) => s.min_extent(),
            ConvexShape::Cone(s) => s.min_extent(),
            ConvexShape::Cylinder(s) => s.min_extent(),
            ConvexShape::Ellipsoid(s) => s.min_extent(),
            ConvexShape::ConvexHull(s) => s.min_extent(),
        }
    }

    /// The largest distance between the local origin and the boundary of this shape.
    ///
    /// This is a valid bounding radius for the time-of-impact queries when the
    /// shape rotates about its local origin.
    pub fn bounding_radius(&self) -> Real {
        match self {
            ConvexShape::Sphere(s) => s.bounding_radius(),
            ConvexShape::Cuboid(s) => s.bounding_radius(),
            ConvexShape::Capsule(s) => s.bounding_radius(),
            ConvexShape::Cone(s) => s.bounding_radius(),
            ConvexShape::Cylinder(s) => s.bounding_radius(),
            ConvexShape::Ellipsoid(s) => s.bounding_radius(),
            ConvexShape::ConvexHull(s) => s.bounding_radius(),
        }
    }
}

impl SupportMap for ConvexShape {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match self {
            ConvexShape::Sphere(s) => s.local_support_point(dir),
            ConvexShape::Cuboid(s) => s.local_support_point(dir),
            ConvexShape::Capsule(s) => s.local_support_point(dir),
            ConvexShape::Cone(s) => s.local_support_point(dir),
            ConvexShape::Cylinder(s) => s.local_support_point(dir),
            ConvexShape::Ellipsoid(s) => s.local_support_point(dir),
            ConvexShape::ConvexHull(s) => s.local_support_point(dir),
        }
    }
}

macro_rules! impl_from_shape(
    ($($Variant: ident),*) => {$(
        impl From<$Variant> for ConvexShape {
            fn from(shape: $Variant) -> Self {
                ConvexShape::$Variant(shape)
            }
        }
    )*}
);

impl_from_shape!(Sphere, Cuboid, Capsule, Cone, Cylinder, Ellipsoid, ConvexHull);
