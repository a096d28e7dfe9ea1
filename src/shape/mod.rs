//! Convex shapes supported by the proximity queries.
//!
//! Every shape is expressed in its own local frame and only exposes its
//! support mapping to the queries (see [`SupportMap`]). The axial shapes
//! (capsule, cone, cylinder) are aligned with the local `z` axis.

pub use self::capsule::Capsule;
pub use self::cone::Cone;
pub use self::convex_hull::ConvexHull;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::ellipsoid::Ellipsoid;
pub use self::scaled_shape::ScaledShape;
#[doc(inline)]
pub use self::shape::{ConvexShape, ShapeType};
pub use self::shape_error::ShapeError;
pub use self::sphere::Sphere;
#[doc(inline)]
pub use self::support_map::SupportMap;

mod capsule;
mod cone;
mod convex_hull;
mod cuboid;
mod cylinder;
mod ellipsoid;
mod scaled_shape;
mod shape;
mod shape_error;
mod sphere;
mod support_map;
