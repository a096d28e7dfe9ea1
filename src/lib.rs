/*!
convex3d
========

**convex3d** is a proximity-query engine for pairs of convex shapes moving
rigidly in 3D space, written with the rust programming language.

It answers three questions:

* [`query::closest_points()`]: the distance and witness points between two convex shapes,
  computed with a GJK iteration over the Minkowski difference of the shapes.
* [`query::time_of_impact()`]: the first time two shapes interpolated between a start and an
  end pose touch, computed by conservative advancement.
* [`query::growth_distance()`]: the uniform scaling of both shapes at which they touch.

All queries are pure functions: they read the shapes and poses given by the caller and
return their result by value. No state is carried from one query to the next.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)] // Maybe revisit this one later.
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod motion;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point3, Translation3, Vector3};
    use na::UnitQuaternion;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point3 as Point;

    /// The angular vector type.
    pub type AngVector<N> = Vector3<N>;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The transformation matrix type.
    ///
    /// A pose: translation followed by a unit-quaternion rotation, mapping
    /// shape-local coordinates to world coordinates.
    pub use Isometry3 as Isometry;

    /// The rotation matrix type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
