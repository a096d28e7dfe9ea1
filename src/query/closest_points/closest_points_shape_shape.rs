use crate::math::{Isometry, Real};
use crate::query::details::closest_points_support_map_support_map;
use crate::query::{GjkOptions, QueryError, QueryResult};
use crate::shape::ConvexShape;

/// Computes the distance and the pair of closest points between two convex shapes.
///
/// Both shapes and the options are validated first. Geometric outcomes, including
/// overlapping shapes, are reported by the `status` of the result.
///
/// # Example
///
/// ```
/// use convex3d::math::{Isometry, Point};
/// use convex3d::query::{self, GjkOptions};
/// use convex3d::shape::{ConvexShape, Sphere};
///
/// let sphere = ConvexShape::from(Sphere::new(1.0));
/// let pos_a = Isometry::translation(-2.0, 0.0, 0.0);
/// let pos_b = Isometry::translation(2.0, 0.0, 0.0);
///
/// let res = query::closest_points(&pos_a, &sphere, &pos_b, &sphere, &GjkOptions::default())
///     .unwrap();
/// assert_eq!(res.distance, 2.0);
/// assert_eq!(res.witness_a, Point::new(-1.0, 0.0, 0.0));
/// assert_eq!(res.witness_b, Point::new(1.0, 0.0, 0.0));
/// ```
pub fn closest_points(
    pos1: &Isometry<Real>,
    g1: &ConvexShape,
    pos2: &Isometry<Real>,
    g2: &ConvexShape,
    options: &GjkOptions,
) -> Result<QueryResult, QueryError> {
    options.validate()?;
    g1.validate()?;
    g2.validate()?;

    Ok(closest_points_support_map_support_map(
        pos1, g1, pos2, g2, options,
    ))
}
