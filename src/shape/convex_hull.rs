use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeError, SupportMap};
use crate::utils;

/// The convex hull of a set of points.
///
/// Only the points are stored: the support point along a direction is the
/// stored point with the largest projection on that direction, found by a
/// linear scan.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexHull {
    points: Vec<Point<Real>>,
}

impl ConvexHull {
    /// Creates the convex hull of the given points.
    ///
    /// Returns an error if `points` is empty.
    pub fn try_new(points: Vec<Point<Real>>) -> Result<Self, ShapeError> {
        if points.is_empty() {
            Err(ShapeError::EmptyConvexHull)
        } else {
            Ok(ConvexHull { points })
        }
    }

    /// The points this hull is built from.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// Adds a point to this hull.
    pub fn push(&mut self, point: Point<Real>) {
        self.points.push(point)
    }

    /// Checks that the hull is not empty and that all its points are finite.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.points.is_empty() {
            return Err(ShapeError::EmptyConvexHull);
        }

        for pt in &self.points {
            for value in pt.iter() {
                if !value.is_finite() {
                    return Err(ShapeError::NonFiniteCoordinate {
                        shape: "convex hull",
                        value: *value,
                    });
                }
            }
        }

        Ok(())
    }

    /// The smallest positive side of the axis-aligned box enclosing the points.
    pub fn min_extent(&self) -> Real {
        let (mins, maxs) = self.local_bounds();
        utils::min_positive_component(&(maxs - mins)).unwrap_or(0.0)
    }

    /// The largest distance between the local origin and a point of the hull.
    pub fn bounding_radius(&self) -> Real {
        self.points
            .iter()
            .map(|pt| pt.coords.norm())
            .fold(0.0, Real::max)
    }

    fn local_bounds(&self) -> (Point<Real>, Point<Real>) {
        let mut mins = self.points[0];
        let mut maxs = self.points[0];

        for pt in &self.points[1..] {
            mins = mins.inf(pt);
            maxs = maxs.sup(pt);
        }

        (mins, maxs)
    }
}

impl SupportMap for ConvexHull {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.points)
    }
}
