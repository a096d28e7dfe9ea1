use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SupportMap;

/// A vertex of a simplex living in the Minkowski difference `A - B` of two shapes.
///
/// Besides the point `w = a - b` itself, the two support points it was built
/// from are kept so that any affine combination of simplex vertices can be
/// mapped back to a point on each shape.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SimplexVertex {
    /// The point of the Minkowski difference, equal to `self.a - self.b`.
    pub w: Point<Real>,
    /// The world-space support point on the first shape used to compute `self.w`.
    pub a: Point<Real>,
    /// The world-space support point on the second shape used to compute `self.w`.
    pub b: Point<Real>,
}

impl SimplexVertex {
    /// Initializes a simplex vertex with `w = a - b`.
    pub fn new(a: Point<Real>, b: Point<Real>) -> Self {
        let w = Point::from(a - b);
        Self::new_with_point(w, a, b)
    }

    /// Initializes a simplex vertex with all information provided.
    ///
    /// It is assumed, but not checked, that `w == a - b`.
    pub fn new_with_point(w: Point<Real>, a: Point<Real>, b: Point<Real>) -> Self {
        SimplexVertex { w, a, b }
    }

    /// Initializes a simplex vertex where both original points are equal.
    ///
    /// This is mostly useful to run the simplex reduction on plain points.
    pub fn single_point(w: Point<Real>) -> Self {
        Self::new_with_point(w, w, w)
    }

    /// Computes the support point of the Minkowski difference of `g1` and `g2` along `dir`.
    ///
    /// `dir` is a world-space direction; `g1` is queried along `dir` and `g2`
    /// along `-dir`, each through its own pose.
    pub fn from_shapes<G1: ?Sized, G2: ?Sized>(
        pos1: &Isometry<Real>,
        g1: &G1,
        pos2: &Isometry<Real>,
        g2: &G2,
        dir: &Vector<Real>,
    ) -> Self
    where
        G1: SupportMap,
        G2: SupportMap,
    {
        let a = g1.support_point(pos1, dir);
        let b = g2.support_point(pos2, &-*dir);

        SimplexVertex::new(a, b)
    }
}
