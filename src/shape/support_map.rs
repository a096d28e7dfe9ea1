//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector};

/// Traits of convex shapes representable by a support mapping function.
///
/// A support function associates a direction to the point of the shape which
/// maximizes its dot product with that direction. This is the only capability
/// the proximity queries need from a shape.
///
/// Implementations must be total: the zero direction is a valid input and must
/// yield a fixed point of the shape boundary instead of `NaN`s.
pub trait SupportMap {
    /// Evaluates the support function of this shape in its local frame.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Evaluates the support function of this shape transformed by `transform`.
    ///
    /// `dir` is expressed in world space and so is the returned point.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }
}

impl<S: SupportMap + ?Sized> SupportMap for &S {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        (**self).local_support_point(dir)
    }
}
