//! Uniformly scaled shapes.

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A shape uniformly scaled about its local origin.
///
/// A scale of zero collapses the shape to its local origin; a scale of one
/// leaves it unchanged. Negative scales are not supported.
#[derive(Copy, Clone, Debug)]
pub struct ScaledShape<'a, S: ?Sized> {
    /// The shape being scaled.
    pub inner_shape: &'a S,
    /// The scaling factor.
    pub scale: Real,
}

impl<'a, S: ?Sized + SupportMap> ScaledShape<'a, S> {
    /// Scales `inner_shape` by `scale` about its local origin.
    pub fn new(inner_shape: &'a S, scale: Real) -> Self {
        ScaledShape { inner_shape, scale }
    }
}

impl<S: ?Sized + SupportMap> SupportMap for ScaledShape<'_, S> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.inner_shape.local_support_point(dir) * self.scale
    }
}
