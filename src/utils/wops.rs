//! Miscellaneous utilities.

use crate::math::{Real, Vector};

/// Trait to copy the sign of each component of one scalar/vector to another.
pub trait WSign<Rhs>: Sized {
    /// Copy the sign of each component of `self` to the corresponding component of `to`.
    ///
    /// A zero of either sign counts as a sign, so `0.0` yields a positive result
    /// and `-0.0` a negative one.
    fn copy_sign_to(self, to: Rhs) -> Rhs;
}

impl WSign<Real> for Real {
    fn copy_sign_to(self, to: Self) -> Self {
        let minus_zero: Real = -0.0;
        let signbit = minus_zero.to_bits();
        Real::from_bits((signbit & self.to_bits()) | ((!signbit) & to.to_bits()))
    }
}

impl WSign<Vector<Real>> for Vector<Real> {
    fn copy_sign_to(self, to: Vector<Real>) -> Vector<Real> {
        Vector::new(
            self.x.copy_sign_to(to.x),
            self.y.copy_sign_to(to.y),
            self.z.copy_sign_to(to.z),
        )
    }
}

/// The infinity norm (largest absolute component) of a vector.
#[inline]
pub fn inf_norm(v: &Vector<Real>) -> Real {
    v.iter().fold(0.0, |acc: Real, e| acc.max(e.abs()))
}

/// The smallest strictly positive component of `v`, if any.
///
/// Components that are zero (or negative) are ignored. This is how a shape
/// with a collapsed dimension still reports a meaningful scale.
#[inline]
pub fn min_positive_component(v: &Vector<Real>) -> Option<Real> {
    v.iter()
        .copied()
        .filter(|e| *e > 0.0)
        .fold(None, |acc, e| Some(acc.map_or(e, |m: Real| m.min(e))))
}
