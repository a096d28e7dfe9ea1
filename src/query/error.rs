use crate::math::Real;
use crate::shape::ShapeError;

/// Malformed arguments rejected by a query before any geometric computation.
///
/// Geometric outcomes (overlap, stalled iterations, missing impact) are never
/// reported through this type: they are part of the query results.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum QueryError {
    /// A tolerance is zero, negative, or not finite.
    #[error("the {name} must be positive and finite, got {value}.")]
    NonPositiveTolerance {
        /// The name of the offending option, e.g. `"absolute tolerance"`.
        name: &'static str,
        /// The offending value.
        value: Real,
    },
    /// The iteration budget of a query is zero.
    #[error("the maximum number of iterations must be at least 1.")]
    NoIterationsAllowed,
    /// A bounding radius given to a time-of-impact query is negative or not finite.
    #[error("bounding radii must be non-negative and finite, got {value}.")]
    NegativeBoundingRadius {
        /// The offending radius.
        value: Real,
    },
    /// One of the shapes has malformed dimensions.
    #[error("invalid shape: {0}")]
    InvalidShape(#[from] ShapeError),
}

pub(crate) fn check_tolerance(name: &'static str, value: Real) -> Result<(), QueryError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(QueryError::NonPositiveTolerance { name, value })
    }
}

pub(crate) fn check_bounding_radius(value: Real) -> Result<(), QueryError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(QueryError::NegativeBoundingRadius { value })
    }
}
