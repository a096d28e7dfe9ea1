use crate::math::Real;

/// A shape that cannot be queried because its parameters are malformed.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// One of the dimensions of the shape is zero, negative or not finite.
    #[error("the {dimension} of the {shape} must be positive and finite, got {value}.")]
    NonPositiveDimension {
        /// The kind of shape, e.g. `"capsule"`.
        shape: &'static str,
        /// The name of the offending dimension, e.g. `"radius"`.
        dimension: &'static str,
        /// The offending value.
        value: Real,
    },
    /// A point of the shape has a NaN or infinite coordinate.
    #[error("the {shape} has a non-finite coordinate: {value}.")]
    NonFiniteCoordinate {
        /// The kind of shape, e.g. `"convex hull"`.
        shape: &'static str,
        /// The offending value.
        value: Real,
    },
    /// A convex hull must contain at least one point.
    #[error("a convex hull must contain at least one point.")]
    EmptyConvexHull,
}

pub(crate) fn check_dimension(
    shape: &'static str,
    dimension: &'static str,
    value: Real,
) -> Result<(), ShapeError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::NonPositiveDimension {
            shape,
            dimension,
            value,
        })
    }
}
