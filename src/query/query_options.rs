use crate::math::Real;
use crate::query::error::{check_tolerance, QueryError};

/// Termination criteria of the GJK iteration.
///
/// The tests are evaluated in this order after every iteration: absolute
/// convergence, relative convergence, stagnation. The first test passing
/// decides the status of the query.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GjkOptions {
    /// The distance below which the shapes are considered touching.
    pub absolute_tolerance: Real,
    /// The relative decrease of the distance between two iterations below which
    /// the iteration stops.
    pub relative_tolerance: Real,
    /// The infinity-norm change of the closest point (or of both witness points)
    /// between two iterations below which the iteration stops.
    pub stagnation_tolerance: Real,
    /// The maximum number of iterations.
    pub max_iterations: usize,
}

impl Default for GjkOptions {
    fn default() -> Self {
        GjkOptions {
            absolute_tolerance: 1.0e-6,
            relative_tolerance: 1.0e-6,
            stagnation_tolerance: 1.0e-15,
            max_iterations: 100,
        }
    }
}

impl GjkOptions {
    /// Checks that every tolerance is positive and that at least one iteration is allowed.
    pub fn validate(&self) -> Result<(), QueryError> {
        check_tolerance("absolute tolerance", self.absolute_tolerance)?;
        check_tolerance("relative tolerance", self.relative_tolerance)?;
        check_tolerance("stagnation tolerance", self.stagnation_tolerance)?;

        if self.max_iterations == 0 {
            return Err(QueryError::NoIterationsAllowed);
        }

        Ok(())
    }
}

/// Options of the conservative advancement used by the time-of-impact queries.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ToiOptions {
    /// The distance below which the shapes are considered to be in contact.
    pub epsilon: Real,
    /// The maximum number of advancement steps.
    pub max_iterations: usize,
    /// The options of every closest-points query run by the advancement.
    pub gjk: GjkOptions,
}

impl Default for ToiOptions {
    fn default() -> Self {
        ToiOptions {
            epsilon: 0.01,
            max_iterations: 100,
            gjk: GjkOptions::default(),
        }
    }
}

impl ToiOptions {
    /// Checks these options and the nested GJK options.
    pub fn validate(&self) -> Result<(), QueryError> {
        check_tolerance("time of impact epsilon", self.epsilon)?;

        if self.max_iterations == 0 {
            return Err(QueryError::NoIterationsAllowed);
        }

        self.gjk.validate()
    }
}

/// Options of the growth-distance search.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GrowthOptions {
    /// The distance between the scaled shapes below which they are considered touching.
    pub epsilon: Real,
    /// The maximum number of closest-points queries run by the search.
    pub max_iterations: usize,
    /// The options of every closest-points query run by the search.
    pub gjk: GjkOptions,
}

impl Default for GrowthOptions {
    fn default() -> Self {
        GrowthOptions {
            epsilon: 1.0e-3,
            max_iterations: 100,
            gjk: GjkOptions::default(),
        }
    }
}

impl GrowthOptions {
    /// Checks these options and the nested GJK options.
    pub fn validate(&self) -> Result<(), QueryError> {
        check_tolerance("growth distance epsilon", self.epsilon)?;

        if self.max_iterations == 0 {
            return Err(QueryError::NoIterationsAllowed);
        }

        self.gjk.validate()
    }
}
