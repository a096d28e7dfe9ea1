use crate::math::{Isometry, Point, Real};
use crate::motion::InterpolatedRigidMotion;
use crate::query::details::conservative_advancement_support_map_support_map;
use crate::query::error::check_bounding_radius;
use crate::query::{QueryError, ToiOptions};
use crate::shape::ConvexShape;

/// The status of a time-of-impact computation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ToiStatus {
    /// The shapes came closer than the contact epsilon.
    Impact,
    /// The shapes were proven not to come closer than the contact epsilon
    /// within the time horizon.
    Separated,
    /// The iteration budget ran out before reaching a conclusion.
    ///
    /// This is reported as "no impact" but is inconclusive.
    ExceededMaxIterations,
}

/// The result of a time-of-impact computation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TimeOfImpact {
    /// Did the shapes come into contact?
    pub impact: bool,
    /// The time of impact if `self.impact` is `true`, otherwise the last time reached.
    pub toi: Real,
    /// The closest point of the first shape at `self.toi`, in world space.
    pub witness_a: Point<Real>,
    /// The closest point of the second shape at `self.toi`, in world space.
    pub witness_b: Point<Real>,
    /// The number of advancement steps, each running one closest-points query.
    pub iterations: usize,
    /// The status of the computation.
    pub status: ToiStatus,
}

impl TimeOfImpact {
    /// Swaps every data of this TOI result such that the role of both shapes are inverted.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            witness_a: self.witness_b,
            witness_b: self.witness_a,
            ..self
        }
    }
}

/// Computes the first time at which two shapes moving between a start and an end pose touch.
///
/// Each shape moves over the normalized time window `[0, 1]`: its translation is
/// linearly interpolated and its orientation rotates at constant angular velocity
/// along the shortest arc. The bounding radii must bound the distance between
/// the origin of each shape and any point of its boundary (see
/// [`ConvexShape::bounding_radius`]).
///
/// Returns an error if the options, shapes, or radii are malformed.
pub fn time_of_impact(
    pos1_start: &Isometry<Real>,
    pos1_end: &Isometry<Real>,
    g1: &ConvexShape,
    radius1: Real,
    pos2_start: &Isometry<Real>,
    pos2_end: &Isometry<Real>,
    g2: &ConvexShape,
    radius2: Real,
    options: &ToiOptions,
) -> Result<TimeOfImpact, QueryError> {
    options.validate()?;
    g1.validate()?;
    g2.validate()?;
    check_bounding_radius(radius1)?;
    check_bounding_radius(radius2)?;

    let motion1 = InterpolatedRigidMotion::new(*pos1_start, *pos1_end).to_constant_velocity();
    let motion2 = InterpolatedRigidMotion::new(*pos2_start, *pos2_end).to_constant_velocity();

    Ok(conservative_advancement_support_map_support_map(
        &motion1, g1, radius1, &motion2, g2, radius2, 1.0, options,
    ))
}
