use core::fmt;
use num::FromPrimitive;
use num_derive::FromPrimitive;

/// The state of the GJK iteration.
///
/// Every state except [`GjkStatus::Iterating`] is terminal. The terminal state
/// of a query tells how much its distance and witness points can be trusted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum GjkStatus {
    /// The iteration is still running.
    ///
    /// Never reported by a finished query.
    Iterating = 0,
    /// The distance dropped below the absolute tolerance: the shapes touch or overlap.
    AbsoluteConvergence,
    /// The distance stopped decreasing by more than the relative tolerance.
    RelativeConvergence,
    /// The closest point (or the witness points) stopped moving.
    ///
    /// The distance is usable but may be imprecise.
    Stagnation,
    /// The simplex encloses the origin: the shapes overlap.
    ///
    /// Neither the distance nor the witness points are separating data.
    Intersection,
    /// The new support point moved away from the origin, which only happens
    /// because of rounding errors.
    NonDescendDirection,
    /// The new support point could not improve the closest point.
    SimplexExpansionFailed,
    /// The iteration limit was reached before any other test passed.
    ///
    /// The distance and witness points are a best-effort answer.
    ExceededMaxIterationsLimit,
}

impl GjkStatus {
    /// A human-readable description of this status, for diagnostics.
    pub fn message(self) -> &'static str {
        match self {
            GjkStatus::Iterating => "Unexpected termination while iterating",
            GjkStatus::AbsoluteConvergence => "Absolute convergence test passed",
            GjkStatus::RelativeConvergence => "Relative convergence test passed",
            GjkStatus::Stagnation => "Stagnation test passed",
            GjkStatus::Intersection => "Intersection was found",
            GjkStatus::NonDescendDirection => "Non descent direction was encountered",
            GjkStatus::SimplexExpansionFailed => "Simplex expansion failure",
            GjkStatus::ExceededMaxIterationsLimit => "Maximum iteration limit was exceeded",
        }
    }

    /// Does this status mean the shapes touch or overlap?
    pub fn is_contact(self) -> bool {
        matches!(
            self,
            GjkStatus::AbsoluteConvergence | GjkStatus::Intersection
        )
    }

    /// The integer code of this status.
    pub fn code(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for GjkStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The human-readable message of a status given by its integer code.
///
/// Unknown codes yield `"unrecognised error"`.
pub fn status_message(code: u32) -> &'static str {
    GjkStatus::from_u32(code).map_or("unrecognised error", GjkStatus::message)
}
