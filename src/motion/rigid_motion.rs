use crate::math::{AngVector, Isometry, Real, Rotation, Translation, Vector};

/// A continuous rigid motion.
///
/// This is a function, assumed to be continuous, that, given a parameter `t` returns a direct isometry.
/// Mathematically speaking this is a one-parameter curve on the space of direct isometries. This curve
/// should have a continuity of at least `C0`.
pub trait RigidMotion {
    /// Get a position at the time `t`.
    fn position_at_time(&self, t: Real) -> Isometry<Real>;
}

impl RigidMotion for Isometry<Real> {
    fn position_at_time(&self, _: Real) -> Isometry<Real> {
        *self
    }
}

/// The constant linear and angular velocities moving `from` to `to` in the time `dt`.
///
/// The rotation follows the shortest arc between both orientations. The
/// angular velocity is expressed in world space.
pub fn compute_velocities(
    from: &Isometry<Real>,
    to: &Isometry<Real>,
    dt: Real,
) -> (Vector<Real>, AngVector<Real>) {
    let linvel = (to.translation.vector - from.translation.vector) / dt;
    let delta: Rotation<Real> = to.rotation * from.rotation.inverse();
    let angvel = delta.scaled_axis() / dt;

    (linvel, angvel)
}

/// The pose reached from `start` after moving for the time `tau` at constant velocities.
///
/// The rotation is applied about the origin of the moving frame, i.e., about
/// `start.translation`.
pub fn integrate_motion(
    start: &Isometry<Real>,
    tau: Real,
    linvel: &Vector<Real>,
    angvel: &AngVector<Real>,
) -> Isometry<Real> {
    let translation = Translation::from(start.translation.vector + linvel * tau);
    let rotation = Rotation::from_scaled_axis(angvel * tau) * start.rotation;
    Isometry::from_parts(translation, rotation)
}

/// Interpolation between two isometries using LERP for the translation part and a
/// constant angular velocity for the rotation.
///
/// The rotation follows the shortest arc between both orientations, which is the
/// same curve as a SLERP.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InterpolatedRigidMotion {
    /// The transformation at `t = 0.0`.
    pub start: Isometry<Real>,
    /// The transformation at `t = 1.0`.
    pub end: Isometry<Real>,
}

impl InterpolatedRigidMotion {
    /// Initialize an interpolated motion with the given start and end transformations.
    ///
    /// The `start` is the transformation at the time `t = 0.0` and `end` is the transformation at
    /// the time `t = 1.0`.
    pub fn new(start: Isometry<Real>, end: Isometry<Real>) -> Self {
        InterpolatedRigidMotion { start, end }
    }

    /// The constant-velocity motion following the same curve, parametrized by the same time.
    pub fn to_constant_velocity(&self) -> ConstantVelocityRigidMotion {
        let (linvel, angvel) = compute_velocities(&self.start, &self.end, 1.0);
        ConstantVelocityRigidMotion::new(self.start, linvel, angvel)
    }
}

impl RigidMotion for InterpolatedRigidMotion {
    fn position_at_time(&self, t: Real) -> Isometry<Real> {
        self.to_constant_velocity().position_at_time(t)
    }
}

/// A motion from a starting isometry traveling at constant translational and rotational velocity.
///
/// The rotation is applied about the origin of the moving frame.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ConstantVelocityRigidMotion {
    /// The starting isometry at `t = 0.0`.
    pub start: Isometry<Real>,
    /// The translational velocity of this motion.
    pub linvel: Vector<Real>,
    /// The angular velocity of this motion, in world space.
    pub angvel: AngVector<Real>,
}

impl ConstantVelocityRigidMotion {
    /// Initialize a motion from a starting isometry and linear and angular velocities.
    pub fn new(start: Isometry<Real>, linvel: Vector<Real>, angvel: AngVector<Real>) -> Self {
        ConstantVelocityRigidMotion {
            start,
            linvel,
            angvel,
        }
    }

    /// A motion that stays at `pos` forever.
    pub fn constant_position(pos: Isometry<Real>) -> Self {
        Self::new(pos, Vector::zeros(), AngVector::zeros())
    }
}

impl RigidMotion for ConstantVelocityRigidMotion {
    fn position_at_time(&self, t: Real) -> Isometry<Real> {
        integrate_motion(&self.start, t, &self.linvel, &self.angvel)
    }
}
