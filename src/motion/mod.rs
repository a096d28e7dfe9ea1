//! Rigid motions of the shapes given to the time-of-impact queries.

pub use self::rigid_motion::{
    compute_velocities, integrate_motion, ConstantVelocityRigidMotion, InterpolatedRigidMotion,
    RigidMotion,
};

mod rigid_motion;
