use crate::math::{Point, Real};
use crate::motion::{ConstantVelocityRigidMotion, RigidMotion};
use crate::query::details::closest_points_support_map_support_map_with_params;
use crate::query::error::{check_bounding_radius, check_tolerance};
use crate::query::gjk::{GjkStatus, Simplex};
use crate::query::{QueryError, TimeOfImpact, ToiOptions, ToiStatus};
use crate::shape::{ConvexShape, SupportMap};

/// Computes the first time at which two shapes moving at constant velocities touch.
///
/// The search is restricted to the time interval `[0, max_time]`. See
/// [`time_of_impact`](crate::query::time_of_impact()) for the meaning of the
/// bounding radii.
///
/// Returns an error if the options, shapes, radii, or time horizon are malformed.
pub fn conservative_advancement(
    motion1: &ConstantVelocityRigidMotion,
    g1: &ConvexShape,
    radius1: Real,
    motion2: &ConstantVelocityRigidMotion,
    g2: &ConvexShape,
    radius2: Real,
    max_time: Real,
    options: &ToiOptions,
) -> Result<TimeOfImpact, QueryError> {
    options.validate()?;
    g1.validate()?;
    g2.validate()?;
    check_bounding_radius(radius1)?;
    check_bounding_radius(radius2)?;
    check_tolerance("time horizon", max_time)?;

    Ok(conservative_advancement_support_map_support_map(
        motion1, g1, radius1, motion2, g2, radius2, max_time, options,
    ))
}

/// Time of impact between two support-mapped shapes moving at constant velocities.
///
/// Each step computes the distance `d` between the shapes at the current time
/// `t`, then advances `t` by `d / rate` where `rate` bounds the speed at which
/// any two points of the shapes can approach each other. Since the distance
/// cannot shrink faster than `rate`, no contact can be missed.
///
/// The arguments are not validated.
pub fn conservative_advancement_support_map_support_map<G1: ?Sized, G2: ?Sized>(
    motion1: &ConstantVelocityRigidMotion,
    g1: &G1,
    radius1: Real,
    motion2: &ConstantVelocityRigidMotion,
    g2: &G2,
    radius2: Real,
    max_time: Real,
    options: &ToiOptions,
) -> TimeOfImpact
where
    G1: SupportMap,
    G2: SupportMap,
{
    let rate = (motion1.linvel - motion2.linvel).norm()
        + radius1 * motion1.angvel.norm()
        + radius2 * motion2.angvel.norm();

    let mut simplex = Simplex::new();
    let mut result = TimeOfImpact {
        impact: false,
        toi: 0.0,
        witness_a: Point::origin(),
        witness_b: Point::origin(),
        iterations: 0,
        status: ToiStatus::Separated,
    };

    loop {
        result.iterations += 1;

        let pos1 = motion1.position_at_time(result.toi);
        let pos2 = motion2.position_at_time(result.toi);
        let res = closest_points_support_map_support_map_with_params(
            &pos1,
            g1,
            &pos2,
            g2,
            &options.gjk,
            &mut simplex,
            None,
        );

        result.witness_a = res.witness_a;
        result.witness_b = res.witness_b;

        log::trace!(
            "Conservative advancement step {}: t = {}, distance = {}.",
            result.iterations,
            result.toi,
            res.distance
        );

        if res.status == GjkStatus::Intersection || res.distance < options.epsilon {
            result.impact = true;
            result.status = ToiStatus::Impact;
            break;
        }

        if rate <= 0.0 || result.toi >= max_time {
            result.status = ToiStatus::Separated;
            break;
        }

        if result.iterations >= options.max_iterations {
            log::debug!(
                "Conservative advancement stopped at t = {} after {} steps without conclusion.",
                result.toi,
                result.iterations
            );
            result.status = ToiStatus::ExceededMaxIterations;
            break;
        }

        result.toi = (result.toi + res.distance / rate).min(max_time);
    }

    result
}
