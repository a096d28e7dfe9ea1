//! The Gilbert-Johnson-Keerthi distance algorithm.
//!
//! GJK works on the Minkowski difference `A - B` of two convex shapes: the
//! distance between the shapes is the distance between the origin and this
//! difference. Each iteration asks both shapes for a support point along the
//! current search direction, adds their difference to a [`Simplex`], and
//! reduces the simplex to the feature closest to the origin. The iteration
//! stops as soon as one of the tests described by [`GjkStatus`] passes.
//!
//! If the origin ends up inside of the simplex, the shapes overlap and no
//! penetration depth is computed.

use crate::math::{Isometry, Point, Real};
use crate::query::gjk::{GjkStatus, Simplex, SimplexProjection, SimplexVertex};
use crate::query::{GjkOptions, QueryResult};
use crate::shape::SupportMap;
use crate::utils;

/// The absolute tolerance used by the GJK algorithm.
///
/// A support point improving the squared distance by less than this fraction
/// of the squared distance itself is considered as not improving it at all.
pub fn eps_tol() -> Real {
    let _eps = crate::math::DEFAULT_EPSILON;
    _eps * 10.0
}

/// Computes the closest points between two shapes using the GJK algorithm.
///
/// The `simplex` must contain exactly one vertex, typically obtained with
/// [`SimplexVertex::from_shapes`]; see
/// [`closest_points_support_map_support_map_with_params`](crate::query::details::closest_points_support_map_support_map_with_params)
/// for a version choosing it automatically. The simplex is left in its
/// final, reduced, state.
///
/// The witness points of the result are expressed in world space.
pub fn closest_points<G1, G2>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
    options: &GjkOptions,
    simplex: &mut Simplex,
) -> QueryResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let _eps_tol = eps_tol();
    let abs_tol2 = options.absolute_tolerance * options.absolute_tolerance;

    let mut proj = simplex.reduce(&Point::origin());
    let mut niter = 1;
    let mut status = if proj.point.coords.norm_squared() <= abs_tol2 {
        GjkStatus::AbsoluteConvergence
    } else if niter >= options.max_iterations {
        GjkStatus::ExceededMaxIterationsLimit
    } else {
        GjkStatus::Iterating
    };

    while status == GjkStatus::Iterating {
        niter += 1;

        let v = proj.point.coords;
        let cso_point = SimplexVertex::from_shapes(pos1, g1, pos2, g2, &-v);

        // `v.v - v.w` is the gap between the current distance and its lower bound.
        let vv = v.norm_squared();
        let gap = vv - v.dot(&cso_point.w.coords);

        if gap < -_eps_tol * vv {
            status = GjkStatus::NonDescendDirection;
            break;
        }

        if gap <= _eps_tol * vv || !simplex.add_point(cso_point) {
            status = GjkStatus::SimplexExpansionFailed;
            break;
        }

        let new_proj = simplex.reduce(&Point::origin());
        status = termination_status(&proj, &new_proj, options);

        if status == GjkStatus::Iterating && niter >= options.max_iterations {
            status = GjkStatus::ExceededMaxIterationsLimit;
        }

        log::trace!(
            "GJK iteration {}: distance = {}, simplex size = {}.",
            niter,
            new_proj.point.coords.norm(),
            simplex.len()
        );

        proj = new_proj;
    }

    match status {
        GjkStatus::NonDescendDirection
        | GjkStatus::SimplexExpansionFailed
        | GjkStatus::ExceededMaxIterationsLimit => {
            log::debug!("GJK stopped after {} iterations: {}.", niter, status)
        }
        _ => {}
    }

    let distance = if status == GjkStatus::Intersection {
        0.0
    } else {
        proj.point.coords.norm()
    };

    QueryResult {
        distance,
        witness_a: proj.witness_a,
        witness_b: proj.witness_b,
        iterations: niter,
        status,
    }
}

/// Evaluates the termination tests, in order, after one iteration.
fn termination_status(
    old: &SimplexProjection,
    new: &SimplexProjection,
    options: &GjkOptions,
) -> GjkStatus {
    if new.enclosed {
        return GjkStatus::Intersection;
    }

    let dist2 = new.point.coords.norm_squared();

    if dist2 <= options.absolute_tolerance * options.absolute_tolerance {
        return GjkStatus::AbsoluteConvergence;
    }

    let old_dist = old.point.coords.norm();
    let dist = dist2.sqrt();

    if old_dist - dist <= options.relative_tolerance * old_dist {
        return GjkStatus::RelativeConvergence;
    }

    let stag_tol = options.stagnation_tolerance;
    let point_stagnates = utils::inf_norm(&(new.point - old.point)) <= stag_tol;
    let witnesses_stagnate = utils::inf_norm(&(new.witness_a - old.witness_a)) <= stag_tol
        && utils::inf_norm(&(new.witness_b - old.witness_b)) <= stag_tol;

    if point_stagnates || witnesses_stagnate {
        return GjkStatus::Stagnation;
    }

    GjkStatus::Iterating
}
