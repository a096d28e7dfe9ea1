use crate::math::{Isometry, Point, Real};
use crate::query::details::closest_points_support_map_support_map_with_params;
use crate::query::gjk::Simplex;
use crate::query::{GrowthOptions, QueryError, QueryResult};
use crate::shape::{ConvexShape, ScaledShape, SupportMap};

/// The result of a growth-distance computation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GrowthDistance {
    /// The uniform scale applied to both shapes at which they touch.
    ///
    /// Smaller than `1.0` if the shapes overlap, greater if they are separated.
    pub scale: Real,
    /// The contact point on the first scaled shape, in world space.
    pub witness_a: Point<Real>,
    /// The contact point on the second scaled shape, in world space.
    pub witness_b: Point<Real>,
    /// The number of closest-points queries run.
    pub iterations: usize,
    /// `false` if the iteration budget ran out before the scaled shapes touched.
    pub converged: bool,
}

/// How the scaled shapes relate to each other at one sampled scale.
enum Probe {
    Separated,
    Touching,
    Overlapping,
}

fn classify(res: &QueryResult, epsilon: Real) -> Probe {
    if res.is_intersecting() {
        Probe::Overlapping
    } else if res.distance <= epsilon {
        Probe::Touching
    } else {
        Probe::Separated
    }
}

/// Computes the uniform scale at which two convex shapes touch.
///
/// Both shapes are scaled by the same factor about their own local origin,
/// which must lie inside of each shape. Returns an error if the options or
/// the shapes are malformed.
///
/// # Example
///
/// ```
/// use convex3d::math::Isometry;
/// use convex3d::query::{self, GrowthOptions};
/// use convex3d::shape::{ConvexShape, Sphere};
///
/// let sphere = ConvexShape::from(Sphere::new(1.0));
/// let pos_a = Isometry::identity();
/// let pos_b = Isometry::translation(3.0, 0.0, 0.0);
///
/// let res = query::growth_distance(&pos_a, &sphere, &pos_b, &sphere, &GrowthOptions::default())
///     .unwrap();
/// assert!(res.converged);
/// assert!((res.scale - 1.5).abs() < 1.0e-3);
/// ```
pub fn growth_distance(
    pos1: &Isometry<Real>,
    g1: &ConvexShape,
    pos2: &Isometry<Real>,
    g2: &ConvexShape,
    options: &GrowthOptions,
) -> Result<GrowthDistance, QueryError> {
    options.validate()?;
    g1.validate()?;
    g2.validate()?;

    Ok(growth_distance_support_map_support_map(
        pos1, g1, pos2, g2, options,
    ))
}

/// Growth distance between two support-mapped shapes.
///
/// The scale is first bracketed by doubling it from `1.0`, then refined by
/// bisection until the scaled shapes are closer than `options.epsilon`
/// without overlapping. The arguments are not validated.
pub fn growth_distance_support_map_support_map<G1: ?Sized, G2: ?Sized>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
    options: &GrowthOptions,
) -> GrowthDistance
where
    G1: SupportMap,
    G2: SupportMap,
{
    let mut simplex = Simplex::new();
    let mut closest_at = |scale: Real| {
        closest_points_support_map_support_map_with_params(
            pos1,
            &ScaledShape::new(g1, scale),
            pos2,
            &ScaledShape::new(g2, scale),
            &options.gjk,
            &mut simplex,
            None,
        )
    };

    // At scale zero both shapes are reduced to their origins.
    let res = closest_at(0.0);
    let mut result = GrowthDistance {
        scale: 0.0,
        witness_a: res.witness_a,
        witness_b: res.witness_b,
        iterations: 1,
        converged: false,
    };

    if !matches!(classify(&res, options.epsilon), Probe::Separated) {
        result.converged = true;
        return result;
    }

    let mut lower = 0.0;
    let mut upper = None;
    let mut scale = 1.0;

    while result.iterations < options.max_iterations {
        let res = closest_at(scale);
        result.iterations += 1;
        result.scale = scale;
        result.witness_a = res.witness_a;
        result.witness_b = res.witness_b;

        match classify(&res, options.epsilon) {
            Probe::Touching => {
                result.converged = true;
                return result;
            }
            Probe::Separated => lower = scale,
            Probe::Overlapping => upper = Some(scale),
        }

        scale = match upper {
            Some(upper) => (lower + upper) * 0.5,
            None => scale * 2.0,
        };
    }

    log::debug!(
        "Growth distance did not converge after {} iterations (last scale: {}).",
        result.iterations,
        result.scale
    );

    result
}
