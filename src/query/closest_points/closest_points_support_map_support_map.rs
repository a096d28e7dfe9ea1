use crate::math::{Isometry, Real, Vector};
use crate::query::gjk::{self, Simplex, SimplexVertex};
use crate::query::{GjkOptions, QueryResult};
use crate::shape::SupportMap;

/// Closest points between support-mapped shapes (`Cuboid`, `ConvexHull`, etc.)
///
/// The shapes and options are not validated.
pub fn closest_points_support_map_support_map<G1: ?Sized, G2: ?Sized>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
    options: &GjkOptions,
) -> QueryResult
where
    G1: SupportMap,
    G2: SupportMap,
{
    closest_points_support_map_support_map_with_params(
        pos1,
        g1,
        pos2,
        g2,
        options,
        &mut Simplex::new(),
        None,
    )
}

/// Closest points between support-mapped shapes (`Cuboid`, `ConvexHull`, etc.)
///
/// This allows a more fine grained control other the underlying GJK algorithm.
/// The `simplex` is cleared before use. If `init_dir` is `None`, the first
/// search direction goes from the origin of the first shape toward the origin
/// of the second one (or along `x` if they coincide).
pub fn closest_points_support_map_support_map_with_params<G1: ?Sized, G2: ?Sized>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
    options: &GjkOptions,
    simplex: &mut Simplex,
    init_dir: Option<Vector<Real>>,
) -> QueryResult
where
    G1: SupportMap,
    G2: SupportMap,
{
    let dir = match init_dir {
        None => pos2.translation.vector - pos1.translation.vector,
        Some(dir) => dir,
    };

    let dir = if dir.norm_squared() > 0.0 {
        dir
    } else {
        Vector::x()
    };

    simplex.clear();
    let _ = simplex.add_point(SimplexVertex::from_shapes(pos1, g1, pos2, g2, &dir));

    gjk::closest_points(pos1, g1, pos2, g2, options, simplex)
}
