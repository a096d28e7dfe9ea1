//! Signed distances to the planes bounding the Voronoi regions of a simplex.
//!
//! Every test uses the same orientation convention: the plane is built from
//! the points defining the feature plus one reference point, and its normal
//! points away from the reference. A point is *outside* a plane when its
//! signed distance is non-negative, so points lying exactly on a plane are
//! classified as outside.
//!
//! A plane is degenerate when its normal vanishes or when the reference point
//! lies on it up to [`flatness_tolerance`]: no orientation can be trusted then,
//! and the signed distance is zero everywhere.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};

/// The relative tolerance below which a triangle is flat or a tetrahedron is planar.
///
/// This bounds the sine of the angle between the reference direction and the
/// plane it is compared against.
#[inline]
pub fn flatness_tolerance() -> Real {
    DEFAULT_EPSILON.sqrt()
}

/// The normal of a plane through `origin` oriented away from `reference`.
///
/// Returns `None` if `reference` lies on the plane, up to the flatness tolerance.
fn oriented_away_from(
    normal: Vector<Real>,
    origin: &Point<Real>,
    reference: &Point<Real>,
) -> Option<Vector<Real>> {
    let to_reference = reference - origin;
    let dot = normal.dot(&to_reference);

    if dot.abs() <= flatness_tolerance() * normal.norm() * to_reference.norm() {
        None
    } else if dot > 0.0 {
        Some(-normal)
    } else {
        Some(normal)
    }
}

#[inline]
fn signed_distance_along(p: &Point<Real>, origin: &Point<Real>, normal: &Vector<Real>) -> Real {
    let len = normal.norm();

    if len > 0.0 {
        (p - origin).dot(normal) / len
    } else {
        0.0
    }
}

/// Signed distance from `p` to the plane through `a` perpendicular to the edge `ab`.
///
/// The distance is positive on the side of `a` facing away from `b`.
pub fn signed_distance_to_vertex_edge_voronoi_plane(
    p: &Point<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
) -> Real {
    signed_distance_along(p, a, &(a - b))
}

/// Signed distance from `p` to the plane containing the edge `ab` and perpendicular
/// to the triangle `abc`.
///
/// The distance is positive on the side of the edge facing away from `c`. The
/// result does not depend on the order of `a` and `b`.
pub fn signed_distance_to_edge_face_voronoi_plane(
    p: &Point<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> Real {
    let ab = b - a;
    let face_normal = ab.cross(&(c - a));

    oriented_away_from(ab.cross(&face_normal), a, c)
        .map_or(0.0, |normal| signed_distance_along(p, a, &normal))
}

/// Signed distance from `p` to the plane of the triangle `abc`.
///
/// The distance is positive on the side of the plane facing away from `reference`.
/// It is zero everywhere if `reference` lies on the plane.
pub fn signed_distance_to_triangle(
    p: &Point<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    reference: &Point<Real>,
) -> Real {
    oriented_away_from((b - a).cross(&(c - a)), a, reference)
        .map_or(0.0, |normal| signed_distance_along(p, a, &normal))
}

/// Tests if `p` lies in the half-space of the vertex `a` bounded by its
/// vertex-edge Voronoi plane with respect to the edge `ab`.
#[inline]
pub fn outside_vertex_edge(p: &Point<Real>, a: &Point<Real>, b: &Point<Real>) -> bool {
    signed_distance_to_vertex_edge_voronoi_plane(p, a, b) >= 0.0
}

/// Tests if `p` lies outside of the edge-face Voronoi plane of the edge `ab` of
/// the triangle `abc`.
#[inline]
pub fn outside_edge_face(
    p: &Point<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> bool {
    signed_distance_to_edge_face_voronoi_plane(p, a, b, c) >= 0.0
}

/// Tests if `p` lies on the side of the plane of `abc` facing away from `reference`.
#[inline]
pub fn outside_triangle(
    p: &Point<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    reference: &Point<Real>,
) -> bool {
    signed_distance_to_triangle(p, a, b, c, reference) >= 0.0
}
