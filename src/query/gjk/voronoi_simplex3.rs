use crate::math::{Point, Real};
use crate::query::gjk::{self, voronoi_planes, SimplexVertex};
use arrayvec::ArrayVec;

/// The result of the projection of a point on a simplex.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SimplexProjection {
    /// The point of the simplex closest to the query point.
    pub point: Point<Real>,
    /// The same affine combination applied to the support points of the first shape.
    pub witness_a: Point<Real>,
    /// The same affine combination applied to the support points of the second shape.
    pub witness_b: Point<Real>,
    /// `true` if the query point lies inside of the tetrahedron.
    ///
    /// In that case `point` is the query point itself and the simplex was not
    /// reduced. For the GJK core, this means the shapes may overlap.
    pub enclosed: bool,
}

/// A feature of the simplex, identified by the indices of the vertices spanning it.
struct Feature {
    indices: ArrayVec<usize, 4>,
    weights: ArrayVec<Real, 4>,
    point: Point<Real>,
}

impl Feature {
    fn vertex(pts: &[Point<Real>], i: usize) -> Self {
        Feature {
            indices: [i].into_iter().collect(),
            weights: [1.0].into_iter().collect(),
            point: pts[i],
        }
    }

    fn sqdist(&self, p: &Point<Real>) -> Real {
        (self.point - p).norm_squared()
    }
}

/// Keeps the closest of two candidate features. Ties keep the first one.
fn keep_closest(best: Option<Feature>, candidate: Feature, p: &Point<Real>) -> Option<Feature> {
    match best {
        Some(best) if best.sqdist(p) <= candidate.sqdist(p) => Some(best),
        _ => Some(candidate),
    }
}

/// A simplex of dimension up to 3 using Voronoï regions for computing point projections.
///
/// The vertices are kept in insertion order. After a call to [`Simplex::reduce`]
/// only the vertices spanning the feature closest to the query point remain,
/// each one with its barycentric weight.
#[derive(Clone, Debug, Default)]
pub struct Simplex {
    vertices: ArrayVec<SimplexVertex, 4>,
    weights: [Real; 4],
}

impl Simplex {
    /// Creates a new empty simplex.
    pub fn new() -> Simplex {
        Simplex::default()
    }

    /// Removes every vertex of this simplex.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.weights = [0.0; 4];
    }

    /// The number of vertices of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Is this simplex empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Does this simplex already have four vertices?
    #[inline]
    pub fn is_full(&self) -> bool {
        self.vertices.is_full()
    }

    /// The vertices of this simplex, in insertion order.
    #[inline]
    pub fn vertices(&self) -> &[SimplexVertex] {
        &self.vertices
    }

    /// The i-th vertex of this simplex.
    pub fn vertex(&self, i: usize) -> &SimplexVertex {
        assert!(i < self.len(), "Index out of bounds.");
        &self.vertices[i]
    }

    /// The barycentric weight of the i-th vertex computed by the last call to [`Simplex::reduce`].
    pub fn weight(&self, i: usize) -> Real {
        assert!(i < self.len(), "Index out of bounds.");
        self.weights[i]
    }

    /// Tests if the given point is already a vertex of this simplex.
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.vertices
            .iter()
            .any(|v| (v.w - pt).norm_squared() < gjk::eps_tol())
    }

    /// Adds a vertex to this simplex.
    ///
    /// Returns `false` and leaves the simplex unchanged if the point is already
    /// one of its vertices. Panics if the simplex already has four vertices:
    /// it must be reduced before growing again.
    pub fn add_point(&mut self, pt: SimplexVertex) -> bool {
        assert!(
            !self.is_full(),
            "Cannot add a fifth vertex to a simplex; it must be reduced first."
        );

        if self.contains_point(&pt.w) {
            return false;
        }

        let i = self.vertices.len();
        self.vertices.push(pt);
        self.weights[i] = 0.0;
        true
    }

    /// The affine combination of the support points of each shape using the current weights.
    pub fn witness_points(&self) -> (Point<Real>, Point<Real>) {
        let mut a = Point::origin();
        let mut b = Point::origin();

        for (v, w) in self.vertices.iter().zip(self.weights.iter()) {
            a.coords += v.a.coords * *w;
            b.coords += v.b.coords * *w;
        }

        (a, b)
    }

    /// Projects `p` on this simplex and reduces `self` to the smallest feature containing the projection.
    ///
    /// The GJK core calls this with the origin. Panics if the simplex is empty.
    pub fn reduce(&mut self, p: &Point<Real>) -> SimplexProjection {
        assert!(!self.is_empty(), "Cannot project a point on an empty simplex.");

        let pts: ArrayVec<Point<Real>, 4> = self.vertices.iter().map(|v| v.w).collect();

        let (feature, enclosed) = match pts.len() {
            1 => (Feature::vertex(&pts, 0), false),
            2 => (reduce_edge(p, &pts, 0, 1), false),
            3 => (reduce_triangle(p, &pts, 0, 1, 2), false),
            _ => match reduce_tetrahedron(p, &pts) {
                Some(feature) => (feature, false),
                None => (enclosing_tetrahedron(p, &pts), true),
            },
        };

        let mut vertices = ArrayVec::new();
        self.weights = [0.0; 4];

        for (k, (i, w)) in feature.indices.iter().zip(feature.weights.iter()).enumerate() {
            vertices.push(self.vertices[*i]);
            self.weights[k] = *w;
        }

        self.vertices = vertices;

        let (witness_a, witness_b) = self.witness_points();

        SimplexProjection {
            point: feature.point,
            witness_a,
            witness_b,
            enclosed,
        }
    }
}

/// Projects `p` on the edge `pts[i] pts[j]`.
fn reduce_edge(p: &Point<Real>, pts: &[Point<Real>], i: usize, j: usize) -> Feature {
    let (a, b) = (&pts[i], &pts[j]);

    if voronoi_planes::outside_vertex_edge(p, a, b) {
        return Feature::vertex(pts, i);
    }

    if voronoi_planes::outside_vertex_edge(p, b, a) {
        return Feature::vertex(pts, j);
    }

    // Both vertex tests failing implies a non-degenerate edge.
    let ab = b - a;
    let t = (p - a).dot(&ab) / ab.norm_squared();

    Feature {
        indices: [i, j].into_iter().collect(),
        weights: [1.0 - t, t].into_iter().collect(),
        point: a + ab * t,
    }
}

/// Projects `p` on the triangle `pts[i] pts[j] pts[k]`, with `i < j < k`.
fn reduce_triangle(p: &Point<Real>, pts: &[Point<Real>], i: usize, j: usize, k: usize) -> Feature {
    let (a, b, c) = (&pts[i], &pts[j], &pts[k]);
    let ab = b - a;
    let ac = c - a;
    let n = ab.cross(&ac);

    // A flat triangle is covered by its edges: every edge is a candidate.
    let flat = n.norm() <= voronoi_planes::flatness_tolerance() * ab.norm() * ac.norm();

    // Each edge is listed with its vertices in insertion order and the
    // opposite vertex as reference.
    let edges = [(i, j, c), (j, k, a), (i, k, b)];
    let mut best = None;

    for (e0, e1, reference) in edges {
        if flat || voronoi_planes::outside_edge_face(p, &pts[e0], &pts[e1], reference) {
            best = keep_closest(best, reduce_edge(p, pts, e0, e1), p);
        }
    }

    if let Some(best) = best {
        return best;
    }

    // Inside every edge-face region of a triangle that is not flat: the
    // projection lies inside the triangle.
    let n2 = n.norm_squared();
    let q = p - n * ((p - a).dot(&n) / n2);
    let wa = (b - q).cross(&(c - q)).dot(&n) / n2;
    let wb = (c - q).cross(&(a - q)).dot(&n) / n2;
    let wc = 1.0 - wa - wb;

    Feature {
        indices: [i, j, k].into_iter().collect(),
        weights: [wa, wb, wc].into_iter().collect(),
        point: Point::from(a.coords * wa + b.coords * wb + c.coords * wc),
    }
}

/// Projects `p` on the faces of the tetrahedron `pts` the point lies outside of.
///
/// A planar tetrahedron is covered by its faces, so all of them are candidates
/// and it never encloses `p`. Returns `None` if `p` is outside of none of the
/// faces of a tetrahedron with a non-negligible volume.
fn reduce_tetrahedron(p: &Point<Real>, pts: &[Point<Real>]) -> Option<Feature> {
    let ab = pts[1] - pts[0];
    let ac = pts[2] - pts[0];
    let ad = pts[3] - pts[0];
    let det = ab.dot(&ac.cross(&ad));
    let flat = det.abs()
        <= voronoi_planes::flatness_tolerance() * ab.norm() * ac.norm() * ad.norm();

    let faces = [(0, 1, 2, 3), (0, 1, 3, 2), (0, 2, 3, 1), (1, 2, 3, 0)];
    let mut best = None;

    for (i, j, k, reference) in faces {
        if flat
            || voronoi_planes::outside_triangle(p, &pts[i], &pts[j], &pts[k], &pts[reference])
        {
            best = keep_closest(best, reduce_triangle(p, pts, i, j, k), p);
        }
    }

    best
}

/// The barycentric coordinates of `p` inside of the tetrahedron `pts`.
///
/// Only called when `p` is inside every face of a tetrahedron that is not
/// planar, so the volume it divides by is not negligible.
fn enclosing_tetrahedron(p: &Point<Real>, pts: &[Point<Real>]) -> Feature {
    let (a, b, c, d) = (&pts[0], &pts[1], &pts[2], &pts[3]);
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;
    let ap = p - a;

    let det = ab.dot(&ac.cross(&ad));
    let wb = ap.dot(&ac.cross(&ad)) / det;
    let wc = ab.dot(&ap.cross(&ad)) / det;
    let wd = ab.dot(&ac.cross(&ap)) / det;
    let wa = 1.0 - wb - wc - wd;

    Feature {
        indices: [0, 1, 2, 3].into_iter().collect(),
        weights: [wa, wb, wc, wd].into_iter().collect(),
        point: *p,
    }
}
