//! The GJK algorithm for distance computation.

pub use self::gjk::{closest_points, eps_tol};
pub use self::gjk_status::{status_message, GjkStatus};
pub use self::simplex_vertex::SimplexVertex;
pub use self::voronoi_planes::{
    outside_edge_face, outside_triangle, outside_vertex_edge,
    signed_distance_to_edge_face_voronoi_plane, signed_distance_to_triangle,
    signed_distance_to_vertex_edge_voronoi_plane,
};
pub use self::voronoi_simplex3::{Simplex, SimplexProjection};

mod gjk;
mod gjk_status;
mod simplex_vertex;
mod voronoi_planes;
mod voronoi_simplex3;
