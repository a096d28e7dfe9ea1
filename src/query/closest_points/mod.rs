//! Implementation details of the `closest_points` function.

pub use self::closest_points::QueryResult;
pub use self::closest_points_shape_shape::closest_points;
pub use self::closest_points_support_map_support_map::{
    closest_points_support_map_support_map, closest_points_support_map_support_map_with_params,
};

mod closest_points;
mod closest_points_shape_shape;
mod closest_points_support_map_support_map;
