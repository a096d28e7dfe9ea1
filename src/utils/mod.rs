//! Various unsorted geometrical and logical operators.

pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::wops::{inf_norm, min_positive_component, WSign};

mod point_cloud_support_point;
mod wops;
