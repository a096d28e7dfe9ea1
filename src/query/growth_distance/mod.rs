//! Implementation details of the `growth_distance` function.

pub use self::growth_distance::{
    growth_distance, growth_distance_support_map_support_map, GrowthDistance,
};

mod growth_distance;
