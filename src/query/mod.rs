//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::closest_points()`] to compute the distance and the closest points between two shapes.
//! * [`query::time_of_impact()`] to determine when two shapes moving between a start and an end pose hit for the first time.
//! * [`query::conservative_advancement()`] to determine when two shapes moving at constant velocities hit for the first time.
//! * [`query::growth_distance()`] to determine the uniform scaling at which two shapes touch.
//!
//! All of them validate their arguments and return a [`QueryError`] if they are malformed.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones described above.
//! They accept any shape implementing [`SupportMap`](crate::shape::SupportMap) and do not validate their
//! arguments. The specific functions have the form `[operation]_[shape1]_[shape2]()` where:
//!
//! * `[operation]` can be `closest_points`, `conservative_advancement` or `growth_distance`.
//! * `[shape1]` and `[shape2]` identify a trait implemented by supported shapes, e.g., `support_map`.
//!
//! [`query::closest_points()`]: crate::query::closest_points()
//! [`query::time_of_impact()`]: crate::query::time_of_impact()
//! [`query::conservative_advancement()`]: crate::query::conservative_advancement()
//! [`query::growth_distance()`]: crate::query::growth_distance()

pub use self::closest_points::{closest_points, QueryResult};
pub use self::error::QueryError;
pub use self::gjk::{status_message, GjkStatus};
pub use self::growth_distance::{growth_distance, GrowthDistance};
pub use self::query_options::{GjkOptions, GrowthOptions, ToiOptions};
pub use self::time_of_impact::{conservative_advancement, time_of_impact, TimeOfImpact, ToiStatus};

mod closest_points;
mod error;
pub mod gjk;
mod growth_distance;
mod query_options;
mod time_of_impact;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::closest_points::{
        closest_points_support_map_support_map, closest_points_support_map_support_map_with_params,
    };
    pub use super::growth_distance::growth_distance_support_map_support_map;
    pub use super::time_of_impact::conservative_advancement_support_map_support_map;
}
