//! Implementation details of the `time_of_impact` function.

pub use self::conservative_advancement::{
    conservative_advancement, conservative_advancement_support_map_support_map,
};
pub use self::time_of_impact::{time_of_impact, TimeOfImpact, ToiStatus};

mod conservative_advancement;
mod time_of_impact;
