use crate::math::{Point, Real};
use crate::query::gjk::GjkStatus;

use core::mem;

/// The result of a closest-points query between two shapes.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct QueryResult {
    /// The distance between the two shapes.
    ///
    /// Only meaningful as a separating distance if `self.status` is not
    /// [`GjkStatus::Intersection`], in which case it is zero.
    pub distance: Real,
    /// The point of the first shape closest to the second shape, in world space.
    pub witness_a: Point<Real>,
    /// The point of the second shape closest to the first shape, in world space.
    pub witness_b: Point<Real>,
    /// The number of GJK iterations run.
    pub iterations: usize,
    /// The terminal state of the GJK iteration.
    pub status: GjkStatus,
}

impl QueryResult {
    /// Do the shapes touch or overlap?
    pub fn is_intersecting(&self) -> bool {
        self.status.is_contact()
    }

    /// Swaps the roles of the two shapes.
    pub fn flip(&mut self) {
        mem::swap(&mut self.witness_a, &mut self.witness_b);
    }

    /// The result of the same query with the two shapes swapped.
    #[must_use]
    pub fn flipped(&self) -> Self {
        let mut res = *self;
        res.flip();
        res
    }
}
