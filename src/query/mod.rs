//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general functions provided by this module are:
//!
//! * [`are_colliding()`] to determine if two oriented boxes intersect.
//! * [`PenetrationResolver::distance_vector()`] to compute the displacement separating two
//!   overlapping boxes, e.g., with the [`CenterLineResolver`].
//! * [`WallContact::compute()`] to compute the contact between a body and a wall.
//!
//! The [`sat`] module exposes the individual steps of the separating axis test.

pub use self::penetration::{CenterLineResolver, PenetrationResolver, WallContact};
pub use self::point::PointProjection;

use crate::shape::OrientedBox;

mod intersection_test;
pub mod penetration;
pub mod point;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
}

/// Tests whether two oriented boxes intersect.
///
/// This runs the separating axis test on the 15 candidate axes of the two boxes. Touching
/// boxes are considered intersecting. The result does not depend on the order of the
/// arguments.
#[inline]
pub fn are_colliding(obb1: &OrientedBox, obb2: &OrientedBox) -> bool {
    intersection_test::intersection_test_oriented_box_oriented_box(obb1, obb2)
}
