//! Position correction and contact normals for overlapping boxes.
//!
//! Two situations are handled:
//!
//! - **Box-box**: a [`PenetrationResolver`] computes the displacement that separates two
//!   overlapping boxes. The default [`CenterLineResolver`] resolves along the line joining
//!   both centers.
//! - **Box-wall**: a [`WallContact`] gives the closest point of a wall to the center of a body
//!   and the normal along which the body is pushed away from the wall.

pub use self::center_line_resolver::CenterLineResolver;
pub use self::wall_contact::WallContact;

use crate::math::{Real, Vector};
use crate::shape::OrientedBox;

mod center_line_resolver;
mod wall_contact;

/// Computes the displacement separating two overlapping boxes.
pub trait PenetrationResolver {
    /// The displacement by which `obb1` must move relative to `obb2` for both boxes to stop
    /// overlapping.
    ///
    /// The result is zero if both boxes do not overlap or if no separation direction can be
    /// determined.
    fn distance_vector(&self, obb1: &OrientedBox, obb2: &OrientedBox) -> Vector<Real>;
}
