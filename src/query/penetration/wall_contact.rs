use crate::math::{up, Point, Real, UnitVector, DEFAULT_EPSILON};
use crate::shape::OrientedBox;
use na::Unit;

/// Contact between a point (typically the center of a moving body) and a wall box.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct WallContact {
    /// The point of the (solid) wall closest to the body center, in world-space.
    pub point: Point<Real>,
    /// The contact normal, in world-space, pointing away from the wall.
    ///
    /// Its dot product with the world up direction is never negative.
    pub normal: UnitVector<Real>,
    /// `true` if the body center was on the wall boundary or inside of the wall. The normal
    /// is then the normal of the wall face closest to the body center.
    pub is_inside: bool,
}

impl WallContact {
    /// Computes the contact between the given body center and wall.
    ///
    /// The world-space direction from the closest point of the wall to the body center is
    /// normalized, then rotated by the wall rotation. For a rotated wall this is not the
    /// geometric normal of the wall surface. The result is flipped if it points downward,
    /// which assumes that walls are obstacles below or beside the bodies: it can give a wrong
    /// outward direction for the underside of a wall.
    pub fn compute(body_center: &Point<Real>, wall: &OrientedBox) -> Self {
        let local_proj = wall.project_local_point(&wall.to_local_point(body_center));
        let point = wall.to_world_point(&local_proj.point);

        let (normal, is_inside) = match Unit::try_new(*body_center - point, DEFAULT_EPSILON) {
            Some(dir) => (wall.rotation * dir, false),
            None => (wall.nearest_face_normal(body_center), true),
        };

        let normal = if normal.dot(&up()) < 0.0 {
            -normal
        } else {
            normal
        };

        WallContact {
            point,
            normal,
            is_inside,
        }
    }
}
