use crate::math::{Point, Real, UnitVector, Vector, DIM};
use crate::query::PointProjection;
use crate::shape::OrientedBox;

impl OrientedBox {
    /// Projects a point given in the local frame of this box on the solid box.
    ///
    /// A point inside of the box is its own projection.
    pub fn project_local_point(&self, pt: &Point<Real>) -> PointProjection {
        let he = self.half_extents();
        let clamped = Point::from(pt.coords.zip_map(&he, |x, e| x.max(-e).min(e)));
        PointProjection::new(clamped == *pt, clamped)
    }

    /// Projects a world-space point on the solid box.
    pub fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let local = self.project_local_point(&self.to_local_point(pt));
        PointProjection::new(local.is_inside, self.to_world_point(&local.point))
    }

    /// The world-space point of this solid box closest to `pt`.
    ///
    /// The point is obtained by clamping the local coordinates of `pt` to the box extents.
    /// A point inside of the box is its own closest point.
    #[inline]
    pub fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.project_point(pt).point
    }

    /// Tests if the given world-space point is inside of this box or on its boundary.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.project_local_point(&self.to_local_point(pt)).is_inside
    }

    /// The outward world-space normal of the face of this box closest to `pt`.
    ///
    /// This is mostly meaningful for points inside of the box or on its boundary. Ties are
    /// broken in the order `+x, -x, +y, -y, +z, -z`.
    pub fn nearest_face_normal(&self, pt: &Point<Real>) -> UnitVector<Real> {
        let (i, sign) = self.local_nearest_face(&self.to_local_point(pt));
        let normal = Vector::ith_axis(i);

        if sign < 0.0 {
            self.rotation * -normal
        } else {
            self.rotation * normal
        }
    }

    /// The index of the local axis and the sign of the face closest to the local point `pt`.
    fn local_nearest_face(&self, pt: &Point<Real>) -> (usize, Real) {
        let he = self.half_extents();
        let mut best = (0, 1.0);
        let mut best_dist = Real::MAX;

        for i in 0..DIM {
            for sign in [1.0, -1.0] {
                let dist = he[i] - sign * pt[i];

                if dist < best_dist {
                    best_dist = dist;
                    best = (i, sign);
                }
            }
        }

        best
    }
}
