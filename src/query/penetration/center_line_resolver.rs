use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::query::penetration::PenetrationResolver;
use crate::shape::OrientedBox;
use crate::utils::Interval;

/// Approximate penetration resolution along the line joining the two box centers.
///
/// Both boxes are projected on the unit direction going from the center of the second box to
/// the center of the first box, and the length of the overlap of both projections gives the
/// penetration depth. This is not the minimum translation vector: the correction is always
/// directed along the center line, even when a shorter displacement along another axis
/// would separate the boxes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CenterLineResolver;

impl CenterLineResolver {
    /// The unit direction from the center of `obb2` to the center of `obb1`.
    ///
    /// Returns `None` if both centers coincide.
    #[inline]
    pub fn direction(obb1: &OrientedBox, obb2: &OrientedBox) -> Option<Vector<Real>> {
        (obb1.center - obb2.center).try_normalize(DEFAULT_EPSILON)
    }

    /// Penetration depth of both boxes along their center line.
    ///
    /// Returns `0.0` if the projections are disjoint or the centers coincide.
    pub fn depth(obb1: &OrientedBox, obb2: &OrientedBox) -> Real {
        Self::direction(obb1, obb2)
            .map(|dir| Self::depth_along(obb1, obb2, &dir))
            .unwrap_or(0.0)
    }

    fn depth_along(obb1: &OrientedBox, obb2: &OrientedBox, dir: &Vector<Real>) -> Real {
        let proj1 = Interval::project_points(&obb1.corners(), dir);
        let proj2 = Interval::project_points(&obb2.corners(), dir);
        proj1.overlap_length(proj2)
    }
}

impl PenetrationResolver for CenterLineResolver {
    fn distance_vector(&self, obb1: &OrientedBox, obb2: &OrientedBox) -> Vector<Real> {
        match Self::direction(obb1, obb2) {
            Some(dir) => dir * Self::depth_along(obb1, obb2, &dir),
            None => {
                log::trace!("coincident box centers, no center line to resolve along");
                Vector::zeros()
            }
        }
    }
}
