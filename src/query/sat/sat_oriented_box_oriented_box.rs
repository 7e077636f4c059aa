use crate::math::{Point, Real, Vector, DIM};
use crate::shape::OrientedBox;
use crate::utils::Interval;
use arrayvec::ArrayVec;

/// The number of candidate separating axes between two oriented boxes.
pub const NUM_OBB_CANDIDATE_AXES: usize = DIM + DIM + DIM * DIM;

/// A candidate axis that separates two oriented boxes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeparatingAxis {
    /// The index of the axis in the list returned by
    /// [`oriented_box_oriented_box_candidate_axes`].
    ///
    /// Indices `0..3` are the axes of the first box, `3..6` the axes of the second box, and
    /// `6 + 3 * i + j` is the cross product of the `i`-th axis of the first box with the
    /// `j`-th axis of the second box.
    pub index: usize,
    /// The separating axis itself. It is not normalized.
    pub axis: Vector<Real>,
}

/// The 15 candidate separating axes between two oriented boxes.
///
/// The first 3 are the axes of `obb1`, then come the 3 axes of `obb2`, then the 9 cross
/// products `obb1.axis(i).cross(&obb2.axis(j))` with `i` varying slowest. Cross products of
/// parallel axes are zero and are kept as-is.
pub fn oriented_box_oriented_box_candidate_axes(
    obb1: &OrientedBox,
    obb2: &OrientedBox,
) -> ArrayVec<Vector<Real>, NUM_OBB_CANDIDATE_AXES> {
    let axes1 = obb1.axes();
    let axes2 = obb2.axes();
    let mut result = ArrayVec::new();

    result.extend(axes1.iter().map(|a| a.into_inner()));
    result.extend(axes2.iter().map(|a| a.into_inner()));

    for a1 in &axes1 {
        for a2 in &axes2 {
            result.push(a1.cross(a2));
        }
    }

    result
}

/// Tests if the projections of two sets of box corners overlap on the given axis.
///
/// The axis does not need to be normalized.
#[inline]
pub fn oriented_box_oriented_box_axis_overlap(
    corners1: &[Point<Real>; 8],
    corners2: &[Point<Real>; 8],
    axis: &Vector<Real>,
) -> bool {
    let proj1 = Interval::project_points(corners1, axis);
    let proj2 = Interval::project_points(corners2, axis);
    proj1.overlaps_by_midpoint(proj2)
}

/// Finds the first candidate axis separating the two oriented boxes.
///
/// Returns `None` if the projections of both boxes overlap on all 15 candidate axes, i.e., if
/// the boxes intersect. Touching boxes are considered intersecting.
pub fn oriented_box_oriented_box_find_separating_axis(
    obb1: &OrientedBox,
    obb2: &OrientedBox,
) -> Option<SeparatingAxis> {
    let corners1 = obb1.corners();
    let corners2 = obb2.corners();

    oriented_box_oriented_box_candidate_axes(obb1, obb2)
        .into_iter()
        .enumerate()
        .find(|(_, axis)| !oriented_box_oriented_box_axis_overlap(&corners1, &corners2, axis))
        .map(|(index, axis)| SeparatingAxis { index, axis })
}
