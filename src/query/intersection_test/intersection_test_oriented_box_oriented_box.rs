use crate::query::sat;
use crate::shape::OrientedBox;

/// Intersection test between oriented boxes.
///
/// Touching boxes are considered intersecting.
#[inline]
pub fn intersection_test_oriented_box_oriented_box(
    obb1: &OrientedBox,
    obb2: &OrientedBox,
) -> bool {
    let separating_axis = sat::oriented_box_oriented_box_find_separating_axis(obb1, obb2);

    if let Some(sep) = &separating_axis {
        log::trace!("boxes separated by candidate axis {}: {:?}", sep.index, sep.axis);
    }

    separating_axis.is_none()
}
