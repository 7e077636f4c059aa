//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! their projections do not overlap. For two oriented boxes, it is sufficient to test 15
//! candidate axes:
//!
//! 1. the 3 local axes (face normals) of the first box,
//! 2. the 3 local axes of the second box,
//! 3. the 9 cross products of an axis of the first box with an axis of the second box
//!    (edge-edge directions).
//!
//! Each box is projected on a candidate axis by projecting its 8 corners and keeping the
//! extreme values. If any axis shows disjoint projections, the boxes are separated.
//!
//! When two axes are parallel their cross product is the zero vector. Projecting on it maps
//! every corner to `0.0`, so such a degenerate axis always reports an overlap and never
//! provides separating evidence.

pub use self::sat_oriented_box_oriented_box::*;

mod sat_oriented_box_oriented_box;
