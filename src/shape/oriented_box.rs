//! Oriented bounding box shape.

use crate::math::{
    Isometry, Point, Quaternion, Real, Rotation, UnitVector, Vector, DEFAULT_EPSILON, DIM,
};

/// A box with an arbitrary orientation.
///
/// The box is described by its world-space `center`, the `rotation` applied to its local
/// X, Y and Z axes, and its full `size` along each of these local axes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct OrientedBox {
    /// The world-space center of the box.
    pub center: Point<Real>,
    /// The orientation of the box's local axes.
    pub rotation: Rotation<Real>,
    /// The full extents of the box along each of its local axes.
    pub size: Vector<Real>,
}

// NOTE: corner ordering.
//
// Corners 0..4 lie on the bottom face (local -y) and corners 4..8 on the top face (local +y).
// Both faces list their corners in the same order: (-x, -z), (+x, -z), (+x, +z), (-x, +z).
// Corner `i + 4` is therefore directly above corner `i`.
const CORNER_SIGNS: [[Real; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

impl OrientedBox {
    /// The 12 edges of an oriented box, as pairs of indices into [`OrientedBox::corners`].
    pub const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (4, 5),
        (0, 4),
        (1, 2),
        (5, 6),
        (1, 5),
        (2, 3),
        (6, 7),
        (2, 6),
        (3, 0),
        (7, 4),
        (3, 7),
    ];

    /// Creates a new oriented box.
    ///
    /// Negative size components are replaced by their magnitude.
    #[inline]
    pub fn new(center: Point<Real>, rotation: Rotation<Real>, size: Vector<Real>) -> Self {
        OrientedBox {
            center,
            rotation,
            size: size.abs(),
        }
    }

    /// Creates a new oriented box from a raw quaternion that may not be normalized.
    ///
    /// The quaternion is normalized first. If it is too close to zero to be normalized, the
    /// identity rotation is used instead.
    pub fn from_quaternion(
        center: Point<Real>,
        rotation: Quaternion<Real>,
        size: Vector<Real>,
    ) -> Self {
        let rotation =
            Rotation::try_new(rotation, DEFAULT_EPSILON).unwrap_or_else(Rotation::identity);
        Self::new(center, rotation, size)
    }

    /// Creates an axis-aligned box.
    #[inline]
    pub fn axis_aligned(center: Point<Real>, size: Vector<Real>) -> Self {
        Self::new(center, Rotation::identity(), size)
    }

    /// The half-extents of this box along each of its local axes.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.size.abs() * 0.5
    }

    /// The position of this box, i.e., the transformation from its local frame to world-space.
    #[inline]
    pub fn position(&self) -> Isometry<Real> {
        Isometry::from_parts(self.center.coords.into(), self.rotation)
    }

    /// The 8 corners of this box expressed in its local frame.
    pub fn local_corners(&self) -> [Point<Real>; 8] {
        let he = self.half_extents();
        CORNER_SIGNS.map(|s| Point::new(s[0] * he.x, s[1] * he.y, s[2] * he.z))
    }

    /// The 8 world-space corners of this box.
    ///
    /// See [`OrientedBox::EDGES`] for the way they connect.
    pub fn corners(&self) -> [Point<Real>; 8] {
        let pos = self.position();
        self.local_corners().map(|pt| pos * pt)
    }

    /// The 12 world-space edges of this box, e.g., for drawing its outline.
    pub fn edges(&self) -> [(Point<Real>, Point<Real>); 12] {
        let corners = self.corners();
        Self::EDGES.map(|(a, b)| (corners[a], corners[b]))
    }

    /// The `i`-th world-space axis of this box.
    ///
    /// # Panics
    /// Panics if `i` is not 0, 1 or 2.
    #[inline]
    pub fn axis(&self, i: usize) -> UnitVector<Real> {
        assert!(i < DIM, "a 3D box only has three axes");
        self.rotation * Vector::ith_axis(i)
    }

    /// The three world-space axes of this box.
    #[inline]
    pub fn axes(&self) -> [UnitVector<Real>; 3] {
        [self.axis(0), self.axis(1), self.axis(2)]
    }

    /// Expresses a world-space point in the local frame of this box.
    #[inline]
    pub fn to_local_point(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from(self.rotation.inverse_transform_vector(&(*pt - self.center)))
    }

    /// Expresses a point given in the local frame of this box in world-space.
    #[inline]
    pub fn to_world_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.center + self.rotation * pt.coords
    }

    /// Moves this box by the given world-space displacement.
    #[inline]
    pub fn shift(&mut self, displacement: &Vector<Real>) {
        self.center += *displacement;
    }

    /// Returns a copy of this box moved by the given world-space displacement.
    #[inline]
    pub fn shifted(mut self, displacement: &Vector<Real>) -> Self {
        self.shift(displacement);
        self
    }
}
