use crate::dynamics::{BodyKind, RigidBody};

/// An unordered pair of distinct body indices, stored in increasing order.
///
/// `CollisionPair::new(3, 1)` and `CollisionPair::new(1, 3)` are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CollisionPair {
    first: usize,
    second: usize,
}

/// How the two bodies of a pair interact.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PairKind {
    /// Two dynamic bodies.
    BodyBody,
    /// One dynamic body and one wall.
    BodyWall,
    /// Two walls. Such pairs are never tested nor resolved.
    WallWall,
}

impl PairKind {
    /// Classifies a pair from the kinds of its bodies.
    pub fn classify(kind1: BodyKind, kind2: BodyKind) -> Self {
        match (kind1, kind2) {
            (BodyKind::Dynamic, BodyKind::Dynamic) => PairKind::BodyBody,
            (BodyKind::Wall, BodyKind::Wall) => PairKind::WallWall,
            _ => PairKind::BodyWall,
        }
    }
}

impl CollisionPair {
    /// Sorts two indices into a new pair.
    ///
    /// Returns `None` if both indices are equal: a body never collides with itself.
    pub fn new(index1: usize, index2: usize) -> Option<Self> {
        match index1.cmp(&index2) {
            core::cmp::Ordering::Less => Some(CollisionPair {
                first: index1,
                second: index2,
            }),
            core::cmp::Ordering::Greater => Some(CollisionPair {
                first: index2,
                second: index1,
            }),
            core::cmp::Ordering::Equal => None,
        }
    }

    /// The smallest index of this pair.
    #[inline]
    pub fn first(&self) -> usize {
        self.first
    }

    /// The largest index of this pair.
    #[inline]
    pub fn second(&self) -> usize {
        self.second
    }

    /// Both indices, in increasing order.
    #[inline]
    pub fn indices(&self) -> (usize, usize) {
        (self.first, self.second)
    }

    /// Classifies this pair from the kinds of the indexed bodies.
    ///
    /// # Panics
    /// Panics if an index is out of bounds of `bodies`.
    pub fn kind(&self, bodies: &[RigidBody]) -> PairKind {
        PairKind::classify(bodies[self.first].kind(), bodies[self.second].kind())
    }

    /// Mutable references to both indexed bodies, in increasing index order.
    ///
    /// # Panics
    /// Panics if an index is out of bounds of `bodies`.
    pub fn bodies_mut<'a>(
        &self,
        bodies: &'a mut [RigidBody],
    ) -> (&'a mut RigidBody, &'a mut RigidBody) {
        let (head, tail) = bodies.split_at_mut(self.second);
        (&mut head[self.first], &mut tail[0])
    }
}
