use crate::math::{Point, Real, Vector};

/// A closed interval `[self.0, self.1]` of the real line.
///
/// Intervals are mostly built by projecting a set of points on an axis, see
/// [`Interval::project_points`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval(pub Real, pub Real);

impl Interval {
    /// The smallest interval containing the projections of all the `points` on `axis`.
    ///
    /// The axis does not need to be normalized. A zero axis projects every point at `0.0`.
    /// If `points` is empty, the returned interval is `[Real::MAX, -Real::MAX]`.
    #[must_use]
    pub fn project_points(points: &[Point<Real>], axis: &Vector<Real>) -> Self {
        let mut result = Interval(Real::MAX, -Real::MAX);

        for pt in points {
            let proj = pt.coords.dot(axis);
            result.0 = result.0.min(proj);
            result.1 = result.1.max(proj);
        }

        result
    }

    /// The width of this interval.
    #[must_use]
    pub fn width(self) -> Real {
        self.1 - self.0
    }

    /// The average of the two interval endpoints.
    #[must_use]
    pub fn midpoint(self) -> Real {
        (self.0 + self.1) / 2.0
    }

    /// Overlap test comparing the midpoint distance with the widest of both intervals.
    ///
    /// The intervals are considered overlapping iff.
    /// `|midpoint(self) - midpoint(other)| <= max(width(self), width(other))`.
    /// Touching intervals, and a pair of degenerate intervals at the same value, overlap.
    /// Disjoint intervals also overlap unless their gap exceeds half the difference of
    /// their widths.
    #[must_use]
    pub fn overlaps_by_midpoint(self, other: Self) -> bool {
        let distance = (self.midpoint() - other.midpoint()).abs();
        let total_size = self.width().max(other.width());
        distance <= total_size
    }

    /// The length of the intersection of both intervals, or `0.0` if they are disjoint.
    #[must_use]
    pub fn overlap_length(self, other: Self) -> Real {
        (self.1.min(other.1) - self.0.max(other.0)).max(0.0)
    }
}
