use crate::math::{Point, Real, Rotation, Vector};
use crate::shape::OrientedBox;

/// Error returned when building a rigid-body with invalid physical properties.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum InvalidBody {
    /// The mass of a dynamic body is zero or negative.
    #[error("the mass of a dynamic body must be strictly positive, got {0}")]
    NonPositiveMass(Real),
    /// The mass of a dynamic body is infinite or NaN.
    #[error("the mass of a dynamic body must be finite")]
    NonFiniteMass,
}

/// The way a rigid-body takes part in collision response.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BodyKind {
    /// A body moved by its momentum and by collision impulses.
    #[default]
    Dynamic,
    /// An immovable obstacle with infinite mass. It pushes dynamic bodies away but its own
    /// momentum is never modified.
    Wall,
}

/// A collidable actor: an oriented box with a mass, a linear and an angular momentum.
///
/// The angular momentum is a simplified quantity: it is not related to an inertia tensor and
/// is converted to an angular velocity by a mere division by the mass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RigidBody {
    obb: OrientedBox,
    mass: Real,
    /// The linear momentum of this body, in world-space.
    pub momentum: Vector<Real>,
    /// The angular momentum of this body, in world-space.
    pub angular_momentum: Vector<Real>,
    kind: BodyKind,
}

impl RigidBody {
    /// Creates a dynamic body at rest.
    ///
    /// Fails if `mass` is not a strictly positive finite number.
    pub fn new(obb: OrientedBox, mass: Real) -> Result<Self, InvalidBody> {
        if !mass.is_finite() {
            return Err(InvalidBody::NonFiniteMass);
        }

        if mass <= 0.0 {
            return Err(InvalidBody::NonPositiveMass(mass));
        }

        Ok(RigidBody {
            obb,
            mass,
            momentum: Vector::zeros(),
            angular_momentum: Vector::zeros(),
            kind: BodyKind::Dynamic,
        })
    }

    /// Creates a wall, i.e., an immovable body with infinite mass.
    pub fn new_wall(obb: OrientedBox) -> Self {
        RigidBody {
            obb,
            mass: Real::INFINITY,
            momentum: Vector::zeros(),
            angular_momentum: Vector::zeros(),
            kind: BodyKind::Wall,
        }
    }

    /// Sets the initial linear momentum of this body.
    ///
    /// Walls keep a zero momentum.
    #[must_use]
    pub fn with_momentum(mut self, momentum: Vector<Real>) -> Self {
        if self.is_dynamic() {
            self.momentum = momentum;
        }
        self
    }

    /// Sets the initial angular momentum of this body.
    ///
    /// Walls keep a zero angular momentum.
    #[must_use]
    pub fn with_angular_momentum(mut self, angular_momentum: Vector<Real>) -> Self {
        if self.is_dynamic() {
            self.angular_momentum = angular_momentum;
        }
        self
    }

    /// The oriented box of this body.
    #[inline]
    pub fn obb(&self) -> &OrientedBox {
        &self.obb
    }

    /// The world-space center of this body.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.obb.center
    }

    /// The orientation of this body.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        self.obb.rotation
    }

    /// The mass of this body. Infinite for walls.
    #[inline]
    pub fn mass(&self) -> Real {
        self.mass
    }

    /// The inverse mass of this body. Zero for walls.
    #[inline]
    pub fn inv_mass(&self) -> Real {
        match self.kind {
            BodyKind::Dynamic => 1.0 / self.mass,
            BodyKind::Wall => 0.0,
        }
    }

    /// The classification of this body.
    #[inline]
    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Is this body a wall?
    #[inline]
    pub fn is_wall(&self) -> bool {
        self.kind == BodyKind::Wall
    }

    /// Is this body dynamic?
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.kind == BodyKind::Dynamic
    }

    /// The linear velocity of this body, i.e., its momentum divided by its mass.
    #[inline]
    pub fn velocity(&self) -> Vector<Real> {
        self.momentum * self.inv_mass()
    }

    /// The angular velocity of this body, i.e., its angular momentum divided by its mass.
    #[inline]
    pub fn angular_velocity(&self) -> Vector<Real> {
        self.angular_momentum * self.inv_mass()
    }

    /// Places this body at the given position.
    ///
    /// This is the entry point for an engine synchronizing its own transforms back into the
    /// simulation. The size of the box is unchanged.
    pub fn set_position(&mut self, center: Point<Real>, rotation: Rotation<Real>) {
        self.obb.center = center;
        self.obb.rotation = rotation;
    }

    /// Moves this body instantly by the given world-space displacement, without altering its
    /// momentum.
    ///
    /// This is used for position correction. Walls don't move.
    pub fn shift(&mut self, displacement: &Vector<Real>) {
        if self.is_dynamic() {
            self.obb.shift(displacement);
        }
    }

    /// Requests a world-space translation: `translation / mass` is added to the momentum.
    ///
    /// The body actually moves when it is integrated. This has no effect on walls.
    pub fn translate(&mut self, translation: &Vector<Real>) {
        self.momentum += translation * self.inv_mass();
    }

    /// Requests a translation expressed in the local frame of this body.
    ///
    /// For example, `translate_local(&(Vector::z() * speed))` pushes the body forward,
    /// whatever its current orientation.
    pub fn translate_local(&mut self, translation: &Vector<Real>) {
        let world = self.obb.rotation * translation;
        self.translate(&world);
    }

    /// Requests a rotation: `angular_velocity / mass` is added to the angular momentum.
    ///
    /// This has no effect on walls.
    pub fn rotate(&mut self, angular_velocity: &Vector<Real>) {
        self.angular_momentum += angular_velocity * self.inv_mass();
    }

    /// Adds the given impulse to the momentum of this body. This has no effect on walls.
    pub fn apply_impulse(&mut self, impulse: &Vector<Real>) {
        if self.is_dynamic() {
            self.momentum += impulse;
        }
    }

    /// Adds the given angular impulse to the angular momentum of this body. This has no effect
    /// on walls.
    pub fn apply_angular_impulse(&mut self, angular_impulse: &Vector<Real>) {
        if self.is_dynamic() {
            self.angular_momentum += angular_impulse;
        }
    }
}
