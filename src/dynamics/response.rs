use crate::dynamics::{BodyKind, RigidBody};
use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::query::{CenterLineResolver, PenetrationResolver, WallContact};

/// Parameters of the impulse-based collision response.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ResponseParameters {
    /// The coefficient of restitution.
    ///
    /// `0.0` makes colliding bodies stop along the contact normal, `1.0` makes them bounce
    /// without loss. It is not clamped.
    pub restitution: Real,
    /// Fraction of the wall normal a body is moved by when it collides with a wall.
    pub wall_correction_scale: Real,
}

impl Default for ResponseParameters {
    fn default() -> Self {
        Self {
            restitution: 0.4,
            wall_correction_scale: 0.5,
        }
    }
}

/// Error returned when a collision between two bodies could not be resolved.
///
/// Bodies are left untouched whenever an error is returned.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolutionError {
    /// The response computed a NaN or infinite correction or impulse.
    #[error("the collision response is not finite")]
    NonFinite,
    /// A wall collision was requested between two dynamic bodies.
    #[error("a wall collision requires one wall, found none")]
    NoWall,
    /// A wall collision was requested between two walls.
    #[error("a wall collision requires one dynamic body, found two walls")]
    BothWalls,
    /// A body-body collision was requested with a wall operand.
    #[error("a body-body collision cannot involve a wall")]
    UnexpectedWall,
}

/// The correction and impulses applied by a collision response.
///
/// All quantities are the ones applied to the first body of a body-body collision, or to the
/// dynamic body of a body-wall collision. The second body of a body-body collision received
/// their opposite.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CollisionResponse {
    /// The displacement applied to the body center.
    pub correction: Vector<Real>,
    /// The contact normal, pointing toward the body. Zero if it could not be computed.
    pub normal: Vector<Real>,
    /// The linear impulse added to the body momentum.
    pub impulse: Vector<Real>,
    /// The angular impulse added to the body angular momentum.
    pub angular_impulse: Vector<Real>,
}

impl CollisionResponse {
    /// Are all the components of this response finite?
    pub fn is_finite(&self) -> bool {
        [
            &self.correction,
            &self.normal,
            &self.impulse,
            &self.angular_impulse,
        ]
        .iter()
        .all(|v| v.iter().all(|x| x.is_finite()))
    }
}

/// Resolves a collision between two dynamic bodies, using the [`CenterLineResolver`] for
/// position correction.
///
/// See [`resolve_collision_with`].
pub fn resolve_collision(
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    params: &ResponseParameters,
) -> Result<CollisionResponse, ResolutionError> {
    resolve_collision_with(&CenterLineResolver, body1, body2, params)
}

/// Resolves a collision between two dynamic bodies.
///
/// Both bodies are first moved apart by half of the correction computed by `resolver`. The
/// contact normal is then the direction from the corrected center of `body2` to the
/// corrected center of `body1`. Approaching bodies receive opposite impulses along this
/// normal, scaled by `1 + restitution` and divided by the sum of both masses. The relative
/// angular velocity is damped the same way.
pub fn resolve_collision_with(
    resolver: &impl PenetrationResolver,
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    params: &ResponseParameters,
) -> Result<CollisionResponse, ResolutionError> {
    if body1.is_wall() || body2.is_wall() {
        return Err(ResolutionError::UnexpectedWall);
    }

    let half_correction = resolver.distance_vector(body1.obb(), body2.obb()) / 2.0;
    let center1 = body1.center() + half_correction;
    let center2 = body2.center() - half_correction;
    let normal = (center1 - center2)
        .try_normalize(DEFAULT_EPSILON)
        .unwrap_or_else(Vector::zeros);

    let factor = -(1.0 + params.restitution) / (body1.mass() + body2.mass());
    let rel_vel = body1.velocity() - body2.velocity();
    let impulse = normal * (factor * rel_vel.dot(&normal));
    let rel_angvel = body1.angular_velocity() - body2.angular_velocity();
    let angular_impulse = rel_angvel * factor;

    let response = CollisionResponse {
        correction: half_correction,
        normal,
        impulse,
        angular_impulse,
    };

    if !response.is_finite() {
        return Err(ResolutionError::NonFinite);
    }

    body1.shift(&half_correction);
    body2.shift(&-half_correction);
    body1.apply_impulse(&impulse);
    body2.apply_impulse(&-impulse);
    body1.apply_angular_impulse(&angular_impulse);
    body2.apply_angular_impulse(&-angular_impulse);

    Ok(response)
}

/// Resolves a collision between a dynamic body and a wall.
///
/// The wall is identified by its kind, so the arguments can be given in any order. The
/// dynamic body is moved along the wall normal (see [`WallContact`]) by
/// `params.wall_correction_scale`, then receives an impulse cancelling its velocity along
/// the normal and adding `restitution` times its opposite. Its angular momentum is damped
/// the same way. The wall is never modified.
pub fn resolve_wall_collision(
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    params: &ResponseParameters,
) -> Result<CollisionResponse, ResolutionError> {
    let (body, wall) = match (body1.kind(), body2.kind()) {
        (BodyKind::Dynamic, BodyKind::Wall) => (body1, &*body2),
        (BodyKind::Wall, BodyKind::Dynamic) => (body2, &*body1),
        (BodyKind::Dynamic, BodyKind::Dynamic) => return Err(ResolutionError::NoWall),
        (BodyKind::Wall, BodyKind::Wall) => return Err(ResolutionError::BothWalls),
    };

    let contact = WallContact::compute(&body.center(), wall.obb());
    let normal = contact.normal.into_inner();
    let correction = normal * params.wall_correction_scale;

    let factor = -(1.0 + params.restitution) / body.mass();
    let impulse = normal * (factor * body.velocity().dot(&normal));
    let angular_impulse = body.angular_velocity() * factor;

    let response = CollisionResponse {
        correction,
        normal,
        impulse,
        angular_impulse,
    };

    if !response.is_finite() {
        return Err(ResolutionError::NonFinite);
    }

    body.shift(&correction);
    body.apply_impulse(&impulse);
    body.apply_angular_impulse(&angular_impulse);

    Ok(response)
}
