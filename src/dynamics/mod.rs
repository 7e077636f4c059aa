//! Rigid-bodies, impulse-based collision response and momentum integration.

pub use self::integrator::{integrate, IntegrationParameters};
pub use self::response::{
    resolve_collision, resolve_collision_with, resolve_wall_collision, CollisionResponse,
    ResolutionError, ResponseParameters,
};
pub use self::rigid_body::{BodyKind, InvalidBody, RigidBody};

mod integrator;
mod response;
mod rigid_body;
