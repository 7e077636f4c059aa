use crate::dynamics::RigidBody;
use crate::math::{Real, Rotation};

/// Parameters of the momentum integration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct IntegrationParameters {
    /// The timestep length (default: `0.02` seconds).
    pub dt: Real,
    /// Factor the momentum is multiplied by after each step (default: `0.99`).
    pub linear_damping: Real,
    /// Factor the angular momentum is multiplied by after each step (default: `0.99`).
    pub angular_damping: Real,
}

impl Default for IntegrationParameters {
    fn default() -> Self {
        Self {
            dt: 0.02,
            linear_damping: 0.99,
            angular_damping: 0.99,
        }
    }
}

/// Moves a body according to its momentum and damps it.
///
/// The center moves by `momentum * dt`. The rotation is composed, in the local frame of the
/// body, with the rotation given by the Euler angles `angular_momentum * dt` (in radians,
/// roll around `x`, pitch around `y`, yaw around `z`, composed as `Rz * Ry * Rx`). Angular
/// momenta expressed in degrees, or meant for a Z-X-Y composition, must be converted first.
/// Both momenta are then multiplied by their damping factor. Walls are left untouched.
pub fn integrate(body: &mut RigidBody, params: &IntegrationParameters) {
    if body.is_wall() {
        return;
    }

    let delta = body.angular_momentum * params.dt;
    let center = body.center() + body.momentum * params.dt;
    let mut rotation = body.rotation() * Rotation::from_euler_angles(delta.x, delta.y, delta.z);
    rotation.renormalize_fast();

    body.set_position(center, rotation);
    body.momentum *= params.linear_damping;
    body.angular_momentum *= params.angular_damping;
}
