//! Point-mass rigid bodies

use serde::{Deserialize, Serialize};
use vigil_math::Vec2;

/// Kinematic state of a moving circle
///
/// Owned by exactly one entity and integrated once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rigidbody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Facing (unit length); lags the velocity by the turn rate
    pub direction: Vec2,
    /// Maximum turn rate in radians per second
    pub angular_speed: f32,
}

impl Default for Rigidbody {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            direction: Vec2::X,
            angular_speed: 0.0,
        }
    }
}

impl Rigidbody {
    /// Body at rest at `position`, facing +X
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Set the turn rate
    pub fn with_angular_speed(mut self, angular_speed: f32) -> Self {
        self.angular_speed = angular_speed;
        self
    }

    /// Advance one step
    ///
    /// `v += a*dt`, `p += v*dt + a*dt²/2`, then the facing turns toward the
    /// new velocity by at most `angular_speed * dt`.
    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt + self.acceleration * (dt * dt * 0.5);
        self.direction = self
            .direction
            .rotate_towards(self.velocity.normalize(), self.angular_speed * dt);
    }

    /// Rescale velocity down to `max_speed` if it exceeds it
    pub fn clamp_speed(&mut self, max_speed: f32) {
        self.velocity = self.velocity.clamp_length(max_speed);
    }

    /// Multiply speed by `factor`, keeping the heading
    pub fn damp(&mut self, factor: f32) {
        self.velocity *= factor;
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Capability of owning a [`Rigidbody`]
///
/// Lets steering and physics helpers work on any entity by composition.
pub trait HasBody {
    fn body(&self) -> &Rigidbody;
    fn body_mut(&mut self) -> &mut Rigidbody;

    fn position(&self) -> Vec2 {
        self.body().position
    }

    /// Accumulate acceleration for this tick
    fn add_acceleration(&mut self, acceleration: Vec2) {
        self.body_mut().acceleration += acceleration;
    }
}

impl HasBody for Rigidbody {
    fn body(&self) -> &Rigidbody {
        self
    }

    fn body_mut(&mut self) -> &mut Rigidbody {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_integrate_constant_acceleration() {
        let mut body = Rigidbody::at(Vec2::ZERO);
        body.acceleration = Vec2::new(2.0, 0.0);
        body.integrate(1.0);

        assert_eq!(body.velocity, Vec2::new(2.0, 0.0));
        // v*dt with updated v plus the half-acceleration term
        assert_relative_eq!(body.position.x, 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_turn_rate_bounds_direction() {
        let mut body = Rigidbody::at(Vec2::ZERO).with_angular_speed(1.0);
        body.velocity = Vec2::new(0.0, 10.0);
        body.integrate(0.1);

        assert_relative_eq!(Vec2::X.angle_to(body.direction), 0.1, epsilon = 1e-5);
        assert_relative_eq!(body.direction.length(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_velocity_keeps_direction() {
        let mut body = Rigidbody::at(Vec2::ZERO).with_angular_speed(100.0);
        body.integrate(0.5);
        assert_eq!(body.direction, Vec2::X);
        assert!(body.position.is_finite());
    }

    #[test]
    fn test_clamp_and_damp() {
        let mut body = Rigidbody::default();
        body.velocity = Vec2::new(0.0, 20.0);
        body.clamp_speed(10.0);
        assert_relative_eq!(body.speed(), 10.0, epsilon = 1e-5);

        body.damp(0.5);
        assert_relative_eq!(body.velocity.y, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn test_has_body_accumulates() {
        let mut body = Rigidbody::default();
        body.add_acceleration(Vec2::new(1.0, 0.0));
        body.add_acceleration(Vec2::new(0.0, 2.0));
        assert_eq!(body.acceleration, Vec2::new(1.0, 2.0));
    }
}
