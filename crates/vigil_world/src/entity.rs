//! Shared entity state

use crate::config::EntityStats;
use serde::{Deserialize, Serialize};
use vigil_math::Vec2;
use vigil_physics::{Circle, HasBody, Rigidbody};

/// Smallest collider radius an entity can have
pub const MIN_RADIUS: f32 = 0.01;

/// A rigid body with health
///
/// Player, enemies and bullets all embed one. Health always stays within
/// `0..=max_health` and the radius is never below [`MIN_RADIUS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub body: Rigidbody,
    health: f32,
    max_health: f32,
    speed: f32,
    radius: f32,
}

impl Entity {
    /// Create at full health, at rest at the origin
    pub fn new(stats: EntityStats) -> Self {
        let max_health = stats.max_health.max(0.0);
        Self {
            body: Rigidbody::default(),
            health: max_health,
            max_health,
            speed: stats.speed,
            radius: stats.radius.max(MIN_RADIUS),
        }
    }

    /// Place at `position`
    pub fn at(mut self, position: Vec2) -> Self {
        self.body.position = position;
        self
    }

    /// Set the turn rate (radians per second)
    pub fn with_angular_speed(mut self, angular_speed: f32) -> Self {
        self.body.angular_speed = angular_speed;
        self
    }

    /// Collision shape at the current position
    pub fn collider(&self) -> Circle {
        Circle::new(self.body.position, self.radius)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Maximum steering speed
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    /// Health as a fraction of maximum (0 for a zero-health template)
    pub fn health_percent(&self) -> f32 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Remove up to `amount` health; returns the health actually lost
    pub fn apply_damage(&mut self, amount: f32) -> f32 {
        let before = self.health;
        self.health = (self.health - amount.max(0.0)).max(0.0);
        before - self.health
    }

    /// Restore up to `amount` health; returns the health actually gained
    pub fn heal(&mut self, amount: f32) -> f32 {
        let before = self.health;
        self.health = (self.health + amount.max(0.0)).min(self.max_health);
        self.health - before
    }

    /// Set health directly, clamped to `0..=max_health`
    pub fn set_health(&mut self, health: f32) {
        self.health = health.clamp(0.0, self.max_health);
    }
}

impl HasBody for Entity {
    fn body(&self) -> &Rigidbody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Rigidbody {
        &mut self.body
    }
}
