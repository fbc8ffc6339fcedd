//! Projectiles

use crate::config::{BulletConfig, WorldBounds};
use crate::entity::Entity;
use serde::{Deserialize, Serialize};
use vigil_math::Vec2;
use vigil_physics::{circle_circle, Circle};

/// Side a bullet was fired by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletKind {
    Player,
    Enemy,
}

/// A straight-flying projectile
///
/// Bullets are never removed while the world iterates them; they are
/// deactivated and swept out afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub entity: Entity,
    kind: BulletKind,
    active: bool,
}

impl Bullet {
    /// Fire a bullet from `position` with `velocity`
    pub fn fire(kind: BulletKind, config: &BulletConfig, position: Vec2, velocity: Vec2) -> Self {
        let mut entity = Entity::new(config.stats()).at(position);
        entity.body.velocity = velocity;
        entity.body.direction = if velocity.length_squared() > 0.0 {
            velocity.normalize()
        } else {
            Vec2::X
        };

        Self {
            entity,
            kind,
            active: true,
        }
    }

    pub fn kind(&self) -> BulletKind {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn position(&self) -> Vec2 {
        self.entity.body.position
    }

    pub fn collider(&self) -> Circle {
        self.entity.collider()
    }

    /// Move and expire on obstacles or on leaving `bounds`
    pub fn update(&mut self, dt: f32, obstacles: &[Circle], bounds: &WorldBounds) {
        if !self.active {
            return;
        }

        self.entity.body.integrate(dt);

        let collider = self.collider();
        if !bounds.contains(collider.position)
            || obstacles.iter().any(|obstacle| circle_circle(obstacle, &collider))
        {
            self.active = false;
        }
    }

    /// Whether this bullet overlaps `target`
    pub fn hits(&self, target: &Circle) -> bool {
        self.active && circle_circle(&self.collider(), target)
    }
}
