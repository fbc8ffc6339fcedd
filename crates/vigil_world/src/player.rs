//! The player

use crate::bullet::{Bullet, BulletKind};
use crate::config::{BulletConfig, PlayerConfig};
use crate::entity::Entity;
use crate::world::World;
use serde::{Deserialize, Serialize};
use vigil_ai::SteeringBehavior;
use vigil_math::Vec2;
use vigil_physics::{resolve_circles, PhysicsConfig};

/// Host input for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Cursor position in world coordinates
    pub cursor: Vec2,
    /// Fire button went down this frame (press edge, not held)
    pub fire: bool,
}

impl FrameInput {
    /// Cursor only, no button press
    pub fn aim(cursor: Vec2) -> Self {
        Self {
            cursor,
            fire: false,
        }
    }

    /// Cursor plus a fire press
    pub fn fire_at(cursor: Vec2) -> Self {
        Self { cursor, fire: true }
    }
}

/// Cursor-following, bullet-firing player
#[derive(Debug, Clone)]
pub struct Player {
    pub entity: Entity,
    steering: SteeringBehavior,
    bullet_speed: f32,
    muzzle_offset: f32,
}

impl Player {
    pub fn new(config: &PlayerConfig, physics: &PhysicsConfig) -> Self {
        Self {
            entity: Entity::new(config.stats())
                .at(config.spawn)
                .with_angular_speed(physics.angular_speed),
            steering: config.steering,
            bullet_speed: config.bullet_speed,
            muzzle_offset: config.muzzle_offset,
        }
    }

    /// Place the player at `position`
    pub fn at(mut self, position: Vec2) -> Self {
        self.entity.body.position = position;
        self
    }

    /// Advance one tick
    ///
    /// Fires first (on the press edge), then steers toward the cursor,
    /// integrates and pushes out of obstacles.
    pub fn update(
        &mut self,
        dt: f32,
        input: &FrameInput,
        world: &mut World,
        bullet: &BulletConfig,
        physics: &PhysicsConfig,
    ) {
        if input.fire {
            world.spawn_bullet(self.fire(input.cursor, bullet));
        }

        let speed = self.entity.speed();
        let radius = self.entity.radius();
        let body = &mut self.entity.body;
        body.acceleration = self
            .steering
            .calculate(input.cursor, body.position, body.velocity, speed);
        body.integrate(dt);
        physics.limit_speed(body);
        resolve_circles(&mut body.position, radius, &world.obstacles);
    }

    /// Bullet leaving the muzzle toward `target`
    ///
    /// Spawned ahead of the player along its facing, clear of its collider.
    pub fn fire(&self, target: Vec2, config: &BulletConfig) -> Bullet {
        let body = &self.entity.body;
        let offset = self.entity.radius() + config.radius + self.muzzle_offset;
        let position = body.position + body.direction * offset;
        let velocity = (target - position).normalize() * self.bullet_speed;
        Bullet::fire(BulletKind::Player, config, position, velocity)
    }
}
