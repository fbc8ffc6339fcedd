//! AI-controlled enemies

use crate::config::{BulletConfig, EnemyConfig};
use crate::entity::Entity;
use crate::tactics::{defensive_tree, offensive_tree, TacticContext, TacticTree};
use crate::world::World;
use rand::Rng;
use vigil_ai::{avoid, seek, CombatMode, ModeMachine, Result};
use vigil_math::Vec2;
use vigil_physics::{resolve_circles, HasBody, PhysicsConfig, Probes};

/// An enemy agent
///
/// Mode transitions are handled here; everything tactical is delegated to
/// the decision tree of the current mode.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub entity: Entity,
    modes: ModeMachine,
    offensive: TacticTree,
    defensive: TacticTree,
    probes: Probes,
    patrol_clockwise: bool,
    waypoint: Option<usize>,
}

impl Enemy {
    /// Create an enemy with the default tactic trees
    pub fn new(config: &EnemyConfig, physics: &PhysicsConfig, position: Vec2) -> Result<Self> {
        Ok(Self {
            entity: Entity::new(config.stats())
                .at(position)
                .with_angular_speed(physics.angular_speed),
            modes: ModeMachine::new(config.modes).with_low_health(config.low_health),
            offensive: offensive_tree(config)?,
            defensive: defensive_tree(config)?,
            probes: config.probes.clone(),
            patrol_clockwise: true,
            waypoint: None,
        })
    }

    /// Replace both tactic trees
    pub fn with_tactics(mut self, offensive: TacticTree, defensive: TacticTree) -> Self {
        self.offensive = offensive;
        self.defensive = defensive;
        self
    }

    pub fn mode(&self) -> CombatMode {
        self.modes.current()
    }

    pub fn modes(&self) -> &ModeMachine {
        &self.modes
    }

    /// Force a mode change, as if its timer had expired
    pub fn change_mode(&mut self, mode: CombatMode) {
        self.modes.change(mode);
    }

    pub fn tactics(&self, mode: CombatMode) -> Option<&TacticTree> {
        match mode {
            CombatMode::Offensive => Some(&self.offensive),
            CombatMode::Defensive => Some(&self.defensive),
            CombatMode::Neutral => None,
        }
    }

    pub fn patrol_clockwise(&self) -> bool {
        self.patrol_clockwise
    }

    /// Override the patrol direction chosen on entering NEUTRAL
    pub fn set_patrol_clockwise(&mut self, clockwise: bool) {
        self.patrol_clockwise = clockwise;
    }

    /// Waypoint currently patrolled toward
    pub fn patrol_target(&self) -> Option<usize> {
        self.waypoint
    }

    /// Advance one tick
    ///
    /// Mode update, then the current mode's tactics (or patrol when neutral),
    /// then avoidance and physics. Returns the mode entered this tick, if any.
    pub fn update(
        &mut self,
        dt: f32,
        player: &Entity,
        world: &mut World,
        bullet: &BulletConfig,
        physics: &PhysicsConfig,
        rng: &mut impl Rng,
    ) -> Result<Option<CombatMode>> {
        let entered = self
            .modes
            .update(dt, self.entity.health_percent(), rng);
        if entered == Some(CombatMode::Neutral) {
            self.patrol_clockwise = rng.gen_bool(0.5);
            self.waypoint = world.nearest_waypoint(self.entity.body.position);
        }

        let tree = match self.modes.current() {
            CombatMode::Neutral => None,
            CombatMode::Offensive => Some(&mut self.offensive),
            CombatMode::Defensive => Some(&mut self.defensive),
        };
        if let Some(tree) = tree {
            let mut ctx = TacticContext {
                enemy: &mut self.entity,
                player,
                world: &mut *world,
                bullet,
                dt,
            };
            tree.traverse(&mut ctx)?;
        } else {
            self.patrol(world);
        }

        let avoidance = avoid(&self.entity.body, dt, &world.obstacles, &self.probes);
        self.entity.add_acceleration(avoidance);

        let radius = self.entity.radius();
        let body = &mut self.entity.body;
        body.integrate(dt);
        physics.limit_speed(body);
        resolve_circles(&mut body.position, radius, &world.obstacles);
        body.acceleration = Vec2::ZERO;
        body.damp(physics.damping);

        Ok(entered)
    }

    /// Walk the waypoint list
    ///
    /// Starts at the nearest waypoint and, once within `radius` of the
    /// current one, moves to the next (clockwise) or previous one.
    fn patrol(&mut self, world: &World) {
        let count = world.waypoints.len();
        let position = self.entity.body.position;
        let current = self
            .waypoint
            .filter(|&i| i < count)
            .or_else(|| world.nearest_waypoint(position));
        let Some(mut index) = current else {
            self.waypoint = None;
            return;
        };

        if (world.waypoints[index] - position).length() <= self.entity.radius() {
            index = if self.patrol_clockwise {
                (index + 1) % count
            } else {
                (index + count - 1) % count
            };
        }
        self.waypoint = Some(index);

        let body = &self.entity.body;
        let acceleration = seek(
            world.waypoints[index],
            body.position,
            body.velocity,
            self.entity.speed(),
        );
        self.entity.add_acceleration(acceleration);
    }
}
