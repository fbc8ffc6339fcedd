//! # vigil_world - Simulation World
//!
//! Ties the physics and AI crates together into a playable simulation:
//! - **Entities**: player, enemies and bullets built by composition around a
//!   [`Rigidbody`](vigil_physics::Rigidbody)
//! - **Tactics**: the conditions and actions enemy decision trees run on
//! - **World**: obstacles, waypoints and live bullets
//! - **Persistence**: plain-text obstacle files
//! - **Simulation**: the owner of everything, advanced one tick at a time
//!
//! ## Quick Start
//!
//! ```ignore
//! use vigil_world::prelude::*;
//!
//! let mut sim = Simulation::new(SimulationConfig::load());
//! sim.world_mut().add_obstacle(Circle::new(Vec2::new(640.0, 360.0), 40.0));
//! sim.spawn_enemy(Vec2::new(200.0, 200.0))?;
//!
//! let input = FrameInput::aim(Vec2::new(800.0, 400.0));
//! let report = sim.step(1.0 / 60.0, &input)?;
//! ```

pub mod bullet;
pub mod config;
pub mod enemy;
pub mod entity;
pub mod player;
pub mod save;
pub mod simulation;
pub mod tactics;
pub mod world;

pub use bullet::{Bullet, BulletKind};
pub use config::{
    BulletConfig, ConfigError, EnemyConfig, EntityStats, PlayerConfig, SimulationConfig,
    WorldBounds,
};
pub use enemy::Enemy;
pub use entity::Entity;
pub use player::{FrameInput, Player};
pub use save::{
    load_obstacles, load_obstacles_from_path, save_obstacles, save_obstacles_to_path, SaveError,
};
pub use simulation::{Simulation, StepReport};
pub use tactics::{EnemyAction, EnemyCondition, TacticContext, TacticTree};
pub use world::World;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::bullet::{Bullet, BulletKind};
    pub use crate::config::SimulationConfig;
    pub use crate::enemy::Enemy;
    pub use crate::entity::Entity;
    pub use crate::player::{FrameInput, Player};
    pub use crate::simulation::{Simulation, StepReport};
    pub use crate::world::World;
    pub use vigil_ai::CombatMode;
    pub use vigil_physics::{Circle, Vec2};
}
