//! The simulation loop
//!
//! [`Simulation`] owns the world, the player, every enemy and the random
//! source. Hosts drive it with [`Simulation::step`], passing the frame time
//! and that frame's input; nothing in here reads a clock or polls devices.

use crate::bullet::BulletKind;
use crate::config::SimulationConfig;
use crate::enemy::Enemy;
use crate::player::{FrameInput, Player};
use crate::save::{load_obstacles_from_path, SaveError};
use crate::world::World;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vigil_ai::{CombatMode, Result};
use vigil_core::{Arena, Handle};
use vigil_math::Vec2;

/// What happened during one [`Simulation::step`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Bullets spawned this tick
    pub bullets_fired: usize,
    /// Bullets removed at the end of this tick
    pub bullets_expired: usize,
    /// Bullets that struck an entity
    pub hits: usize,
    /// Enemies whose health reached zero this tick
    pub killed: Vec<Handle<Enemy>>,
    /// Combat modes entered this tick
    pub transitions: Vec<(Handle<Enemy>, CombatMode)>,
}

/// Top-level owner of all simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    world: World,
    player: Player,
    enemies: Arena<Enemy>,
    rng: StdRng,
    time: f32,
    ticks: u64,
}

impl Simulation {
    /// Create a simulation with the configured waypoints and no obstacles
    pub fn new(config: SimulationConfig) -> Self {
        let mut world = World::new(config.bounds);
        world.waypoints = config.waypoints.clone();

        Self {
            player: Player::new(&config.player, &config.physics),
            rng: StdRng::seed_from_u64(config.seed),
            world,
            enemies: Arena::new(),
            time: 0.0,
            ticks: 0,
            config,
        }
    }

    /// Append the obstacles from the configured obstacle file, if any
    ///
    /// Returns how many obstacles were added.
    pub fn load_obstacle_file(&mut self) -> std::result::Result<usize, SaveError> {
        let Some(path) = self.config.obstacle_file.clone() else {
            return Ok(0);
        };
        let obstacles = load_obstacles_from_path(&path)?;
        let count = obstacles.len();
        self.world.obstacles.extend(obstacles);
        Ok(count)
    }

    /// Spawn an enemy with the configured stats and tactics
    pub fn spawn_enemy(&mut self, position: Vec2) -> Result<Handle<Enemy>> {
        let enemy = Enemy::new(&self.config.enemy, &self.config.physics, position)?;
        Ok(self.add_enemy(enemy))
    }

    /// Add a pre-built enemy
    pub fn add_enemy(&mut self, enemy: Enemy) -> Handle<Enemy> {
        let handle = self.enemies.insert(enemy);
        log::debug!("Spawned enemy {}", handle);
        handle
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemy(&self, handle: Handle<Enemy>) -> Option<&Enemy> {
        self.enemies.get(handle)
    }

    pub fn enemy_mut(&mut self, handle: Handle<Enemy>) -> Option<&mut Enemy> {
        self.enemies.get_mut(handle)
    }

    pub fn enemies(&self) -> &Arena<Enemy> {
        &self.enemies
    }

    /// Number of enemies with health left
    pub fn living_enemies(&self) -> usize {
        self.enemies
            .iter()
            .filter(|(_, enemy)| enemy.entity.is_alive())
            .count()
    }

    /// Simulated seconds so far
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance every entity by `dt` seconds
    ///
    /// Order: player, living enemies in spawn order, bullet movement, bullet
    /// hits, then a single sweep of inactive bullets. Dead entities are kept
    /// (enemy handles stay valid) but no longer updated.
    pub fn step(&mut self, dt: f32, input: &FrameInput) -> Result<StepReport> {
        let mut report = StepReport::default();
        let bullets_before = self.world.bullets.len();

        if self.player.entity.is_alive() {
            self.player.update(
                dt,
                input,
                &mut self.world,
                &self.config.bullet,
                &self.config.physics,
            );
        }

        for (handle, enemy) in self.enemies.iter_mut() {
            if !enemy.entity.is_alive() {
                continue;
            }
            let entered = enemy.update(
                dt,
                &self.player.entity,
                &mut self.world,
                &self.config.bullet,
                &self.config.physics,
                &mut self.rng,
            )?;
            if let Some(mode) = entered {
                report.transitions.push((handle, mode));
            }
        }
        report.bullets_fired = self.world.bullets.len() - bullets_before;

        for bullet in &mut self.world.bullets {
            bullet.update(dt, &self.world.obstacles, &self.world.bounds);
        }
        self.resolve_hits(&mut report);
        report.bullets_expired = self.world.remove_inactive_bullets();

        self.time += dt;
        self.ticks += 1;
        Ok(report)
    }

    /// Apply bullet damage; each bullet hits at most one entity
    fn resolve_hits(&mut self, report: &mut StepReport) {
        let damage = self.config.bullet.damage;

        for bullet in self.world.bullets.iter_mut().filter(|b| b.is_active()) {
            match bullet.kind() {
                BulletKind::Enemy => {
                    let player = &mut self.player.entity;
                    if player.is_alive() && bullet.hits(&player.collider()) {
                        player.apply_damage(damage);
                        bullet.deactivate();
                        report.hits += 1;
                        if !player.is_alive() {
                            log::info!("Player killed");
                        }
                    }
                }
                BulletKind::Player => {
                    let target = self.enemies.iter_mut().find(|(_, enemy)| {
                        enemy.entity.is_alive() && bullet.hits(&enemy.entity.collider())
                    });
                    if let Some((handle, enemy)) = target {
                        enemy.entity.apply_damage(damage);
                        bullet.deactivate();
                        report.hits += 1;
                        if !enemy.entity.is_alive() {
                            log::info!("Enemy {} killed", handle);
                            report.killed.push(handle);
                        }
                    }
                }
            }
        }
    }
}
