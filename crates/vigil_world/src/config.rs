//! Simulation configuration
//!
//! Every section has defaults, so a config file only needs the values it
//! changes.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variable: `VIGIL_CONFIG=/path/to/config.toml`
//! 2. Config file in the working directory: `vigil.toml`
//! 3. Built-in defaults
//!
//! # Example Config File
//!
//! ```toml
//! seed = 7
//! obstacle_file = "obstacles.txt"
//!
//! [player]
//! speed = 400.0
//! steering = { type = "arrive", slow_radius = 100.0, arrive_radius = 25.0 }
//!
//! [enemy]
//! proximity = 80.0
//! modes = { neutral = 2.0, offensive = 6.0, defensive = 8.0 }
//!
//! [physics]
//! damping = 0.9
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use vigil_ai::{ModeDurations, SteeringBehavior};
use vigil_math::Vec2;
use vigil_physics::{PhysicsConfig, Probe, Probes};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "VIGIL_CONFIG";

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "vigil.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Fixed properties of an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityStats {
    pub max_health: f32,
    pub speed: f32,
    pub radius: f32,
}

impl EntityStats {
    pub const fn new(max_health: f32, speed: f32, radius: f32) -> Self {
        Self {
            max_health,
            speed,
            radius,
        }
    }
}

/// Player settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_health: f32,
    pub speed: f32,
    pub radius: f32,
    /// Where the player starts
    pub spawn: Vec2,
    /// How the player follows the cursor
    pub steering: SteeringBehavior,
    /// Muzzle speed of player bullets
    pub bullet_speed: f32,
    /// Extra gap between the player's edge and a new bullet
    pub muzzle_offset: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            speed: 500.0,
            radius: 25.0,
            spawn: Vec2::new(640.0, 360.0),
            steering: SteeringBehavior::Seek,
            bullet_speed: 500.0,
            muzzle_offset: 10.0,
        }
    }
}

impl PlayerConfig {
    pub fn stats(&self) -> EntityStats {
        EntityStats::new(self.max_health, self.speed, self.radius)
    }
}

/// Enemy settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub max_health: f32,
    pub speed: f32,
    pub radius: f32,
    /// Distance at which an offensive enemy backs off
    pub proximity: f32,
    /// Line-of-sight range used by tactics
    pub view_distance: f32,
    /// Seconds between shots
    pub shoot_cooldown: f32,
    /// Health fraction below which the enemy retreats
    pub low_health: f32,
    /// Dwell time per combat mode
    pub modes: ModeDurations,
    /// Avoidance sensors, checked in order
    pub probes: Probes,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            speed: 1000.0,
            radius: 25.0,
            proximity: 50.0,
            view_distance: 1000.0,
            shoot_cooldown: 1.0,
            low_health: 0.25,
            modes: ModeDurations::default(),
            probes: vec![
                Probe::new(30.0, 100.0),
                Probe::new(15.0, 250.0),
                Probe::new(-15.0, 250.0),
                Probe::new(-30.0, 100.0),
            ],
        }
    }
}

impl EnemyConfig {
    pub fn stats(&self) -> EntityStats {
        EntityStats::new(self.max_health, self.speed, self.radius)
    }
}

/// Bullet settings shared by both sides
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    pub max_health: f32,
    pub speed: f32,
    pub radius: f32,
    /// Health removed from an entity on hit
    pub damage: f32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            max_health: 10.0,
            speed: 250.0,
            radius: 5.0,
            damage: 10.0,
        }
    }
}

impl BulletConfig {
    pub fn stats(&self) -> EntityStats {
        EntityStats::new(self.max_health, self.speed, self.radius)
    }
}

/// Playable area, anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl WorldBounds {
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x <= self.width && point.y <= self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// RNG seed; equal seeds replay identically
    pub seed: u64,
    /// Obstacle file to load at startup
    pub obstacle_file: Option<PathBuf>,
    /// Patrol and cover points
    pub waypoints: Vec<Vec2>,
    pub bounds: WorldBounds,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub bullet: BulletConfig,
    pub physics: PhysicsConfig,
    /// File this config was read from
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl SimulationConfig {
    /// Load configuration from the first available source
    ///
    /// Never fails: unreadable files are logged and skipped.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.is_empty() {
                match Self::load_from_file(&path) {
                    Ok(config) => {
                        log::info!("Loaded config from {} ({})", path, CONFIG_ENV);
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring config {}: {}", path, e),
                }
            }
        }

        if Path::new(CONFIG_FILE).exists() {
            match Self::load_from_file(CONFIG_FILE) {
                Ok(config) => {
                    log::info!("Loaded config from {}", CONFIG_FILE);
                    return config;
                }
                Err(e) => log::warn!("Ignoring config {}: {}", CONFIG_FILE, e),
            }
        }

        log::info!("Using built-in configuration");
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject entity stats no entity can have
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, stats) in [
            ("player", self.player.stats()),
            ("enemy", self.enemy.stats()),
            ("bullet", self.bullet.stats()),
        ] {
            if stats.radius.is_nan() || stats.radius <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{}.radius must be positive, got {}",
                    name, stats.radius
                )));
            }
            if stats.max_health.is_nan() || stats.max_health < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{}.max_health must not be negative, got {}",
                    name, stats.max_health
                )));
            }
        }
        Ok(())
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the waypoint list
    pub fn with_waypoints(mut self, waypoints: Vec<Vec2>) -> Self {
        self.waypoints = waypoints;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.player.stats(), EntityStats::new(100.0, 500.0, 25.0));
        assert_eq!(config.enemy.stats(), EntityStats::new(100.0, 1000.0, 25.0));
        assert_eq!(config.bullet.stats(), EntityStats::new(10.0, 250.0, 5.0));
        assert_eq!(config.enemy.probes.len(), 4);
        assert_eq!(config.enemy.modes.defensive, 8.0);
        assert_eq!(config.physics.damping, 0.95);
        assert_eq!(config.bounds.width, 1280.0);
    }

    #[test]
    fn test_partial_toml() {
        let config = SimulationConfig::from_toml(
            r#"
            seed = 7
            waypoints = [{ x = 10.0, y = 20.0 }]

            [player]
            speed = 400.0
            steering = { type = "arrive", slow_radius = 80.0, arrive_radius = 10.0 }

            [enemy.modes]
            neutral = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.waypoints, vec![Vec2::new(10.0, 20.0)]);
        assert_eq!(config.player.speed, 400.0);
        assert_eq!(config.player.radius, 25.0);
        assert_eq!(
            config.player.steering,
            SteeringBehavior::Arrive {
                slow_radius: 80.0,
                arrive_radius: 10.0
            }
        );
        assert_eq!(config.enemy.modes.neutral, 2.0);
        assert_eq!(config.enemy.modes.offensive, 6.0);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            SimulationConfig::from_toml("seed = \"seven\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_non_positive_radius_is_rejected() {
        assert!(matches!(
            SimulationConfig::from_toml("[enemy]\nradius = 0.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SimulationConfig::from_toml("[bullet]\nradius = -2.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            SimulationConfig::load_from_file("/nonexistent/vigil.toml"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_load_from_file_records_path() {
        let path = std::env::temp_dir().join(format!("vigil_config_{}.toml", std::process::id()));
        std::fs::write(&path, "seed = 3\n[bounds]\nwidth = 640.0\n").unwrap();

        let config = SimulationConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.seed, 3);
        assert_eq!(config.bounds.width, 640.0);
        assert_eq!(config.bounds.height, 720.0);
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_bounds() {
        let bounds = WorldBounds::default();
        assert!(bounds.contains(Vec2::new(0.0, 720.0)));
        assert!(!bounds.contains(Vec2::new(-1.0, 10.0)));
        assert_eq!(bounds.center(), Vec2::new(640.0, 360.0));
    }
}
