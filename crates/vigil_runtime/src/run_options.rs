//! Run options for the headless runtime
//!
//! Simulation tuning lives in `vigil.toml` (see `SimulationConfig`); these
//! options only control how long the run is and what it spawns.

use std::path::PathBuf;

/// How a headless run is driven
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Number of ticks to simulate
    pub ticks: u32,
    /// Fixed timestep in seconds
    pub dt: f32,
    /// Enemies spawned at startup
    pub enemies: usize,
    /// Obstacle file overriding the configured one
    pub obstacles: Option<PathBuf>,
    /// Write the final obstacle list here
    pub save_obstacles: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            ticks: 600,
            dt: 1.0 / 60.0,
            enemies: 3,
            obstacles: None,
            save_obstacles: None,
        }
    }
}

impl RunOptions {
    /// Build from environment variables, then command line arguments
    pub fn load() -> Self {
        let mut options = Self::default();

        if let Some(ticks) = env_number("VIGIL_TICKS") {
            options.ticks = ticks;
        }
        if let Some(enemies) = env_number("VIGIL_ENEMIES") {
            options.enemies = enemies;
        }

        let args: Vec<String> = std::env::args().skip(1).collect();
        options.apply_args(&args);
        options
    }

    /// Apply `--flag value` pairs; unknown or malformed flags are logged and skipped
    pub fn apply_args(&mut self, args: &[String]) {
        let mut iter = args.iter();
        while let Some(flag) = iter.next() {
            let Some(value) = iter.next() else {
                log::warn!("Missing value for {}", flag);
                break;
            };
            match flag.as_str() {
                "--ticks" => parse_into(flag, value, &mut self.ticks),
                "--dt" => parse_into(flag, value, &mut self.dt),
                "--enemies" => parse_into(flag, value, &mut self.enemies),
                "--obstacles" => self.obstacles = Some(PathBuf::from(value)),
                "--save-obstacles" => self.save_obstacles = Some(PathBuf::from(value)),
                _ => log::warn!("Unknown argument {}", flag),
            }
        }
    }

    pub fn print_summary(&self) {
        log::info!("Run Options:");
        log::info!("  Ticks: {} at dt={:.4}s", self.ticks, self.dt);
        log::info!("  Enemies: {}", self.enemies);
        if let Some(path) = &self.obstacles {
            log::info!("  Obstacles: {}", path.display());
        }
    }
}

fn env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    let value = std::env::var(name).ok()?;
    match value.parse() {
        Ok(number) => Some(number),
        Err(_) => {
            log::warn!("Ignoring {}={}", name, value);
            None
        }
    }
}

fn parse_into<T: std::str::FromStr>(flag: &str, value: &str, target: &mut T) {
    match value.parse() {
        Ok(parsed) => *target = parsed,
        Err(_) => log::warn!("Invalid value for {}: {}", flag, value),
    }
}
