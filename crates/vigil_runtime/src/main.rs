//! Vigil headless runtime
//!
//! Runs the simulation without a window or input devices:
//! - Loads `vigil.toml` (or `$VIGIL_CONFIG`) and an optional obstacle file
//! - Spawns enemies and drives the player with a scripted cursor
//! - Logs combat and a summary, then runs the grid pathfinding demo
//!
//! Run with: cargo run -p vigil_runtime -- --ticks 1200 --enemies 4
//!       or: RUST_LOG=debug cargo run --bin vigil

mod pathing;
mod run_options;
mod script;

use run_options::RunOptions;
use script::CursorScript;
use vigil_math::Vec2;
use vigil_physics::Circle;
use vigil_world::{save_obstacles_to_path, Simulation, SimulationConfig};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("Run failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let options = RunOptions::load();
    options.print_summary();

    let mut config = SimulationConfig::load();
    if let Some(path) = &options.obstacles {
        config.obstacle_file = Some(path.clone());
    }

    let mut sim = Simulation::new(config);
    if sim.load_obstacle_file()? == 0 {
        populate_default_arena(&mut sim);
    }
    for position in spawn_points(&sim, options.enemies) {
        sim.spawn_enemy(position)?;
    }

    let script = CursorScript::new(sim.world().bounds);
    let mut fired = 0;
    let mut hits = 0;
    let mut transitions = 0;

    for tick in 0..options.ticks {
        let report = sim.step(options.dt, &script.input(tick))?;
        fired += report.bullets_fired;
        hits += report.hits;
        transitions += report.transitions.len();
        for (handle, mode) in &report.transitions {
            log::debug!("Enemy {} -> {} at {:.2}s", handle, mode, sim.time());
        }

        if !sim.player().entity.is_alive() {
            log::info!("Player down after {} ticks", tick + 1);
            break;
        }
        if sim.living_enemies() == 0 {
            log::info!("All enemies down after {} ticks", tick + 1);
            break;
        }
    }

    log::info!("Summary after {:.2}s ({} ticks):", sim.time(), sim.ticks());
    log::info!(
        "  Player health: {:.0}%",
        sim.player().entity.health_percent() * 100.0
    );
    log::info!("  Enemies alive: {}/{}", sim.living_enemies(), sim.enemies().len());
    for (handle, enemy) in sim.enemies().iter() {
        log::info!(
            "  Enemy {}: {} at ({:.0}, {:.0}), {:.0}% health",
            handle,
            enemy.mode(),
            enemy.entity.body.position.x,
            enemy.entity.body.position.y,
            enemy.entity.health_percent() * 100.0
        );
    }
    log::info!(
        "  Bullets fired: {}, hits: {}, mode changes: {}",
        fired,
        hits,
        transitions
    );

    if let Some(path) = &options.save_obstacles {
        save_obstacles_to_path(path, &sim.world().obstacles)?;
    }

    pathing::run_demo()?;
    Ok(())
}

/// Obstacles and waypoints used when nothing is configured
fn populate_default_arena(sim: &mut Simulation) {
    let center = sim.world().bounds.center();
    let world = sim.world_mut();

    for (offset, radius) in [
        (Vec2::new(0.0, 0.0), 60.0),
        (Vec2::new(-300.0, -150.0), 45.0),
        (Vec2::new(300.0, -150.0), 45.0),
        (Vec2::new(-300.0, 150.0), 45.0),
        (Vec2::new(300.0, 150.0), 45.0),
    ] {
        world.add_obstacle(Circle::new(center + offset, radius));
    }

    if world.waypoints.is_empty() {
        for offset in [
            Vec2::new(-450.0, -250.0),
            Vec2::new(0.0, -250.0),
            Vec2::new(450.0, -250.0),
            Vec2::new(450.0, 250.0),
            Vec2::new(0.0, 250.0),
            Vec2::new(-450.0, 250.0),
            Vec2::new(-150.0, 0.0),
            Vec2::new(150.0, 0.0),
        ] {
            world.add_waypoint(center + offset);
        }
    }
    log::info!(
        "Using default arena ({} obstacles, {} waypoints)",
        world.obstacles.len(),
        world.waypoints.len()
    );
}

/// Spread `count` spawn points around the world corners
fn spawn_points(sim: &Simulation, count: usize) -> Vec<Vec2> {
    let bounds = sim.world().bounds;
    let margin = 80.0;
    let corners = [
        Vec2::new(margin, margin),
        Vec2::new(bounds.width - margin, bounds.height - margin),
        Vec2::new(bounds.width - margin, margin),
        Vec2::new(margin, bounds.height - margin),
    ];
    (0..count)
        .map(|i| corners[i % corners.len()] + Vec2::new(0.0, 40.0 * (i / corners.len()) as f32))
        .collect()
}
