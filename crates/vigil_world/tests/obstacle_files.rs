//! Obstacle files on disk

use std::path::PathBuf;
use vigil_world::prelude::*;
use vigil_world::{load_obstacles_from_path, save_obstacles_to_path, SaveError};

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("vigil_{}_{}.txt", name, std::process::id()))
}

#[test]
fn test_round_trip_through_file() {
    let path = temp_file("round_trip");
    let obstacles = vec![
        Circle::new(Vec2::new(100.0, 200.0), 30.0),
        Circle::new(Vec2::new(640.5, 360.25), 12.75),
        Circle::new(Vec2::new(-1.0, 0.0), 0.0),
    ];

    save_obstacles_to_path(&path, &obstacles).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(!text.ends_with('\n'));
    assert_eq!(text.lines().count(), 3);

    let loaded = load_obstacles_from_path(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, obstacles);
}

#[test]
fn test_single_obstacle_without_newline() {
    let path = temp_file("single");
    let obstacles = vec![Circle::new(Vec2::new(7.5, 8.5), 9.0)];

    save_obstacles_to_path(&path, &obstacles).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "7.5 8.5 9");

    let loaded = load_obstacles_from_path(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, obstacles);
}

#[test]
fn test_simulation_loads_configured_file() {
    let path = temp_file("config");
    std::fs::write(&path, "300 300 40\n900 400 55\n").unwrap();

    let mut config = SimulationConfig::default();
    config.obstacle_file = Some(path.clone());
    let mut sim = Simulation::new(config);
    let added = sim.load_obstacle_file();
    std::fs::remove_file(&path).ok();

    assert_eq!(added.unwrap(), 2);
    assert_eq!(sim.world().obstacles[1], Circle::new(Vec2::new(900.0, 400.0), 55.0));
}

#[test]
fn test_malformed_file_loads_nothing() {
    let path = temp_file("malformed");
    std::fs::write(&path, "1 2 3\n4 five 6").unwrap();

    let result = load_obstacles_from_path(&path);
    std::fs::remove_file(&path).ok();
    assert!(matches!(result, Err(SaveError::Parse { line: 2, .. })));
}
