//! Integration tests for vigil_physics line-of-sight and resolution

use vigil_physics::prelude::*;

#[test]
fn inserting_an_occluder_flips_visibility() {
    let viewer = Vec2::new(0.0, 0.0);
    let target = Vec2::new(200.0, 100.0);
    let mut obstacles = vec![
        Circle::new(Vec2::new(-50.0, 0.0), 10.0),
        Circle::new(Vec2::new(400.0, 200.0), 30.0),
    ];

    assert!(is_visible(viewer, 500.0, target, 25.0, &obstacles));

    // Halfway between viewer and target, nearer than the target
    obstacles.push(Circle::new(target * 0.5, 15.0));
    assert!(!is_visible(viewer, 500.0, target, 25.0, &obstacles));
}

#[test]
fn visibility_is_not_reciprocal_for_different_radii() {
    // A large target is reached by a short ray; the small viewer is not
    let small = Vec2::new(0.0, 0.0);
    let large = Vec2::new(100.0, 0.0);

    assert!(is_visible(small, 60.0, large, 50.0, &[]));
    assert!(!is_visible(large, 60.0, small, 5.0, &[]));
}

#[test]
fn repeated_resolution_settles_between_obstacles() {
    let obstacles = vec![
        Circle::new(Vec2::new(-12.0, 0.0), 10.0),
        Circle::new(Vec2::new(12.0, 0.0), 10.0),
    ];
    let mut position = Vec2::new(0.0, 1.0);

    for _ in 0..50 {
        resolve_circles(&mut position, 5.0, &obstacles);
    }

    for obstacle in &obstacles {
        let gap = (position - obstacle.position).length() - (obstacle.radius + 5.0);
        assert!(gap > -1e-3, "still overlapping by {}", -gap);
    }
}
