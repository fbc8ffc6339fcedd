//! Integration tests for grid pathfinding

use rand::{rngs::StdRng, Rng, SeedableRng};
use vigil_ai::prelude::*;

fn assert_well_formed(path: &[Cell], start: Cell, goal: Cell, map: &TileMap) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for step in path.windows(2) {
        assert!((step[0].col - step[1].col).abs() <= 1);
        assert!((step[0].row - step[1].row).abs() <= 1);
    }
    assert!(path
        .iter()
        .all(|&cell| map.get(cell).map_or(false, TileKind::is_passable)));
}

#[test]
fn open_grid_takes_diagonal_route() {
    let map = TileMap::new(10, 10, TileKind::Air);
    let start = Cell::new(0, 0);
    let goal = Cell::new(9, 9);

    for heuristic in [Heuristic::Manhattan, Heuristic::Euclidean] {
        let path = find_path(start, goal, &map, heuristic).unwrap();
        assert_eq!(path.len(), 10, "{:?}: {:?}", heuristic, path);
        assert_well_formed(&path, start, goal, &map);

        let mut cumulative = 0.0;
        for i in 1..path.len() {
            let next = path_cost(&path[..=i], &map, heuristic);
            assert!(next >= cumulative);
            cumulative = next;
        }
    }
}

#[test]
fn full_wall_reports_no_path() {
    let mut map = TileMap::new(10, 10, TileKind::Air);
    for row in 0..10 {
        map.set(Cell::new(5, row), TileKind::Mountain).unwrap();
    }

    for heuristic in [Heuristic::Manhattan, Heuristic::Euclidean] {
        match find_path(Cell::new(0, 0), Cell::new(9, 9), &map, heuristic) {
            Err(AiError::Unreachable { start, goal }) => {
                assert_eq!(start, Cell::new(0, 0));
                assert_eq!(goal, Cell::new(9, 9));
            }
            other => panic!("expected no path, got {:?}", other),
        }
    }
}

#[test]
fn wall_with_gap_is_routed_around() {
    let mut map = TileMap::new(10, 10, TileKind::Air);
    for row in 1..10 {
        map.set(Cell::new(5, row), TileKind::Mountain).unwrap();
    }

    let start = Cell::new(0, 9);
    let goal = Cell::new(9, 9);
    let path = find_path(start, goal, &map, Heuristic::Euclidean).unwrap();

    assert_well_formed(&path, start, goal, &map);
    assert!(path.contains(&Cell::new(5, 0)));
}

#[test]
fn map_from_codes_feeds_search() {
    let map = TileMap::from_codes(&[
        [0u8, 0, 0, 0, 0],
        [0, 4, 4, 4, 0],
        [0, 4, 0, 4, 0],
        [0, 4, 4, 4, 0],
        [0, 0, 0, 0, 0],
    ])
    .unwrap();

    // Enclosed centre cell
    assert!(find_path(Cell::new(0, 0), Cell::new(2, 2), &map, Heuristic::Manhattan).is_err());

    let path = find_path(Cell::new(0, 0), Cell::new(4, 4), &map, Heuristic::Manhattan).unwrap();
    assert_well_formed(&path, Cell::new(0, 0), Cell::new(4, 4), &map);
}

#[test]
fn random_maps_never_cross_mountains() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let mut map = TileMap::new(12, 12, TileKind::Air);
        for row in 0..12 {
            for col in 0..12 {
                let kind = TileKind::from_code(rng.gen_range(0..5)).unwrap_or_default();
                map.set(Cell::new(col, row), kind).unwrap();
            }
        }
        let start = Cell::new(0, 0);
        let goal = Cell::new(11, 11);
        map.set(start, TileKind::Air).unwrap();
        map.set(goal, TileKind::Air).unwrap();

        for heuristic in [Heuristic::Manhattan, Heuristic::Euclidean] {
            match find_path(start, goal, &map, heuristic) {
                Ok(path) => assert_well_formed(&path, start, goal, &map),
                Err(AiError::Unreachable { .. }) => {}
                Err(other) => panic!("unexpected error {}", other),
            }
        }
    }
}

#[test]
fn corrected_grass_diagonal_changes_route() {
    // Grass in the middle of open air. Entering it diagonally costs
    // sqrt(2) instead of sqrt(2) + 1, which makes crossing it cheaper than
    // walking around it.
    let map = TileMap::from_codes(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
    let start = Cell::new(0, 0);
    let goal = Cell::new(2, 2);

    let path = find_path(start, goal, &map, Heuristic::Euclidean).unwrap();
    assert_eq!(path, vec![start, Cell::new(1, 1), goal]);
    let cost = path_cost(&path, &map, Heuristic::Euclidean);
    assert!((cost - std::f32::consts::SQRT_2).abs() < 1e-5, "cost {}", cost);

    // The detour the uncorrected costs would prefer is dearer
    let detour = [start, Cell::new(1, 0), Cell::new(2, 1), goal];
    assert!(path_cost(&detour, &map, Heuristic::Euclidean) > cost);
}
