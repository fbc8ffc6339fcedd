//! Grid pathfinding demo

use vigil_ai::{find_path, path_cost, AiError, Cell, Heuristic, TileMap};

/// 0 air, 1 grass, 2 water, 3 mud, 4 mountain
const DEMO_MAP: [[u8; 10]; 10] = [
    [0, 0, 0, 1, 1, 1, 0, 0, 0, 0],
    [0, 1, 0, 1, 4, 1, 0, 2, 2, 0],
    [0, 1, 0, 0, 4, 0, 0, 2, 2, 0],
    [0, 0, 0, 0, 4, 0, 0, 0, 0, 0],
    [3, 3, 3, 0, 4, 0, 1, 1, 1, 0],
    [0, 0, 3, 0, 4, 0, 0, 0, 1, 0],
    [0, 0, 3, 0, 4, 4, 4, 0, 0, 0],
    [0, 2, 2, 0, 0, 0, 4, 0, 3, 3],
    [0, 2, 2, 0, 1, 0, 4, 0, 0, 0],
    [0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
];

/// Build the demo map
pub fn demo_map() -> Result<TileMap, AiError> {
    TileMap::from_codes(&DEMO_MAP)
}

/// Route across the demo map with both heuristics and log the result
pub fn run_demo() -> Result<(), AiError> {
    let map = demo_map()?;
    let start = Cell::new(0, 0);
    let goal = Cell::new(9, 9);

    for heuristic in [Heuristic::Manhattan, Heuristic::Euclidean] {
        match find_path(start, goal, &map, heuristic) {
            Ok(path) => {
                let route: Vec<String> = path.iter().map(Cell::to_string).collect();
                log::info!(
                    "{:?} path {} -> {}: {} cells, cost {:.2}",
                    heuristic,
                    start,
                    goal,
                    path.len(),
                    path_cost(&path, &map, heuristic)
                );
                log::debug!("  {}", route.join(" "));
            }
            Err(AiError::Unreachable { .. }) => {
                log::info!("{:?}: no path from {} to {}", heuristic, start, goal);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
