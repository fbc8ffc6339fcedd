//! Grid navigation and pathfinding
//!
//! Maps are rectangular grids of [`TileKind`]s with a static movement cost
//! per kind. [`find_path`] runs an A* search over the 8-connected grid and
//! keeps no state between calls.

use crate::error::{AiError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use vigil_math::consts::SQRT_2;

/// Grid coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Whether `other` is one of the four diagonal neighbours
    fn is_diagonal_to(self, other: Cell) -> bool {
        self.col != other.col && self.row != other.row
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Terrain type of a tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Air,
    Grass,
    Water,
    Mud,
    Mountain,
}

impl TileKind {
    /// Highest tile cost; tiles at this cost block movement
    pub const MAX_COST: f32 = 16.0;

    /// Decode a tile code (`0..=4`)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Air),
            1 => Some(Self::Grass),
            2 => Some(Self::Water),
            3 => Some(Self::Mud),
            4 => Some(Self::Mountain),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Extra cost of entering a tile of this kind
    pub fn cost(self) -> f32 {
        match self {
            Self::Air => 0.0,
            Self::Grass => 1.0,
            Self::Water => 4.0,
            Self::Mud => 8.0,
            Self::Mountain => Self::MAX_COST,
        }
    }

    pub fn is_passable(self) -> bool {
        self.cost() < Self::MAX_COST
    }
}

/// Rectangular tile grid, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMap {
    cols: usize,
    rows: usize,
    tiles: Vec<TileKind>,
}

impl TileMap {
    /// Create a map filled with one tile kind
    pub fn new(cols: usize, rows: usize, fill: TileKind) -> Self {
        Self {
            cols,
            rows,
            tiles: vec![fill; cols * rows],
        }
    }

    /// Build a map from rows of tile codes
    ///
    /// Every row must have the same length and every code must be known.
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut tiles = Vec::with_capacity(cols * rows.len());

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(AiError::InvalidMap(format!(
                    "row {} has {} tiles, expected {}",
                    r,
                    row.len(),
                    cols
                )));
            }
            for (c, &code) in row.iter().enumerate() {
                let kind = TileKind::from_code(code).ok_or_else(|| {
                    AiError::InvalidMap(format!("unknown tile code {} at ({}, {})", code, c, r))
                })?;
                tiles.push(kind);
            }
        }

        Ok(Self {
            cols,
            rows: rows.len(),
            tiles,
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && (cell.col as usize) < self.cols
            && (cell.row as usize) < self.rows
    }

    /// Row-major index of `cell`
    pub fn index(&self, cell: Cell) -> Option<usize> {
        if self.in_bounds(cell) {
            Some(cell.row as usize * self.cols + cell.col as usize)
        } else {
            None
        }
    }

    fn cell_at(&self, index: usize) -> Cell {
        Cell::new((index % self.cols) as i32, (index / self.cols) as i32)
    }

    pub fn get(&self, cell: Cell) -> Option<TileKind> {
        self.index(cell).map(|i| self.tiles[i])
    }

    pub fn set(&mut self, cell: Cell, kind: TileKind) -> Result<()> {
        let i = self.index(cell).ok_or(AiError::OutOfBounds(cell))?;
        self.tiles[i] = kind;
        Ok(())
    }

    /// In-bounds 8-connected neighbours of `cell`
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        const OFFSETS: [(i32, i32); 8] = [
            (-1, 0),
            (1, 0),
            (0, -1),
            (0, 1),
            (-1, -1),
            (1, -1),
            (-1, 1),
            (1, 1),
        ];
        OFFSETS
            .iter()
            .map(move |&(dc, dr)| Cell::new(cell.col + dc, cell.row + dr))
            .filter(move |&n| self.in_bounds(n))
    }
}

/// Distance metric used both as step cost and goal estimate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

impl Heuristic {
    pub fn distance(self, a: Cell, b: Cell) -> f32 {
        let dc = (a.col - b.col) as f32;
        let dr = (a.row - b.row) as f32;
        match self {
            Self::Manhattan => dc.abs() + dr.abs(),
            Self::Euclidean => (dc * dc + dr * dr).sqrt(),
        }
    }
}

/// Best-known search state of one cell
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    parent: Cell,
    g: f32,
    h: f32,
}

impl SearchNode {
    #[inline]
    fn f(&self) -> f32 {
        self.g + self.h
    }
}

/// Open-set entry
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f: f32,
    g: f32,
    index: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    // BinaryHeap is a max-heap: lowest f first, then deepest g, then lowest index
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| self.g.total_cmp(&other.g))
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Find a path from `start` to `goal`
///
/// The search is A* over the 8-connected grid. Entering a neighbour costs
/// the heuristic distance to it plus the neighbour's tile cost; under
/// [`Heuristic::Euclidean`] a diagonal step may instead cost
/// `sqrt(2) * tile cost` when that is cheaper. Mountain tiles are never
/// entered. The search ends when the goal is popped from the open set.
///
/// The returned path runs from `start` to `goal` inclusive.
pub fn find_path(start: Cell, goal: Cell, map: &TileMap, heuristic: Heuristic) -> Result<Vec<Cell>> {
    let start_index = map.index(start).ok_or(AiError::OutOfBounds(start))?;
    let goal_index = map.index(goal).ok_or(AiError::OutOfBounds(goal))?;

    let mut nodes: Vec<Option<SearchNode>> = vec![None; map.tiles.len()];
    let mut closed = vec![false; map.tiles.len()];
    let mut open = BinaryHeap::new();

    let h = heuristic.distance(start, goal);
    nodes[start_index] = Some(SearchNode {
        parent: start,
        g: 0.0,
        h,
    });
    open.push(OpenEntry {
        f: h,
        g: 0.0,
        index: start_index,
    });

    while let Some(entry) = open.pop() {
        if closed[entry.index] {
            continue;
        }
        closed[entry.index] = true;

        if entry.index == goal_index {
            return Ok(reconstruct(map, &nodes, goal));
        }

        let cell = map.cell_at(entry.index);
        let current_g = nodes[entry.index].map_or(0.0, |node| node.g);

        for neighbor in map.neighbors(cell) {
            let Some(n_index) = map.index(neighbor) else {
                continue;
            };
            let tile = map.tiles[n_index];
            if closed[n_index] || !tile.is_passable() {
                continue;
            }

            let g = current_g + step_cost(cell, neighbor, tile, heuristic);
            let candidate = SearchNode {
                parent: cell,
                g,
                h: heuristic.distance(neighbor, goal),
            };

            let improves = nodes[n_index].map_or(true, |known| candidate.f() < known.f());
            if improves {
                nodes[n_index] = Some(candidate);
                open.push(OpenEntry {
                    f: candidate.f(),
                    g,
                    index: n_index,
                });
            }
        }
    }

    log::debug!("No path from {} to {}", start, goal);
    Err(AiError::Unreachable { start, goal })
}

fn reconstruct(map: &TileMap, nodes: &[Option<SearchNode>], goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut cell = goal;

    while let Some(node) = map.index(cell).and_then(|i| nodes[i]) {
        if node.parent == cell || path.len() > nodes.len() {
            break;
        }
        cell = node.parent;
        path.push(cell);
    }

    path.reverse();
    path
}

/// Cost of moving from `from` onto the adjacent cell `to` of kind `tile`
///
/// Heuristic distance plus tile cost. A Euclidean diagonal costs
/// `sqrt(2) * tile cost` instead when that is cheaper.
fn step_cost(from: Cell, to: Cell, tile: TileKind, heuristic: Heuristic) -> f32 {
    let base = heuristic.distance(from, to) + tile.cost();
    if heuristic == Heuristic::Euclidean && from.is_diagonal_to(to) {
        base.min(SQRT_2 * tile.cost())
    } else {
        base
    }
}

/// Total cost of walking `path`, using the same step costs as [`find_path`]
pub fn path_cost(path: &[Cell], map: &TileMap, heuristic: Heuristic) -> f32 {
    path.windows(2)
        .map(|step| {
            let tile = map.get(step[1]).unwrap_or(TileKind::Mountain);
            step_cost(step[0], step[1], tile, heuristic)
        })
        .sum()
}
