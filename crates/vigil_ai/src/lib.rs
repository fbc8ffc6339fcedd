//! Vigil AI - Agent Behaviour and Navigation
//!
//! This crate provides AI behaviours and navigation for simulated agents.
//!
//! # Features
//!
//! - Steering behaviours (seek, flee, arrive, probe-based avoidance)
//! - Decision trees stored in an arena and walked once per tick
//! - Combat-mode state machine (offensive / defensive / neutral)
//! - Grid pathfinding (A*) over cost-weighted tiles
//!
//! # Example
//!
//! ```ignore
//! use vigil_ai::prelude::*;
//!
//! let map = TileMap::new(10, 10, TileKind::Air);
//! let path = find_path(Cell::new(0, 0), Cell::new(9, 9), &map, Heuristic::Manhattan)?;
//! assert_eq!(path.len(), 10);
//! ```

pub mod behavior;
pub mod error;
pub mod navigation;
pub mod state_machine;
pub mod steering;

pub mod prelude {
    pub use crate::behavior::{BehaviorContext, DecisionTree, Node, NodeId, Traversal};
    pub use crate::error::{AiError, Result};
    pub use crate::navigation::{find_path, path_cost, Cell, Heuristic, TileKind, TileMap};
    pub use crate::state_machine::{CombatMode, ModeDurations, ModeMachine};
    pub use crate::steering::{arrive, avoid, flee, seek, SteeringBehavior};
}

pub use prelude::*;
