//! Error types for the AI system

use crate::behavior::NodeId;
use crate::navigation::Cell;
use thiserror::Error;

/// AI system errors
#[derive(Debug, Error)]
pub enum AiError {
    /// Node handle does not belong to the tree
    #[error("Decision tree node not found: {0}")]
    InvalidNode(NodeId),

    /// Traversal visited more nodes than the tree holds
    #[error("Decision tree traversal did not terminate after {steps} steps (cycle?)")]
    CycleDetected { steps: usize },

    /// Cell outside the tile map
    #[error("Cell {0} is outside the map")]
    OutOfBounds(Cell),

    /// Search exhausted the open set without reaching the goal
    #[error("No path from {start} to {goal}")]
    Unreachable { start: Cell, goal: Cell },

    /// Malformed tile map input
    #[error("Invalid tile map: {0}")]
    InvalidMap(String),
}

/// Result type for AI operations
pub type Result<T> = std::result::Result<T, AiError>;
