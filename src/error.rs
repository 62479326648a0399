//! Error types for the Othello engine

use thiserror::Error;

use crate::board::Player;

/// Errors reported at the engine boundary.
///
/// Input errors are detected before any search starts. A search never
/// returns a partially applied move or a partial score.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("board must be 8x8, got {rows} rows (first bad row has {cols} cells)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("invalid cell value {value} at ({row}, {col}), expected 0, 1 or 2")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("invalid side to move {0}, expected 0 or 1")]
    InvalidPlayer(u8),

    #[error("invalid time budget {0}s, expected a finite non-negative number")]
    InvalidTimeBudget(f64),

    #[error("no legal move available for {player:?}")]
    NoLegalMove { player: Player },
}

/// Convenience Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
