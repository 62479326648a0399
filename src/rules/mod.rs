//! Othello rules
//!
//! This module implements:
//! - Flip-run detection along the 8 directions
//! - Move legality and row-major move enumeration
//! - Move application with exact undo

pub mod flips;
pub mod state;

// Re-exports for convenient access
pub use flips::{
    count_legal_moves, flip_run_length, has_legal_move, has_tile_to_flip, is_legal_at,
    is_legal_move, legal_moves,
};
pub use state::{GameState, MoveRecord, MAX_FLIPS};
