//! Evaluation module for Othello positions
//!
//! This module provides the static scoring used at search leaves.
//! The evaluation considers:
//! - Disk-square weights and coin parity
//! - Corner occupancy and tiles next to open corners
//! - Frontier exposure and mobility

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, evaluate_breakdown, evaluate_for, EvalBreakdown};
pub use weights::{ratio_score, EvalWeights, SQUARE_WEIGHTS};
