//! Weights for Othello evaluation
//!
//! Component weights are empirical tuning constants from competitive
//! Othello heuristics. The disk-square table is symmetric under the
//! board's 8 symmetries.

use serde::{Deserialize, Serialize};

use crate::board::BOARD_SIZE;

/// Static value of holding each square
pub const SQUARE_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [20, -3, 11, 8, 8, 11, -3, 20],
    [-3, -7, -4, 1, 1, -4, -7, -3],
    [11, -4, 2, 2, 2, 2, -4, 11],
    [8, 1, 2, -3, -3, 2, 1, 8],
    [8, 1, 2, -3, -3, 2, 1, 8],
    [11, -4, 2, 2, 2, 2, -4, 11],
    [-3, -7, -4, 1, 1, -4, -7, -3],
    [20, -3, 11, 8, 8, 11, -3, 20],
];

/// Each corner with its three neighbours.
pub const CORNER_NEIGHBOURS: [((u8, u8), [(u8, u8); 3]); 4] = [
    ((0, 0), [(0, 1), (1, 1), (1, 0)]),
    ((0, 7), [(0, 6), (1, 6), (1, 7)]),
    ((7, 0), [(7, 1), (6, 1), (6, 0)]),
    ((7, 7), [(6, 7), (6, 6), (7, 6)]),
];

/// Points per corner held
pub const CORNER_VALUE: f64 = 25.0;

/// Penalty per tile next to an open corner
pub const CORNER_CLOSENESS_VALUE: f64 = -12.5;

/// Multipliers applied to the six evaluation components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub parity: f64,
    pub corners: f64,
    pub corner_closeness: f64,
    pub mobility: f64,
    pub frontier: f64,
    pub disk_squares: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            parity: 10.0,
            corners: 801.724,
            corner_closeness: 382.026,
            mobility: 78.922,
            frontier: 74.396,
            disk_squares: 10.0,
        }
    }
}

/// Ratio score shared by parity, frontier and mobility.
///
/// `100 * mine / total` when `mine` leads, `-100 * theirs / total` when
/// `theirs` leads, 0 on a tie (including `0 / 0`).
pub fn ratio_score(mine: u32, theirs: u32) -> f64 {
    let total = f64::from(mine + theirs);
    if mine > theirs {
        100.0 * f64::from(mine) / total
    } else if mine < theirs {
        -100.0 * f64::from(theirs) / total
    } else {
        0.0
    }
}
