//! Heuristic evaluation function for Othello positions
//!
//! This module provides the static evaluation used at search leaves.
//! It combines six components:
//! - Disk-square weighting
//! - Coin parity
//! - Corner occupancy
//! - Corner closeness (tiles next to an open corner)
//! - Frontier disks
//! - Mobility

use crate::board::{Board, Cell, Player, Pos, DIRECTIONS, TOTAL_CELLS};
use crate::rules::{count_legal_moves, GameState};

use super::weights::{
    ratio_score, EvalWeights, CORNER_CLOSENESS_VALUE, CORNER_NEIGHBOURS, CORNER_VALUE,
    SQUARE_WEIGHTS,
};

/// Raw, unweighted component scores for one side.
///
/// Every component is antisymmetric: swapping the perspective negates it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EvalBreakdown {
    pub parity: f64,
    pub corners: f64,
    pub corner_closeness: f64,
    pub mobility: f64,
    pub frontier: f64,
    pub disk_squares: f64,
}

impl EvalBreakdown {
    /// Weighted sum of the components
    pub fn score(&self, weights: &EvalWeights) -> f64 {
        weights.parity * self.parity
            + weights.corners * self.corners
            + weights.corner_closeness * self.corner_closeness
            + weights.mobility * self.mobility
            + weights.frontier * self.frontier
            + weights.disk_squares * self.disk_squares
    }
}

/// Evaluate the state from the perspective of its current player.
///
/// Positive values favour `state.current_player`.
#[must_use]
pub fn evaluate(state: &GameState, weights: &EvalWeights) -> f64 {
    evaluate_for(&state.board, state.current_player, weights)
}

/// Evaluate `board` from the perspective of `player`.
///
/// Antisymmetric: `evaluate_for(b, p) == -evaluate_for(b, p.opponent())`.
#[must_use]
pub fn evaluate_for(board: &Board, player: Player, weights: &EvalWeights) -> f64 {
    evaluate_breakdown(board, player).score(weights)
}

/// Compute all six components. None is skipped, degenerate ratios are 0.
pub fn evaluate_breakdown(board: &Board, player: Player) -> EvalBreakdown {
    let enemy = player.opponent();

    let (player_frontier, enemy_frontier) = frontier_counts(board, player);

    EvalBreakdown {
        parity: ratio_score(board.count(player), board.count(enemy)),
        corners: corner_score(board, player),
        corner_closeness: corner_closeness_score(board, player),
        mobility: ratio_score(
            count_legal_moves(board, player) as u32,
            count_legal_moves(board, enemy) as u32,
        ),
        frontier: -ratio_score(player_frontier, enemy_frontier),
        disk_squares: f64::from(disk_square_score(board, player)),
    }
}

/// Sum of square weights, positive for `player`, negative for the enemy.
fn disk_square_score(board: &Board, player: Player) -> i32 {
    let mut score = 0;
    for (r, row) in SQUARE_WEIGHTS.iter().enumerate() {
        for (c, &weight) in row.iter().enumerate() {
            match board.get(Pos::new(r as u8, c as u8)).owner() {
                Some(owner) if owner == player => score += weight,
                Some(_) => score -= weight,
                None => {}
            }
        }
    }
    score
}

#[inline]
fn is_frontier(board: &Board, pos: Pos) -> bool {
    DIRECTIONS
        .iter()
        .filter_map(|&dir| pos.offset(dir, 1))
        .any(|n| board.get(n) == Cell::Empty)
}

/// Frontier tile counts for (player, enemy)
fn frontier_counts(board: &Board, player: Player) -> (u32, u32) {
    let mut player_frontier = 0;
    let mut enemy_frontier = 0;
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        let Some(owner) = board.get(pos).owner() else {
            continue;
        };
        if !is_frontier(board, pos) {
            continue;
        }
        if owner == player {
            player_frontier += 1;
        } else {
            enemy_frontier += 1;
        }
    }
    (player_frontier, enemy_frontier)
}

/// `25 * (player corners - enemy corners)`
fn corner_score(board: &Board, player: Player) -> f64 {
    let mut diff = 0i32;
    for &((r, c), _) in &CORNER_NEIGHBOURS {
        match board.get(Pos::new(r, c)).owner() {
            Some(owner) if owner == player => diff += 1,
            Some(_) => diff -= 1,
            None => {}
        }
    }
    CORNER_VALUE * f64::from(diff)
}

/// `-12.5 * (player - enemy)` over the neighbours of empty corners
fn corner_closeness_score(board: &Board, player: Player) -> f64 {
    let mut diff = 0i32;
    for &((r, c), neighbours) in &CORNER_NEIGHBOURS {
        if !board.is_empty(Pos::new(r, c)) {
            continue;
        }
        for (nr, nc) in neighbours {
            match board.get(Pos::new(nr, nc)).owner() {
                Some(owner) if owner == player => diff += 1,
                Some(_) => diff -= 1,
                None => {}
            }
        }
    }
    CORNER_CLOSENESS_VALUE * f64::from(diff)
}
