//! Flip-run detection and move legality
//!
//! A flip run is the contiguous line of opponent tiles between a newly
//! placed tile and an existing tile of the mover's colour. A move is
//! legal only if it brackets at least one run.

use crate::board::{Board, Cell, Player, Pos, BOARD_SIZE, DIRECTIONS};

/// Length of the flip run starting next to `pos` along `direction`.
///
/// Returns the number of opponent tiles that would be flipped, or 0 when
/// the line is interrupted by an empty cell, leaves the board, or starts
/// with one of the mover's own tiles.
pub fn flip_run_length(board: &Board, pos: Pos, player: Player, direction: (i32, i32)) -> usize {
    let own = player.cell();
    let mut run = 0;

    for distance in 1..BOARD_SIZE as i32 {
        let Some(next) = pos.offset(direction, distance) else {
            return 0;
        };
        match board.get(next) {
            Cell::Empty => return 0,
            cell if cell == own => return run,
            _ => run += 1,
        }
    }

    0
}

/// True iff placing at `pos` would flip at least one tile along `direction`.
#[inline]
pub fn has_tile_to_flip(board: &Board, pos: Pos, player: Player, direction: (i32, i32)) -> bool {
    flip_run_length(board, pos, player, direction) > 0
}

/// Check legality of a move given as signed coordinates.
///
/// The target must be on the board, empty, and bracket a run in at least
/// one of the 8 directions.
pub fn is_legal_move(board: &Board, row: i32, col: i32, player: Player) -> bool {
    let Some(pos) = Pos::checked(row, col) else {
        return false;
    };
    is_legal_at(board, pos, player)
}

/// [`is_legal_move`] for an already in-bounds position
#[inline]
pub fn is_legal_at(board: &Board, pos: Pos, player: Player) -> bool {
    board.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&dir| has_tile_to_flip(board, pos, player, dir))
}

/// All legal moves for `player`, in row-major order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Pos> {
    let mut moves = Vec::with_capacity(32);
    for r in 0..BOARD_SIZE as u8 {
        for c in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(r, c);
            if is_legal_at(board, pos, player) {
                moves.push(pos);
            }
        }
    }
    moves
}

/// Number of legal moves for `player`
pub fn count_legal_moves(board: &Board, player: Player) -> usize {
    (0..BOARD_SIZE * BOARD_SIZE)
        .map(Pos::from_index)
        .filter(|&pos| is_legal_at(board, pos, player))
        .count()
}

/// Stops at the first legal move found.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    (0..BOARD_SIZE * BOARD_SIZE)
        .map(Pos::from_index)
        .any(|pos| is_legal_at(board, pos, player))
}
