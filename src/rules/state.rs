//! Game state: board, side to move and the move about to be applied

use crate::board::{Board, Cell, Player, Pos, BOARD_SIZE, DIRECTIONS};
use crate::error::Result;

use super::flips::{
    flip_run_length, has_legal_move, has_tile_to_flip, is_legal_at, is_legal_move, legal_moves,
};

/// Upper bound on tiles flipped by one move (6 per direction, 8 directions)
pub const MAX_FLIPS: usize = 48;

/// Record of an applied move, enough to undo it exactly.
#[derive(Debug, Clone, Copy)]
pub struct MoveRecord {
    /// Cell the tile was placed on
    pub pos: Pos,
    /// Player who moved
    pub player: Player,
    flipped: [Pos; MAX_FLIPS],
    count: u8,
}

impl MoveRecord {
    /// Positions recoloured by the move
    #[inline]
    pub fn flipped(&self) -> &[Pos] {
        &self.flipped[..self.count as usize]
    }
}

/// Position plus side to move.
///
/// This is a value type: speculative moves are made on a clone, or undone
/// with the [`MoveRecord`] returned by [`GameState::make_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    /// Move to apply on the next [`GameState::make_move`] call
    pub pending_move: Option<Pos>,
}

impl GameState {
    pub fn new(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
            pending_move: None,
        }
    }

    /// Starting position with player one to move
    pub fn initial() -> Self {
        Self::new(Board::initial(), Player::One)
    }

    /// Validate an external grid and side-to-move index (0 or 1).
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R], player: u8) -> Result<Self> {
        let board = Board::from_rows(rows)?;
        let player = Player::from_index(player)?;
        Ok(Self::new(board, player))
    }

    #[inline]
    pub fn is_valid_coord(&self, row: i32, col: i32) -> bool {
        Pos::is_valid(row, col)
    }

    /// True iff moving at `pos` flips at least one tile along `direction`
    /// for the current player.
    #[inline]
    pub fn has_tile_to_flip(&self, pos: Pos, direction: (i32, i32)) -> bool {
        has_tile_to_flip(&self.board, pos, self.current_player, direction)
    }

    #[inline]
    pub fn is_legal_move(&self, row: i32, col: i32) -> bool {
        is_legal_move(&self.board, row, col, self.current_player)
    }

    /// Legal moves for the current player in row-major order
    pub fn legal_moves(&self) -> Vec<Pos> {
        legal_moves(&self.board, self.current_player)
    }

    pub fn has_legal_move(&self) -> bool {
        has_legal_move(&self.board, self.current_player)
    }

    /// All cells held by `player`, scanned column by column.
    pub fn squares(&self, player: Player) -> Vec<Pos> {
        let target = player.cell();
        let mut squares = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for c in 0..BOARD_SIZE as u8 {
            for r in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(r, c);
                if self.board.get(pos) == target {
                    squares.push(pos);
                }
            }
        }
        squares
    }

    #[inline]
    pub fn tile_count(&self, player: Player) -> u32 {
        self.board.count(player)
    }

    /// Hand the turn to the other player
    #[inline]
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Apply `pending_move` for the current player.
    ///
    /// Places the tile and flips every bracketed run. Does nothing and
    /// returns `None` when no move is pending or the pending move is
    /// illegal; callers are expected to pass moves from [`legal_moves`].
    /// The side to move is left unchanged.
    ///
    /// [`legal_moves`]: GameState::legal_moves
    pub fn make_move(&mut self) -> Option<MoveRecord> {
        let pos = self.pending_move?;
        let player = self.current_player;
        // Fields are public, so an off-board position can reach here
        if !Pos::is_valid(i32::from(pos.row), i32::from(pos.col))
            || !is_legal_at(&self.board, pos, player)
        {
            return None;
        }

        let own = player.cell();
        let mut record = MoveRecord {
            pos,
            player,
            flipped: [pos; MAX_FLIPS],
            count: 0,
        };

        self.board.set(pos, own);
        for &dir in &DIRECTIONS {
            let run = flip_run_length(&self.board, pos, player, dir);
            for distance in 1..=run as i32 {
                if let Some(target) = pos.offset(dir, distance) {
                    self.board.set(target, own);
                    record.flipped[record.count as usize] = target;
                    record.count += 1;
                }
            }
        }

        Some(record)
    }

    /// Set `pos` as the pending move and apply it.
    pub fn apply(&mut self, pos: Pos) -> Option<MoveRecord> {
        self.pending_move = Some(pos);
        self.make_move()
    }

    /// Revert a move previously returned by [`GameState::make_move`].
    ///
    /// Must be called in reverse application order.
    pub fn undo_move(&mut self, record: &MoveRecord) {
        let opponent = record.player.opponent().cell();
        for &pos in record.flipped() {
            self.board.set(pos, opponent);
        }
        self.board.set(record.pos, Cell::Empty);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
