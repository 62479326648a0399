//! Board representation for Othello

pub mod board;


// Re-exports
pub use board::Board;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// The 8 scan directions as (row delta, col delta), clockwise from north-west.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cell contents. The discriminants match the external grid encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    PlayerOne = 1,
    PlayerTwo = 2,
}

impl Cell {
    /// Decode an external cell value (0, 1 or 2)
    #[inline]
    pub fn from_value(value: u8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::PlayerOne),
            2 => Some(Cell::PlayerTwo),
            _ => None,
        }
    }

    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Owner of a non-empty cell
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }
}

/// Side to move. `One` is index 0 (cell value 1), `Two` is index 1 (cell value 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Decode an external side-to-move index (0 or 1)
    pub fn from_index(index: u8) -> Result<Player> {
        match index {
            0 => Ok(Player::One),
            1 => Ok(Player::Two),
            other => Err(EngineError::InvalidPlayer(other)),
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Get the opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Cell colour owned by this player (`index + 1` in the grid encoding)
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Build a position from signed coordinates, `None` when off-board
    #[inline]
    pub fn checked(row: i32, col: i32) -> Option<Pos> {
        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    /// True iff both coordinates lie in `[0, 8)`
    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Step `distance` cells along `direction`, `None` when it leaves the board
    #[inline]
    pub fn offset(self, direction: (i32, i32), distance: i32) -> Option<Pos> {
        Pos::checked(
            self.row as i32 + direction.0 * distance,
            self.col as i32 + direction.1 * distance,
        )
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major ordering, the tie-break order used by the search.
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
