//! Board structure: the 8x8 grid of cells

use super::{Cell, Player, Pos, BOARD_SIZE};
use crate::error::{EngineError, Result};

/// Game board. Every non-empty cell belongs to exactly one player.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard starting position:
    /// (3,3) and (4,4) hold player two, (3,4) and (4,3) hold player one.
    pub fn initial() -> Self {
        let mut board = Self::new();
        board.set(Pos::new(3, 3), Cell::PlayerTwo);
        board.set(Pos::new(3, 4), Cell::PlayerOne);
        board.set(Pos::new(4, 3), Cell::PlayerOne);
        board.set(Pos::new(4, 4), Cell::PlayerTwo);
        board
    }

    /// Build a board from an external grid of tri-state values.
    ///
    /// Rejects anything that is not exactly 8 rows of 8 cells, and any
    /// value outside {0, 1, 2}.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            let cols = rows.first().map_or(0, |r| r.as_ref().len());
            return Err(EngineError::InvalidDimensions {
                rows: rows.len(),
                cols,
            });
        }
        if let Some(bad) = rows.iter().find(|r| r.as_ref().len() != BOARD_SIZE) {
            return Err(EngineError::InvalidDimensions {
                rows: rows.len(),
                cols: bad.as_ref().len(),
            });
        }

        let mut board = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.as_ref().iter().enumerate() {
                let cell =
                    Cell::from_value(value).ok_or(EngineError::InvalidCell { row, col, value })?;
                board.cells[row][col] = cell;
            }
        }
        Ok(board)
    }

    /// Export the grid in the external encoding
    pub fn to_rows(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                rows[row][col] = cell.value();
            }
        }
        rows
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Overwrite a cell (no rules applied)
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Number of tiles owned by `player`
    pub fn count(&self, player: Player) -> u32 {
        let target = player.cell();
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count() as u32
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Empty)
            .count() as u32
    }

    /// Same layout with the two colours exchanged
    pub fn swap_colors(&self) -> Self {
        let mut swapped = self.clone();
        for cell in swapped.cells.iter_mut().flatten() {
            *cell = match *cell {
                Cell::Empty => Cell::Empty,
                Cell::PlayerOne => Cell::PlayerTwo,
                Cell::PlayerTwo => Cell::PlayerOne,
            };
        }
        swapped
    }
}
