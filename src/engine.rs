//! Main AI Engine: the entry point for a game driver
//!
//! The engine validates the driver's input, runs the alpha-beta search and
//! turns an empty root move list into an explicit [`EngineError::NoLegalMove`]
//! instead of an arbitrary move. The driver stays responsible for passes
//! and for detecting the end of the game.
//!
//! # Example
//!
//! ```
//! use othello::{Engine, SearchLimit};
//!
//! let mut engine = Engine::new();
//! let grid: [[u8; 8]; 8] = [
//!     [0, 0, 0, 0, 0, 0, 0, 0],
//!     [0, 0, 0, 0, 0, 0, 0, 0],
//!     [0, 0, 0, 0, 0, 0, 0, 0],
//!     [0, 0, 0, 2, 1, 0, 0, 0],
//!     [0, 0, 0, 1, 2, 0, 0, 0],
//!     [0, 0, 0, 0, 0, 0, 0, 0],
//!     [0, 0, 0, 0, 0, 0, 0, 0],
//!     [0, 0, 0, 0, 0, 0, 0, 0],
//! ];
//!
//! let result = engine
//!     .choose_move_from_rows(&grid, 0, SearchLimit::depth(2))
//!     .expect("opening position has moves");
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::{Duration, Instant};

use log::debug;

use crate::board::Pos;
use crate::error::{EngineError, Result};
use crate::rules::GameState;
use crate::search::{SearchConfig, SearchLimit, SearchResult, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, always legal for the searched state
    pub best_move: Pos,
    /// Score of the position after the move, for the side that moved
    pub score: f64,
    /// Depth limit of the iteration that produced the move
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(best_move: Pos, result: &SearchResult, time_ms: u64) -> Self {
        Self {
            best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Main AI engine for Othello.
///
/// # Example
///
/// ```
/// use othello::{Engine, SearchConfig};
/// use othello::rules::GameState;
///
/// let mut engine = Engine::with_config(SearchConfig::with_depth(1));
/// let state = GameState::initial();
/// if let Some(best_move) = engine.get_move(&state) {
///     println!("Play at ({}, {})", best_move.row, best_move.col);
/// }
/// ```
pub struct Engine {
    searcher: Searcher,
}

impl Engine {
    /// Engine with the default configuration (depth limit 3).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }

    /// Fixed-depth limit taken from the configuration.
    #[must_use]
    pub fn default_limit(&self) -> SearchLimit {
        SearchLimit::Depth(self.config().max_depth)
    }

    /// Best move with the default limit, `None` when the side to move must pass.
    #[must_use]
    pub fn get_move(&mut self, state: &GameState) -> Option<Pos> {
        let limit = self.default_limit();
        self.choose_move(state, limit).ok().map(|r| r.best_move)
    }

    /// Validate a raw grid and side-to-move index, then search.
    ///
    /// # Errors
    ///
    /// Any input error from [`GameState::from_rows`], or
    /// [`EngineError::NoLegalMove`] when the side to move has no move.
    pub fn choose_move_from_rows<R: AsRef<[u8]>>(
        &mut self,
        rows: &[R],
        player: u8,
        limit: SearchLimit,
    ) -> Result<MoveResult> {
        let state = GameState::from_rows(rows, player)?;
        self.choose_move(&state, limit)
    }

    /// Choose a move for `state.current_player`.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoLegalMove`] when the side to move has no legal move.
    pub fn choose_move(&mut self, state: &GameState, limit: SearchLimit) -> Result<MoveResult> {
        let start = Instant::now();
        let player = state.current_player;

        if !state.has_legal_move() {
            debug!("{:?} has no legal move, signalling a pass", player);
            return Err(EngineError::NoLegalMove { player });
        }

        debug!("searching for {:?} with {:?}", player, limit);
        let result = self.searcher.search(state, limit);
        let best_move = result
            .best_move
            .ok_or(EngineError::NoLegalMove { player })?;
        let time_ms = saturating_millis(start.elapsed());

        debug!(
            "chose ({}, {}) score {:.3} depth {} nodes {} in {}ms",
            best_move.row, best_move.col, result.score, result.depth, result.nodes, time_ms
        );
        Ok(MoveResult::from_search(best_move, &result, time_ms))
    }
}

/// Whole milliseconds, clamped to `u64::MAX`.
fn saturating_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Cell, Player};

    #[test]
    fn test_engine_creation() {
        let engine = Engine::new();
        assert_eq!(engine.config().max_depth, 3);
        assert_eq!(engine.default_limit(), SearchLimit::Depth(3));
    }

    #[test]
    fn test_engine_with_config() {
        let engine = Engine::with_config(SearchConfig::with_depth(5));
        assert_eq!(engine.default_limit(), SearchLimit::Depth(5));
    }

    #[test]
    fn test_engine_opening_move_is_legal() {
        let mut engine = Engine::new();
        let state = GameState::initial();
        let result = engine
            .choose_move(&state, SearchLimit::depth(3))
            .expect("opening has moves");
        assert!(state.legal_moves().contains(&result.best_move));
        assert_eq!(result.depth, 3);
    }

    #[test]
    fn test_engine_signals_pass() {
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Cell::PlayerOne);
        board.set(Pos::new(0, 1), Cell::PlayerOne);
        board.set(Pos::new(0, 2), Cell::PlayerTwo);
        let state = GameState::new(board, Player::Two);

        let mut engine = Engine::new();
        assert_eq!(
            engine.choose_move(&state, SearchLimit::depth(3)).unwrap_err(),
            EngineError::NoLegalMove { player: Player::Two }
        );
        assert_eq!(engine.get_move(&state), None);
    }

    #[test]
    fn test_engine_rejects_bad_input() {
        let mut engine = Engine::new();
        let grid = vec![vec![0u8; 8]; 8];
        assert_eq!(
            engine
                .choose_move_from_rows(&grid, 3, SearchLimit::depth(1))
                .unwrap_err(),
            EngineError::InvalidPlayer(3)
        );

        let short = vec![vec![0u8; 8]; 4];
        assert!(matches!(
            engine.choose_move_from_rows(&short, 0, SearchLimit::depth(1)),
            Err(EngineError::InvalidDimensions { rows: 4, .. })
        ));
    }

    #[test]
    fn test_saturating_millis() {
        assert_eq!(saturating_millis(Duration::from_micros(2_500)), 2);
        assert_eq!(saturating_millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn test_engine_time_budget() {
        let mut engine = Engine::new();
        let state = GameState::initial();
        let result = engine
            .choose_move(&state, SearchLimit::time(Duration::from_millis(200)))
            .expect("opening has moves");
        assert!(state.legal_moves().contains(&result.best_move));

        // Allow more time in debug builds; one root move may overrun the deadline
        #[cfg(debug_assertions)]
        let max_time_ms = 30_000;
        #[cfg(not(debug_assertions))]
        let max_time_ms = 5_000;

        assert!(
            result.time_ms < max_time_ms,
            "Search took too long: {}ms (limit: {}ms)",
            result.time_ms,
            max_time_ms
        );
    }
}
