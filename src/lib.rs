//! Othello (Reversi) AI engine
//!
//! A move selector for 8x8 Othello: given a board and the side to move, it
//! searches the game tree with alpha-beta pruning over a hand-tuned
//! positional evaluation and returns the best move found.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Cells, players, positions and the 8x8 grid
//! - [`rules`]: Flip runs, legality, move enumeration, apply/undo
//! - [`eval`]: Six-component static evaluation
//! - [`search`]: Alpha-beta search, fixed depth or time-bounded
//! - [`engine`]: Driver-facing entry point with input validation
//!
//! # Quick Start
//!
//! ```
//! use othello::{Engine, GameState, SearchLimit};
//!
//! let mut engine = Engine::new();
//! let mut state = GameState::initial();
//!
//! let result = engine.choose_move(&state, SearchLimit::depth(2)).unwrap();
//! state.apply(result.best_move);
//! println!("AI plays at ({}, {})", result.best_move.row, result.best_move.col);
//! ```
//!
//! # Passing
//!
//! When the side to move has no legal move the engine returns
//! [`EngineError::NoLegalMove`]. The driver decides whether that is a pass
//! or the end of the game.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use engine::{Engine, MoveResult};
pub use error::{EngineError, Result};
pub use eval::{evaluate, evaluate_for, EvalWeights};
pub use rules::GameState;
pub use search::{SearchConfig, SearchLimit, SearchResult, Searcher};
