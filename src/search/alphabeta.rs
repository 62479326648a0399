//! Alpha-Beta search with optional time-bounded iterative deepening
//!
//! This module implements the move selector. It runs minimax with
//! alpha-beta pruning over the static evaluation in [`crate::eval`].
//!
//! # Features
//!
//! - Fixed-depth search, or iterative deepening against a wall-clock budget
//! - Apply/undo on a single working state instead of a board copy per node
//! - Row-major move order, so ties go to the first move found
//! - Leaves are always scored for the side that started the search
//! - The side to move stays fixed through the tree unless
//!   [`SearchConfig::alternate_turns`] is set
//!
//! # Example
//!
//! ```
//! use othello::rules::GameState;
//! use othello::search::{SearchConfig, SearchLimit, Searcher};
//!
//! let mut searcher = Searcher::new(SearchConfig::default());
//! let state = GameState::initial();
//!
//! let result = searcher.search(&state, SearchLimit::depth(2));
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use std::time::{Duration, Instant};

use log::{trace, warn};

use crate::board::{Player, Pos};
use crate::eval::evaluate_for;
use crate::rules::GameState;

use super::{SearchConfig, SearchLimit};

/// Infinity score for alpha-beta bounds
const INF: f64 = f64::INFINITY;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Leaf positions scored by the evaluation function
    pub leaves: u64,
    /// Total alpha/beta cutoffs
    pub cutoffs: u64,
    /// Cutoffs on the first move tried
    pub first_move_cutoffs: u64,
    /// Iterations completed (1 for a fixed-depth search)
    pub iterations: u32,
    /// An iteration was abandoned because the deadline passed
    pub interrupted: bool,
}

impl SearchStats {
    /// Share of cutoffs produced by the first move, in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the side to move has no legal move
    pub best_move: Option<Pos>,
    /// Score of the best move, from the searching side's perspective
    pub score: f64,
    /// Depth limit of the iteration that produced the move
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Outcome of one scan over the root moves.
struct RootScan {
    best_move: Option<Pos>,
    score: f64,
    completed: bool,
}

/// Alpha-beta move selector.
///
/// Configuration is read-only; per-search counters are reset on every call.
pub struct Searcher {
    config: SearchConfig,
    /// Side the leaves are scored for
    perspective: Player,
    /// Depth at which the current iteration stops and evaluates
    depth_limit: u8,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            perspective: Player::One,
            depth_limit: config.max_depth,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Choose a move for `state.current_player`.
    ///
    /// Returns a result with `best_move == None` only when the side to move
    /// has no legal move. Whenever a move is returned it is legal.
    #[must_use]
    pub fn search(&mut self, state: &GameState, limit: SearchLimit) -> SearchResult {
        self.reset(state.current_player);
        let start = Instant::now();
        let mut work = state.clone();

        if !work.has_legal_move() {
            self.stats.leaves += 1;
            return self.finish(None, self.leaf_score(&work), 0);
        }

        match limit {
            SearchLimit::Depth(depth) => {
                let scan = self.search_root(&mut work, depth, None);
                self.stats.iterations = 1;
                self.finish(scan.best_move, scan.score, depth)
            }
            SearchLimit::Time(budget) => {
                let cap = self.config.max_iterative_depth;
                self.search_iterative(&mut work, cap, start, budget)
            }
            SearchLimit::DepthAndTime(depth, budget) => {
                self.search_iterative(&mut work, depth, start, budget)
            }
        }
    }

    /// Minimax value of `state` for its current player under `depth_limit`,
    /// without choosing a move. A limit of 0 is the static evaluation.
    #[must_use]
    pub fn score_position(&mut self, state: &GameState, depth_limit: u8) -> f64 {
        self.reset(state.current_player);
        self.depth_limit = depth_limit;
        let mut work = state.clone();
        self.alpha_beta(&mut work, 0, -INF, INF, true)
    }

    fn reset(&mut self, perspective: Player) {
        self.perspective = perspective;
        self.depth_limit = self.config.max_depth;
        self.nodes = 0;
        self.stats = SearchStats::default();
    }

    fn finish(&self, best_move: Option<Pos>, score: f64, depth: u8) -> SearchResult {
        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    #[inline]
    fn leaf_score(&self, state: &GameState) -> f64 {
        evaluate_for(&state.board, self.perspective, &self.config.weights)
    }

    /// Iterative deepening from limit 0 up to `max_depth`.
    ///
    /// The deadline is only checked between root moves and between
    /// iterations. The limit-0 iteration always completes so there is
    /// always a scored move. An interrupted iteration is discarded.
    fn search_iterative(
        &mut self,
        work: &mut GameState,
        max_depth: u8,
        start: Instant,
        budget: Duration,
    ) -> SearchResult {
        // An unrepresentable deadline never expires
        let deadline = start.checked_add(budget);
        // Beyond this limit the tree cannot get any deeper
        let horizon = work.board.empty_count().saturating_sub(1).min(u32::from(u8::MAX)) as u8;
        let cap = max_depth.min(horizon);

        let first = self.search_root(work, 0, None);
        let (mut best_move, mut best_score, mut best_depth) = (first.best_move, first.score, 0);
        self.stats.iterations = 1;
        trace!(
            "depth 0: move {:?} score {:.3} nodes {}",
            best_move,
            best_score,
            self.nodes
        );

        if expired(deadline) {
            warn!(
                "time budget {:?} spent before the first iteration finished",
                budget
            );
            return self.finish(best_move, best_score, best_depth);
        }

        for depth in 1..=cap {
            let scan = self.search_root(work, depth, deadline);
            if !scan.completed {
                self.stats.interrupted = true;
                trace!("depth {}: deadline reached, keeping depth {}", depth, best_depth);
                break;
            }

            best_move = scan.best_move;
            best_score = scan.score;
            best_depth = depth;
            self.stats.iterations += 1;
            trace!(
                "depth {}: move {:?} score {:.3} nodes {}",
                depth,
                best_move,
                best_score,
                self.nodes
            );

            if expired(deadline) {
                break;
            }
        }

        self.finish(best_move, best_score, best_depth)
    }

    /// Score every root move under `depth_limit` and keep the best.
    ///
    /// Ties keep the earliest move in row-major order.
    fn search_root(
        &mut self,
        state: &mut GameState,
        depth_limit: u8,
        deadline: Option<Instant>,
    ) -> RootScan {
        self.depth_limit = depth_limit;
        self.nodes += 1;

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for mov in state.legal_moves() {
            if expired(deadline) {
                return RootScan {
                    best_move,
                    score: best_score,
                    completed: false,
                };
            }

            let Some(record) = state.apply(mov) else {
                continue;
            };
            self.hand_over(state);
            let score = self.alpha_beta(state, 0, alpha, beta, false);
            self.hand_over(state);
            state.undo_move(&record);

            if score > best_score || best_move.is_none() {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(best_score);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        state.pending_move = None;
        RootScan {
            best_move,
            score: best_score,
            completed: true,
        }
    }

    /// Toggle the side to move around a child search when turns alternate.
    #[inline]
    fn hand_over(&self, state: &mut GameState) {
        if self.config.alternate_turns {
            state.switch_player();
        }
    }

    /// Recursive minimax step with alpha-beta pruning (fail-soft).
    ///
    /// Moves are generated for `state.current_player`, which only changes
    /// between plies when turns alternate. Leaves are scored for
    /// `self.perspective` regardless of `maximizing`. A node without legal
    /// moves is a leaf.
    fn alpha_beta(
        &mut self,
        state: &mut GameState,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.nodes += 1;

        if depth >= self.depth_limit {
            self.stats.leaves += 1;
            return self.leaf_score(state);
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            self.stats.leaves += 1;
            return self.leaf_score(state);
        }

        let mut best = if maximizing { -INF } else { INF };

        for (i, &mov) in moves.iter().enumerate() {
            let Some(record) = state.apply(mov) else {
                continue;
            };
            self.hand_over(state);
            let value = self.alpha_beta(state, depth + 1, alpha, beta, !maximizing);
            self.hand_over(state);
            state.undo_move(&record);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        best
    }
}

#[inline]
fn expired(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|d| Instant::now() >= d)
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
