//! Search configuration and per-call limits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::eval::EvalWeights;

/// Read-only search parameters, held by the [`Searcher`](super::Searcher).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth limit used when the caller does not pass one.
    /// A limit of `d` looks `d + 1` plies ahead.
    pub max_depth: u8,

    /// Deepest iteration a time-only search may reach.
    pub max_iterative_depth: u8,

    /// Hand the turn to the opponent after every move in the tree.
    ///
    /// Off by default: every ply then generates moves for the side to move
    /// at the root, and only the minimizing/maximizing role alternates.
    pub alternate_turns: bool,

    /// Evaluation weights used at the leaves.
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            max_iterative_depth: 60,
            alternate_turns: false,
            weights: EvalWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Default config with a different depth limit.
    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }
}

/// When a search stops, selected per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchLimit {
    /// Single pass with a fixed depth limit.
    Depth(u8),
    /// Iterative deepening until the wall-clock budget runs out.
    Time(Duration),
    /// Iterative deepening up to the depth limit, within the budget.
    DepthAndTime(u8, Duration),
}

impl SearchLimit {
    #[inline]
    pub fn depth(depth: u8) -> Self {
        SearchLimit::Depth(depth)
    }

    #[inline]
    pub fn time(budget: Duration) -> Self {
        SearchLimit::Time(budget)
    }

    /// Time budget in seconds, as supplied by a game driver.
    pub fn time_secs(seconds: f64) -> Result<Self> {
        Ok(SearchLimit::Time(budget_from_secs(seconds)?))
    }

    /// Depth cap combined with a time budget in seconds.
    pub fn both(depth: u8, seconds: f64) -> Result<Self> {
        Ok(SearchLimit::DepthAndTime(depth, budget_from_secs(seconds)?))
    }

    pub fn depth_limit(&self) -> Option<u8> {
        match *self {
            SearchLimit::Depth(d) | SearchLimit::DepthAndTime(d, _) => Some(d),
            SearchLimit::Time(_) => None,
        }
    }

    pub fn time_budget(&self) -> Option<Duration> {
        match *self {
            SearchLimit::Time(t) | SearchLimit::DepthAndTime(_, t) => Some(t),
            SearchLimit::Depth(_) => None,
        }
    }
}

fn budget_from_secs(seconds: f64) -> Result<Duration> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(EngineError::InvalidTimeBudget(seconds));
    }
    Duration::try_from_secs_f64(seconds).map_err(|_| EngineError::InvalidTimeBudget(seconds))
}
