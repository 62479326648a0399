//! Search module for the Othello AI
//!
//! Contains:
//! - Search configuration and per-call limits
//! - Alpha-Beta search with optional time-bounded iterative deepening

pub mod alphabeta;
pub mod config;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use config::{SearchConfig, SearchLimit};
