//! Red-Blue Nim: adversarial search engine and console game
//!
//! This crate provides:
//! - Complete two-pile Red-Blue Nim game model with validation
//! - Exhaustive minimax, alpha-beta, and depth-limited alpha-beta search
//! - A static heuristic evaluator for depth-cutoff leaves
//! - A CLI for interactive play, position analysis, and exhaustive
//!   cross-checking of the algorithms

pub mod cli;
pub mod error;
pub mod nim;
pub mod search;

pub use error::{Error, Result};
pub use nim::{Action, GameState, Pile, Player, Variant, UTILITY_MAGNITUDE};
pub use search::{
    alpha_beta, alpha_beta_limited, evaluate, minimax, Algorithm, SearchOutcome, SearchStats,
    Searcher,
};
