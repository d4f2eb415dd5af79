//! Adversarial search over Red-Blue Nim states
//!
//! Three interchangeable algorithms share one result shape: exhaustive
//! minimax, alpha-beta pruned minimax, and depth-limited alpha-beta backed
//! by a static heuristic at the cutoff. Pruning changes how many nodes are
//! visited, never the returned action or value.

pub mod alpha_beta;
pub mod heuristic;
pub mod minimax;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use alpha_beta::{alpha_beta, alpha_beta_limited};
pub use heuristic::evaluate;
pub use minimax::minimax;

use crate::nim::{Action, GameState, Player};

/// Result of one search call: the chosen action and its backed-up value.
///
/// `action` is `None` only when the searched state is terminal (no legal
/// move exists). The value is exact for the full-width algorithms and a
/// heuristic-backed estimate for depth-limited search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub action: Option<Action>,
    pub value: i32,
    pub stats: SearchStats,
}

/// Node-visit accounting for one search call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States evaluated, including terminal and cutoff leaves
    pub nodes: u64,
    /// Sibling loops abandoned by an alpha-beta cutoff
    pub cutoffs: u64,
}

/// Search algorithm selector for the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "minimax"),
            Algorithm::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alpha-beta" | "alphabeta" => Ok(Algorithm::AlphaBeta),
            _ => Err(crate::Error::ParseAlgorithm {
                input: s.to_string(),
            }),
        }
    }
}

/// A configured search strategy: algorithm plus optional depth bound
#[derive(Debug, Clone, Copy)]
pub struct Searcher {
    algorithm: Algorithm,
    depth: Option<u32>,
}

impl Searcher {
    /// Configure a strategy. `depth` must be at least 1 when present.
    pub fn new(algorithm: Algorithm, depth: Option<u32>) -> Self {
        Searcher { algorithm, depth }
    }

    /// Run the configured search from `state` for `player`.
    ///
    /// A depth bound always selects the depth-limited alpha-beta variant;
    /// without one the full-width algorithm runs to the terminal states.
    pub fn best_move(&self, state: &GameState, player: Player) -> SearchOutcome {
        match (self.depth, self.algorithm) {
            (Some(depth), _) => alpha_beta_limited(state, player, depth),
            (None, Algorithm::Minimax) => minimax(state, player),
            (None, Algorithm::AlphaBeta) => alpha_beta(state, player),
        }
    }
}
