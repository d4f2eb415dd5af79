//! Red-Blue Nim game implementation

pub mod rules;
pub mod state;

pub use rules::{MISERE_ACTION_ORDER, STANDARD_ACTION_ORDER, UTILITY_MAGNITUDE};
pub use state::{Action, GameState, Pile, Player, Variant};
