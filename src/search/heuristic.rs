//! Static evaluation used at the depth cutoff

use crate::nim::{GameState, Player};

/// Heuristic estimate of a non-terminal state's value for `player`.
///
/// Remaining marbles count against the side to move: `2*red + 3*blue`,
/// negated when `player` is the one to move. The sign convention mirrors
/// the terminal utility so backed-up values stay comparable across plies.
pub fn evaluate(state: &GameState, player: Player) -> i32 {
    let value = 2 * state.red as i32 + 3 * state.blue as i32;
    if state.to_move == player {
        -value
    } else {
        value
    }
}
