//! Exhaustive minimax search

use super::{SearchOutcome, SearchStats};
use crate::nim::{Action, GameState, Player};

/// Full-width minimax from `state`, maximizing for `player`.
///
/// A node maximizes when `player` is the one to move and minimizes
/// otherwise; `player` stays fixed for the whole search. Ties break toward
/// the first action in the variant's fixed ordering: a later equal-value
/// action never replaces an earlier one.
pub fn minimax(state: &GameState, player: Player) -> SearchOutcome {
    let mut stats = SearchStats::default();
    let (value, action) = minimax_value(state, player, &mut stats);
    SearchOutcome {
        action,
        value,
        stats,
    }
}

fn minimax_value(
    state: &GameState,
    player: Player,
    stats: &mut SearchStats,
) -> (i32, Option<Action>) {
    stats.nodes += 1;

    if state.is_terminal() {
        let value = state
            .utility(player)
            .expect("terminal state has a defined utility");
        return (value, None);
    }

    let maximizing = state.to_move == player;
    let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_action = None;

    for action in state.legal_actions() {
        let child = state
            .apply(action)
            .expect("applying a generated legal action should not fail");
        let (child_value, _) = minimax_value(&child, player, stats);

        let improves = if maximizing {
            child_value > best_value
        } else {
            child_value < best_value
        };
        if improves {
            best_value = child_value;
            best_action = Some(action);
        }
    }

    (best_value, best_action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nim::{Pile, Variant, UTILITY_MAGNITUDE};

    #[test]
    fn terminal_state_returns_utility_without_recursion() {
        let state = GameState::new(0, 7, Variant::Standard, Player::Computer);
        let outcome = minimax(&state, Player::Computer);
        assert_eq!(outcome.action, None);
        assert_eq!(outcome.value, UTILITY_MAGNITUDE);
        assert_eq!(outcome.stats.nodes, 1, "no child states may be expanded");
    }

    #[test]
    fn forced_loss_when_every_move_empties_a_pile() {
        // Standard rules at (1, 1): both legal moves empty a pile, so the
        // mover loses no matter what.
        let state = GameState::new(1, 1, Variant::Standard, Player::Computer);
        let outcome = minimax(&state, Player::Computer);
        assert_eq!(outcome.value, -UTILITY_MAGNITUDE);
        // First legal action in standard order is (red, 1).
        assert_eq!(outcome.action, Some(Action::new(Pile::Red, 1)));
    }

    #[test]
    fn misere_mover_empties_and_wins() {
        let state = GameState::new(1, 1, Variant::Misere, Player::Human);
        let outcome = minimax(&state, Player::Human);
        assert_eq!(outcome.value, UTILITY_MAGNITUDE);
        // Misere ordering tries (blue, 1) first; it empties blue and wins.
        assert_eq!(outcome.action, Some(Action::new(Pile::Blue, 1)));
    }
}
