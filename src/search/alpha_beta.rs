//! Alpha-beta pruned minimax, full-depth and depth-limited

use super::{heuristic, SearchOutcome, SearchStats};
use crate::nim::{Action, GameState, Player};

/// Alpha-beta search from `state`, maximizing for `player`.
///
/// Returns the same action and value as [`minimax`](super::minimax) for
/// every state; pruning only reduces the number of nodes visited.
pub fn alpha_beta(state: &GameState, player: Player) -> SearchOutcome {
    let mut stats = SearchStats::default();
    let (value, action) = bounded_value(state, player, i32::MIN, i32::MAX, None, &mut stats);
    SearchOutcome {
        action,
        value,
        stats,
    }
}

/// Depth-limited alpha-beta search.
///
/// Carries a remaining-depth counter, decremented once per ply. A
/// non-terminal state at depth 0 is a cutoff leaf scored by the static
/// heuristic; a terminal state returns its true utility regardless of the
/// remaining depth. `depth` must be at least 1 at the root.
pub fn alpha_beta_limited(state: &GameState, player: Player, depth: u32) -> SearchOutcome {
    let mut stats = SearchStats::default();
    let (value, action) = bounded_value(state, player, i32::MIN, i32::MAX, Some(depth), &mut stats);
    SearchOutcome {
        action,
        value,
        stats,
    }
}

fn bounded_value(
    state: &GameState,
    player: Player,
    mut alpha: i32,
    mut beta: i32,
    depth: Option<u32>,
    stats: &mut SearchStats,
) -> (i32, Option<Action>) {
    stats.nodes += 1;

    // The terminal check takes precedence over the depth cutoff: a finished
    // game is scored by its true utility even at depth 0.
    if state.is_terminal() {
        let value = state
            .utility(player)
            .expect("terminal state has a defined utility");
        return (value, None);
    }
    if depth == Some(0) {
        return (heuristic::evaluate(state, player), None);
    }

    let maximizing = state.to_move == player;
    let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_action = None;
    let child_depth = depth.map(|d| d - 1);

    for action in state.legal_actions() {
        let child = state
            .apply(action)
            .expect("applying a generated legal action should not fail");
        let (child_value, _) = bounded_value(&child, player, alpha, beta, child_depth, stats);

        if maximizing {
            if child_value > best_value {
                best_value = child_value;
                best_action = Some(action);
            }
            alpha = alpha.max(best_value);
        } else {
            if child_value < best_value {
                best_value = child_value;
                best_action = Some(action);
            }
            beta = beta.min(best_value);
        }

        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    (best_value, best_action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nim::{Pile, Variant};
    use crate::search::minimax;

    #[test]
    fn pruning_skips_nodes_but_keeps_the_result() {
        let state = GameState::new(5, 5, Variant::Standard, Player::Computer);
        let full = minimax(&state, Player::Computer);
        let pruned = alpha_beta(&state, Player::Computer);

        assert_eq!(pruned.action, full.action);
        assert_eq!(pruned.value, full.value);
        assert!(
            pruned.stats.nodes < full.stats.nodes,
            "expected fewer than {} nodes, saw {}",
            full.stats.nodes,
            pruned.stats.nodes
        );
        assert!(pruned.stats.cutoffs > 0, "a 5x5 search must prune somewhere");
    }

    #[test]
    fn depth_one_cutoff_scores_children_with_the_heuristic() {
        // From (3, 4) every depth-1 child is non-terminal, so the root picks
        // the child with the best heuristic: removing one red marble leaves
        // (2, 4) worth 2*2 + 3*4 = 16 for the searcher.
        let state = GameState::new(3, 4, Variant::Standard, Player::Computer);
        let outcome = alpha_beta_limited(&state, Player::Computer, 1);
        assert_eq!(outcome.action, Some(Action::new(Pile::Red, 1)));
        assert_eq!(outcome.value, 16);
    }

    #[test]
    fn terminal_state_outranks_the_depth_cutoff() {
        let state = GameState::new(0, 6, Variant::Standard, Player::Human);
        let outcome = alpha_beta_limited(&state, Player::Human, 1);
        assert_eq!(outcome.action, None);
        assert_eq!(
            outcome.value,
            state.utility(Player::Human).unwrap(),
            "a finished game is scored by utility, not the heuristic"
        );
    }

    #[test]
    fn generous_depth_matches_unlimited_search() {
        let state = GameState::new(4, 3, Variant::Misere, Player::Human);
        let unlimited = alpha_beta(&state, Player::Human);
        let limited = alpha_beta_limited(&state, Player::Human, 8);
        assert_eq!(limited.action, unlimited.action);
        assert_eq!(limited.value, unlimited.value);
    }
}
