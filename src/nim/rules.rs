//! Legal actions, state transitions, and terminal utilities

use super::state::{Action, GameState, Pile, Player, Variant};
use crate::error::{Error, Result};

/// Fixed zero-sum payoff magnitude awarded once a pile is emptied
pub const UTILITY_MAGNITUDE: i32 = 9;

/// Candidate actions in standard-variant preference order.
///
/// The order is fixed so that search tie-breaking and alpha-beta cutoff
/// counts are deterministic.
pub const STANDARD_ACTION_ORDER: [Action; 4] = [
    Action {
        pile: Pile::Red,
        count: 2,
    },
    Action {
        pile: Pile::Blue,
        count: 2,
    },
    Action {
        pile: Pile::Red,
        count: 1,
    },
    Action {
        pile: Pile::Blue,
        count: 1,
    },
];

/// Misere-variant preference order: the exact reverse of the standard order
pub const MISERE_ACTION_ORDER: [Action; 4] = [
    Action {
        pile: Pile::Blue,
        count: 1,
    },
    Action {
        pile: Pile::Red,
        count: 1,
    },
    Action {
        pile: Pile::Blue,
        count: 2,
    },
    Action {
        pile: Pile::Red,
        count: 2,
    },
];

impl GameState {
    /// Candidate ordering table for a variant
    pub fn action_order(variant: Variant) -> &'static [Action; 4] {
        match variant {
            Variant::Standard => &STANDARD_ACTION_ORDER,
            Variant::Misere => &MISERE_ACTION_ORDER,
        }
    }

    /// Whether the game has ended: either pile is empty
    pub fn is_terminal(&self) -> bool {
        self.red == 0 || self.blue == 0
    }

    /// Legal actions in this state, in the variant's fixed preference order.
    ///
    /// Empty when the state is terminal. An action is legal only if its pile
    /// still holds at least `count` marbles.
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal() {
            return Vec::new();
        }
        Self::action_order(self.variant)
            .iter()
            .copied()
            .filter(|action| self.pile_count(action.pile) >= u32::from(action.count))
            .collect()
    }

    /// Apply an action and return the resulting state.
    ///
    /// The chosen pile is reduced by `count` and the turn passes to the
    /// opponent; the variant is carried over unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalAction`] if `count` is outside 1..=2 or exceeds
    /// the pile's current count. Removal is never clamped.
    #[must_use = "apply returns a new game state; the original is unchanged"]
    pub fn apply(&self, action: Action) -> Result<GameState> {
        let available = self.pile_count(action.pile);
        if !(1..=2).contains(&action.count) || u32::from(action.count) > available {
            return Err(Error::IllegalAction {
                pile: action.pile,
                count: action.count,
                available,
            });
        }

        let mut next = *self;
        match action.pile {
            Pile::Red => next.red -= u32::from(action.count),
            Pile::Blue => next.blue -= u32::from(action.count),
        }
        next.to_move = self.to_move.opponent();
        Ok(next)
    }

    /// Utility of a terminal state for `player`.
    ///
    /// The emptier is the player who made the move that emptied a pile, i.e.
    /// the opponent of `to_move` in the terminal state. Standard: the emptier
    /// loses (−9, opponent +9). Misere: the emptier wins. Utilities are
    /// zero-sum between the two players.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTerminal`] if both piles are still non-empty.
    pub fn utility(&self, player: Player) -> Result<i32> {
        if !self.is_terminal() {
            return Err(Error::NotTerminal {
                red: self.red,
                blue: self.blue,
            });
        }

        let emptier = self.to_move.opponent();
        let emptier_value = match self.variant {
            Variant::Standard => -UTILITY_MAGNITUDE,
            Variant::Misere => UTILITY_MAGNITUDE,
        };

        if player == emptier {
            Ok(emptier_value)
        } else {
            Ok(-emptier_value)
        }
    }
}
