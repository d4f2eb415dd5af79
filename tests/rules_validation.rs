//! Test suite for the Red-Blue Nim rules engine
//! Validates action ordering, transition legality, and utility invariants

use rbnim::{Action, GameState, Pile, Player, Variant, UTILITY_MAGNITUDE};

fn all_states(max_red: u32, max_blue: u32) -> impl Iterator<Item = GameState> {
    let variants = [Variant::Standard, Variant::Misere];
    let movers = [Player::Computer, Player::Human];
    variants.into_iter().flat_map(move |variant| {
        movers.into_iter().flat_map(move |to_move| {
            (0..=max_red).flat_map(move |red| {
                (0..=max_blue).map(move |blue| GameState::new(red, blue, variant, to_move))
            })
        })
    })
}

mod action_ordering {
    use super::*;

    #[test]
    fn legal_actions_are_the_availability_filtered_ordering_table() {
        for state in all_states(6, 6) {
            let expected: Vec<Action> = if state.is_terminal() {
                Vec::new()
            } else {
                GameState::action_order(state.variant)
                    .iter()
                    .copied()
                    .filter(|a| state.pile_count(a.pile) >= u32::from(a.count))
                    .collect()
            };
            assert_eq!(
                state.legal_actions(),
                expected,
                "ordering mismatch at {state} ({})",
                state.variant
            );
        }
    }

    #[test]
    fn standard_prefers_red_two_then_blue_two_then_singles() {
        let state = GameState::new(2, 2, Variant::Standard, Player::Computer);
        assert_eq!(
            state.legal_actions().first(),
            Some(&Action::new(Pile::Red, 2))
        );
    }

    #[test]
    fn misere_ordering_reverses_the_standard_filtered_list() {
        for red in 0..=6 {
            for blue in 0..=6 {
                let standard =
                    GameState::new(red, blue, Variant::Standard, Player::Human).legal_actions();
                let mut misere =
                    GameState::new(red, blue, Variant::Misere, Player::Human).legal_actions();
                misere.reverse();
                assert_eq!(
                    standard, misere,
                    "misere must be the exact reverse at red={red}, blue={blue}"
                );
            }
        }
    }
}

mod transitions {
    use super::*;

    #[test]
    fn applying_a_legal_action_never_fails() {
        for state in all_states(6, 6) {
            for action in state.legal_actions() {
                let next = state
                    .apply(action)
                    .expect("legal action application should not fail");
                assert_eq!(next.to_move, state.to_move.opponent());
                assert_eq!(next.variant, state.variant);
                assert_eq!(
                    next.red + next.blue + u32::from(action.count),
                    state.red + state.blue,
                    "exactly {} marbles must disappear",
                    action.count
                );
            }
        }
    }

    #[test]
    fn overdraw_is_rejected_not_clamped() {
        let state = GameState::new(1, 1, Variant::Standard, Player::Human);
        for pile in [Pile::Red, Pile::Blue] {
            let err = state.apply(Action::new(pile, 2)).unwrap_err();
            assert!(
                matches!(&err, rbnim::Error::IllegalAction { count: 2, .. }),
                "removing 2 from a 1-marble pile must error, got {err}"
            );
        }
    }
}

mod utilities {
    use super::*;

    #[test]
    fn terminal_utilities_are_zero_sum_everywhere() {
        for state in all_states(6, 6).filter(GameState::is_terminal) {
            let computer = state.utility(Player::Computer).unwrap();
            let human = state.utility(Player::Human).unwrap();
            assert_eq!(computer, -human, "zero-sum violated at {state}");
            assert_eq!(computer.abs(), UTILITY_MAGNITUDE);
        }
    }

    #[test]
    fn variant_flips_the_sign_on_the_same_position() {
        // Human just emptied the red pile in both variants.
        let standard = GameState::new(0, 2, Variant::Standard, Player::Computer);
        let misere = GameState::new(0, 2, Variant::Misere, Player::Computer);
        assert_eq!(
            standard.utility(Player::Human).unwrap(),
            -misere.utility(Player::Human).unwrap(),
            "misere must be the exact sign flip of standard"
        );
    }

    #[test]
    fn utility_on_a_live_position_is_an_error() {
        let state = GameState::new(2, 3, Variant::Misere, Player::Computer);
        assert!(matches!(
            state.utility(Player::Computer),
            Err(rbnim::Error::NotTerminal { red: 2, blue: 3 })
        ));
    }
}
