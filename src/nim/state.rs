//! Game state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Computer,
    Human,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::Computer => Player::Human,
            Player::Human => Player::Computer,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Computer => write!(f, "computer"),
            Player::Human => write!(f, "human"),
        }
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "computer" => Ok(Player::Computer),
            "human" => Ok(Player::Human),
            _ => Err(crate::Error::ParsePlayer {
                input: s.to_string(),
            }),
        }
    }
}

/// One of the two marble piles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    Red,
    Blue,
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pile::Red => write!(f, "red"),
            Pile::Blue => write!(f, "blue"),
        }
    }
}

impl FromStr for Pile {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "red" => Ok(Pile::Red),
            "blue" => Ok(Pile::Blue),
            _ => Err(crate::Error::ParsePile {
                input: s.to_string(),
            }),
        }
    }
}

/// Rule variant deciding whether emptying a pile loses or wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// The player who empties a pile loses
    Standard,
    /// The player who empties a pile wins
    Misere,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Standard => write!(f, "standard"),
            Variant::Misere => write!(f, "misere"),
        }
    }
}

impl FromStr for Variant {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Variant::Standard),
            "misere" | "misère" => Ok(Variant::Misere),
            _ => Err(crate::Error::ParseVariant {
                input: s.to_string(),
            }),
        }
    }
}

/// A move: which pile to take from and how many marbles (1 or 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub pile: Pile,
    pub count: u8,
}

impl Action {
    pub fn new(pile: Pile, count: u8) -> Self {
        Action { pile, count }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.pile, self.count)
    }
}

/// Complete game state: both pile counts, whose turn it is, and the rule
/// variant in force.
///
/// This type implements `Copy`; every transition produces a new state and
/// leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub red: u32,
    pub blue: u32,
    pub to_move: Player,
    pub variant: Variant,
}

impl GameState {
    /// Create the initial state from pile counts, variant, and first player
    pub fn new(red: u32, blue: u32, variant: Variant, first_player: Player) -> Self {
        GameState {
            red,
            blue,
            to_move: first_player,
            variant,
        }
    }

    /// Marbles remaining in the given pile
    pub fn pile_count(&self, pile: Pile) -> u32 {
        match pile {
            Pile::Red => self.red,
            Pile::Blue => self.blue,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Red marbles: {} | Blue marbles: {} | To move: {}",
            self.red, self.blue, self.to_move
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involutive() {
        assert_eq!(Player::Computer.opponent(), Player::Human);
        assert_eq!(Player::Human.opponent().opponent(), Player::Human);
    }

    #[test]
    fn parsing_accepts_known_names_case_insensitively() {
        assert_eq!("Red".parse::<Pile>().unwrap(), Pile::Red);
        assert_eq!("BLUE".parse::<Pile>().unwrap(), Pile::Blue);
        assert_eq!("misere".parse::<Variant>().unwrap(), Variant::Misere);
        assert_eq!("Computer".parse::<Player>().unwrap(), Player::Computer);
    }

    #[test]
    fn parsing_rejects_unknown_names() {
        assert!(matches!(
            "green".parse::<Pile>(),
            Err(crate::Error::ParsePile { .. })
        ));
        assert!(matches!(
            "normal".parse::<Variant>(),
            Err(crate::Error::ParseVariant { .. })
        ));
        assert!(matches!(
            "robot".parse::<Player>(),
            Err(crate::Error::ParsePlayer { .. })
        ));
    }

    #[test]
    fn display_matches_console_rendering() {
        let state = GameState::new(3, 4, Variant::Standard, Player::Computer);
        assert_eq!(
            state.to_string(),
            "Red marbles: 3 | Blue marbles: 4 | To move: computer"
        );
        assert_eq!(Action::new(Pile::Red, 2).to_string(), "(red, 2)");
    }
}
