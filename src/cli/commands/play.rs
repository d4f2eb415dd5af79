//! Play command - interactive Red-Blue Nim against the search engine

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::nim::{Action, GameState, Pile, Player, Variant};
use crate::search::{Algorithm, Searcher};

#[derive(Parser, Debug)]
#[command(about = "Play Red-Blue Nim against the computer")]
pub struct PlayArgs {
    /// Initial number of red marbles
    pub red: u32,

    /// Initial number of blue marbles
    pub blue: u32,

    /// Rule variant ("standard" or "misere")
    #[arg(long, default_value = "standard")]
    pub variant: Variant,

    /// Who moves first ("computer" or "human")
    #[arg(long, default_value = "computer")]
    pub first: Player,

    /// Search depth bound in plies; omit for full search
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub depth: Option<u32>,

    /// Search algorithm for full-depth play
    #[arg(long, default_value = "alpha-beta")]
    pub algorithm: Algorithm,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    if args.depth.is_some() && args.algorithm == Algorithm::Minimax {
        anyhow::bail!("--depth is only supported with --algorithm alpha-beta");
    }

    let searcher = Searcher::new(args.algorithm, args.depth);
    let mut state = GameState::new(args.red, args.blue, args.variant, args.first);

    println!("===== Red-Blue Nim =====");
    println!(
        "Variant: {} | First player: {} | Depth: {}",
        args.variant,
        args.first,
        match args.depth {
            Some(depth) => depth.to_string(),
            None => "full search".to_string(),
        }
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !state.is_terminal() {
        println!("\n{state}");

        let action = match state.to_move {
            Player::Human => prompt_human_action(&state, &mut lines)?,
            Player::Computer => {
                println!("Computer thinking...");
                let outcome = searcher.best_move(&state, Player::Computer);
                let action = outcome
                    .action
                    .expect("search on a non-terminal state yields an action");
                println!("Computer chooses: {action}");
                action
            }
        };

        state = state.apply(action)?;
    }

    println!("\n{state}");
    println!("===== Game Over =====");
    println!("Computer utility: {}", state.utility(Player::Computer)?);
    println!("Human utility: {}", state.utility(Player::Human)?);

    Ok(())
}

/// Prompt until the human enters a legal move.
///
/// Malformed input and illegal moves are reported and re-prompted; the
/// search core never sees free-form strings.
fn prompt_human_action(
    state: &GameState,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Action> {
    loop {
        let pile: Pile = match read_field("Choose pile (red/blue): ", lines)?.parse() {
            Ok(pile) => pile,
            Err(err) => {
                println!("Invalid input ({err})! Try again.\n");
                continue;
            }
        };

        let count = match parse_count(&read_field(
            "How many marbles to remove (1 or 2)? ",
            lines,
        )?) {
            Ok(count) => count,
            Err(err) => {
                println!("Invalid input ({err})! Try again.\n");
                continue;
            }
        };

        let action = Action::new(pile, count);
        if state.legal_actions().contains(&action) {
            return Ok(action);
        }
        println!("Invalid move! Try again.\n");
    }
}

fn read_field(
    prompt: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => anyhow::bail!("standard input closed before the game finished"),
    }
}

fn parse_count(input: &str) -> crate::Result<u8> {
    match input.parse::<u8>() {
        Ok(count @ 1..=2) => Ok(count),
        _ => Err(crate::Error::ParseCount {
            input: input.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_parser_accepts_only_one_or_two() {
        assert_eq!(parse_count("1").unwrap(), 1);
        assert_eq!(parse_count("2").unwrap(), 2);
        for bad in ["0", "3", "-1", "two", ""] {
            assert!(
                matches!(parse_count(bad), Err(crate::Error::ParseCount { .. })),
                "'{bad}' must be rejected"
            );
        }
    }

    #[test]
    fn prompt_reprompts_until_a_legal_move_arrives() {
        let state = GameState::new(1, 4, Variant::Standard, Player::Human);
        // "red 2" is illegal (one red marble left), "blue 2" is legal.
        let input = ["green", "red", "2", "blue", "2"];
        let mut lines = input.iter().map(|s| Ok::<_, io::Error>(s.to_string()));
        let action = prompt_human_action(&state, &mut lines).unwrap();
        assert_eq!(action, Action::new(Pile::Blue, 2));
    }

    #[test]
    fn prompt_fails_when_input_ends() {
        let state = GameState::new(2, 2, Variant::Standard, Player::Human);
        let mut lines = std::iter::empty::<io::Result<String>>();
        assert!(prompt_human_action(&state, &mut lines).is_err());
    }
}
