//! Verify command - exhaustive cross-checks of the search algorithms

use anyhow::Result;
use clap::Parser;

use crate::cli::output;
use crate::nim::{GameState, Player, Variant};
use crate::search::{alpha_beta, alpha_beta_limited, minimax};

#[derive(Parser, Debug)]
#[command(about = "Exhaustively cross-check the search algorithms")]
pub struct VerifyArgs {
    /// Largest red pile included in the sweep
    #[arg(long, default_value_t = 5)]
    pub max_red: u32,

    /// Largest blue pile included in the sweep
    #[arg(long, default_value_t = 5)]
    pub max_blue: u32,
}

/// Sweep every state in the bounded box, for both variants and both movers,
/// checking that alpha-beta and depth-limited search agree with minimax and
/// that terminal utilities are zero-sum.
pub fn execute(args: VerifyArgs) -> Result<()> {
    let variants = [Variant::Standard, Variant::Misere];
    let movers = [Player::Computer, Player::Human];

    let total =
        u64::from(args.max_red + 1) * u64::from(args.max_blue + 1) * (variants.len() as u64) * (movers.len() as u64);
    let pb = output::create_sweep_progress(total);

    let mut minimax_nodes = 0u64;
    let mut alpha_beta_nodes = 0u64;

    for variant in variants {
        for to_move in movers {
            for red in 0..=args.max_red {
                for blue in 0..=args.max_blue {
                    let state = GameState::new(red, blue, variant, to_move);

                    let full = minimax(&state, to_move);
                    let pruned = alpha_beta(&state, to_move);
                    if full.value != pruned.value || full.action != pruned.action {
                        anyhow::bail!(
                            "alpha-beta disagrees with minimax at {state} ({variant}): \
                             {:?}/{} vs {:?}/{}",
                            full.action,
                            full.value,
                            pruned.action,
                            pruned.value
                        );
                    }

                    // Deep enough to reach every terminal from this state.
                    let deep = alpha_beta_limited(&state, to_move, red + blue + 1);
                    if deep.value != pruned.value || deep.action != pruned.action {
                        anyhow::bail!(
                            "depth-limited search with sufficient depth disagrees at {state} ({variant})"
                        );
                    }

                    if state.is_terminal() {
                        let computer = state.utility(Player::Computer)?;
                        let human = state.utility(Player::Human)?;
                        if computer + human != 0 {
                            anyhow::bail!("utilities are not zero-sum at {state} ({variant})");
                        }
                    }

                    minimax_nodes += full.stats.nodes;
                    alpha_beta_nodes += pruned.stats.nodes;
                    pb.inc(1);
                }
            }
        }
    }

    pb.finish_and_clear();

    output::print_section("Verification Results");
    output::print_kv("States checked", &total.to_string());
    output::print_kv("Minimax nodes", &minimax_nodes.to_string());
    output::print_kv("Alpha-beta nodes", &alpha_beta_nodes.to_string());
    output::print_kv(
        "Pruning factor",
        &format!("{:.2}x", minimax_nodes as f64 / alpha_beta_nodes as f64),
    );
    println!("\nAll checks passed.");

    Ok(())
}
