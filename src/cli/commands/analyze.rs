//! Analyze command - search a single position with every algorithm

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::cli::output;
use crate::nim::{GameState, Player, Variant};
use crate::search::{alpha_beta, alpha_beta_limited, minimax, SearchOutcome};

#[derive(Parser, Debug)]
#[command(about = "Report each search algorithm's choice for one position")]
pub struct AnalyzeArgs {
    /// Number of red marbles in the position
    pub red: u32,

    /// Number of blue marbles in the position
    pub blue: u32,

    /// Rule variant ("standard" or "misere")
    #[arg(long, default_value = "standard")]
    pub variant: Variant,

    /// Player to move; the search maximizes from this player's perspective
    #[arg(long, default_value = "computer")]
    pub to_move: Player,

    /// Also run depth-limited alpha-beta with this bound
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub depth: Option<u32>,

    /// Export the analysis to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Serialize)]
struct AnalysisExport {
    position: PositionSection,
    results: Vec<AlgorithmSection>,
}

#[derive(Serialize)]
struct PositionSection {
    red: u32,
    blue: u32,
    variant: Variant,
    to_move: Player,
}

#[derive(Serialize)]
struct AlgorithmSection {
    algorithm: String,
    #[serde(flatten)]
    outcome: SearchOutcome,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let state = GameState::new(args.red, args.blue, args.variant, args.to_move);

    output::print_section("Position");
    println!("{state}");
    println!("Variant: {}", args.variant);

    let mut results = vec![
        AlgorithmSection {
            algorithm: "minimax".to_string(),
            outcome: minimax(&state, args.to_move),
        },
        AlgorithmSection {
            algorithm: "alpha-beta".to_string(),
            outcome: alpha_beta(&state, args.to_move),
        },
    ];
    if let Some(depth) = args.depth {
        results.push(AlgorithmSection {
            algorithm: format!("alpha-beta (depth {depth})"),
            outcome: alpha_beta_limited(&state, args.to_move, depth),
        });
    }

    for section in &results {
        output::print_section(&section.algorithm);
        let chosen = match section.outcome.action {
            Some(action) => action.to_string(),
            None => "none (terminal position)".to_string(),
        };
        output::print_kv("Best action", &chosen);
        output::print_kv("Value", &section.outcome.value.to_string());
        output::print_kv("Nodes visited", &section.outcome.stats.nodes.to_string());
        output::print_kv("Cutoffs", &section.outcome.stats.cutoffs.to_string());
    }

    if let Some(export_path) = &args.export {
        let export = AnalysisExport {
            position: PositionSection {
                red: args.red,
                blue: args.blue,
                variant: args.variant,
                to_move: args.to_move,
            },
            results,
        };
        write_export(&export, export_path)?;
        println!("\nAnalysis exported to: {}", export_path.display());
    }

    Ok(())
}

fn write_export(export: &AnalysisExport, path: &Path) -> crate::Result<()> {
    let file = std::fs::File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create export file '{}'", path.display()),
        source,
    })?;
    serde_json::to_writer_pretty(file, export)?;
    Ok(())
}
