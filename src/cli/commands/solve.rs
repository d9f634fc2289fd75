//! Solve command - evaluate a position and rank every move

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::{PositionArgs, SolverArgs},
        output::{create_spinner, describe_score, print_kv, print_section},
    },
    solver::{MoveEvaluation, Solver},
    tictactoe::{Player, Score},
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Compute the minimax value of a position and rank its moves")]
pub struct SolveArgs {
    #[command(flatten)]
    pub position: PositionArgs,

    #[command(flatten)]
    pub solver: SolverArgs,

    /// Export the analysis to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub board: String,
    pub turn: Player,
    pub value: Score,
    pub nodes: usize,
    pub moves: Vec<MoveEvaluation>,
    pub chosen: Option<MoveEvaluation>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let report = analyze(&args)?;

    print_section("Position");
    print!("{}", args.position.resolve()?);
    print_kv("To move", &report.turn.to_string());
    print_kv("Tree size", &report.nodes.to_string());
    print_kv("Value", &format!("{} ({})", report.value, describe_score(report.value)));

    if report.moves.is_empty() {
        println!("\n  (position is terminal)");
    } else {
        print_section("Moves");
        for mv in &report.moves {
            let marker = if report.chosen == Some(*mv) { "  <- chosen" } else { "" };
            println!(
                "  row {}, col {}: {:>2}{marker}",
                mv.row,
                mv.col,
                mv.score.as_i8()
            );
        }
    }

    if let Some(path) = &args.export {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &report)?;
        println!("\nAnalysis exported to: {}", path.display());
    }

    Ok(())
}

/// Solve the requested position without printing anything
pub fn analyze(args: &SolveArgs) -> Result<SolveReport> {
    let board = args.position.resolve()?;
    let mut solver = Solver::new(args.solver.resolve()?);

    let spinner = create_spinner("Building and evaluating the game tree...");
    let tree = solver.solve(board)?;
    spinner.finish_and_clear();

    let root = tree.root();
    let value = tree
        .value(root)
        .context("root was not evaluated")?;
    let moves = Solver::ranked_moves(&tree, root)?;
    let chosen = solver.choose_move(&tree, root)?;

    Ok(SolveReport {
        board: board.encode(),
        turn: board.turn(),
        value,
        nodes: tree.len(),
        moves,
        chosen,
    })
}
