//! Dump command - print or export an evaluated subtree

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::config::{PositionArgs, SolverArgs},
    solver::Solver,
    tictactoe::{BoardSnapshot, render_tree},
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Dump the evaluated game tree as text or JSON")]
pub struct DumpArgs {
    #[command(flatten)]
    pub position: PositionArgs,

    /// Levels below the root to include
    #[arg(long, default_value_t = 1)]
    pub depth: usize,

    /// Include the whole tree (can be very large from early positions)
    #[arg(long, conflicts_with = "depth")]
    pub full: bool,

    /// Write a JSON snapshot to this file instead of printing text
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub solver: SolverArgs,
}

pub fn execute(args: DumpArgs) -> Result<()> {
    let board = args.position.resolve()?;
    let solver = Solver::new(args.solver.resolve()?);
    let tree = solver.solve(board)?;
    let max_depth = (!args.full).then_some(args.depth);

    match &args.output {
        Some(path) => {
            let snapshot = BoardSnapshot::capture_depth(&tree, tree.root(), max_depth);
            snapshot.write_json(path)?;
            println!(
                "Wrote {} boards to {}",
                snapshot.node_count(),
                path.display()
            );
        }
        None => print!("{}", render_tree(&tree, tree.root(), max_depth)),
    }

    Ok(())
}
