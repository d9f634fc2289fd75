//! tictree CLI - exhaustive tic-tac-toe solver
//!
//! - Play against a perfect opponent
//! - Solve a position and rank its moves
//! - Dump the evaluated game tree as text or JSON

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "tictree")]
#[command(version, about = "Exhaustive minimax solver for tic-tac-toe", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the solver
    Play(tictree::cli::commands::play::PlayArgs),

    /// Evaluate a position and rank its moves
    Solve(tictree::cli::commands::solve::SolveArgs),

    /// Print or export the evaluated game tree
    Dump(tictree::cli::commands::dump::DumpArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => tictree::cli::commands::play::execute(args),
        Commands::Solve(args) => tictree::cli::commands::solve::execute(args),
        Commands::Dump(args) => tictree::cli::commands::dump::execute(args),
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(filter),
    );

    if let Err(e) = subscriber.try_init() {
        eprintln!("Error: Failed to set up logging: {e}");
    }
}
