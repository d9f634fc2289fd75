//! Play command - interactive game against the solver

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    cli::{
        config::{PositionArgs, SolverArgs},
        output::{create_spinner, describe_outcome},
        prompt::{parse_coordinates, prompt},
    },
    solver::Solver,
    tictactoe::{Board, Game, GameTree, Player},
    utils::random_mark,
};

/// Who opens a game on an empty board
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum FirstMover {
    O,
    X,
    Random,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Play tic-tac-toe against the solver")]
pub struct PlayArgs {
    #[command(flatten)]
    pub position: PositionArgs,

    /// Mark controlled by the human player
    #[arg(long, default_value = "X")]
    pub human: Player,

    /// Player who opens (o, x or random); overrides the turn of the start position
    #[arg(long, value_enum)]
    pub first: Option<FirstMover>,

    #[command(flatten)]
    pub solver: SolverArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run(args, &mut input, &mut output)?;
    Ok(())
}

/// Run a game reading human moves from `input`.
///
/// Returns the game as it stands when play ends, either finished or because
/// the input ran out.
pub fn run<R, W>(args: PlayArgs, input: &mut R, output: &mut W) -> Result<Game>
where
    R: BufRead,
    W: Write,
{
    let config = args.solver.resolve()?;
    let start = starting_board(&args, config.seed)?;
    let mut solver = Solver::new(config);
    let mut game = Game::new(start);
    let mut tree: Option<GameTree> = None;

    writeln!(output, "You play {}.", args.human)?;
    write!(output, "{}", game.current())?;

    while !game.is_over() {
        let board = *game.current();

        if board.turn() == args.human {
            let query = format!("{} to move, enter row col (0-2): ", board.turn());
            let Some(line) = prompt(input, output, &query)? else {
                writeln!(output, "\nInput closed, leaving the game.")?;
                return Ok(game);
            };
            let played = parse_coordinates(&line).and_then(|(row, col)| Ok(game.play(row, col)?));
            if let Err(err) = played {
                writeln!(output, "{err}")?;
                continue;
            }
        } else {
            let solved = match tree.take() {
                Some(existing) if existing.board(existing.root()) == &board => existing,
                _ => {
                    let spinner = create_spinner("Searching the game tree...");
                    let solved = solver.solve(board)?;
                    spinner.finish_and_clear();
                    solved
                }
            };
            let Some(mv) = solver.choose_move(&solved, solved.root())? else {
                break;
            };
            writeln!(
                output,
                "Computer ({}) plays row {}, col {} (value {})",
                board.turn(),
                mv.row,
                mv.col,
                mv.score
            )?;
            game.play(mv.row, mv.col)?;
            tree = Some(solved);
        }

        tree = tree.and_then(|solved| Solver::advance(solved, game.current()));
        write!(output, "{}", game.current())?;
    }

    if let Some(outcome) = game.outcome() {
        writeln!(output, "{}", describe_outcome(outcome))?;
    }
    Ok(game)
}

fn starting_board(args: &PlayArgs, seed: Option<u64>) -> Result<Board> {
    let board = args.position.resolve()?;
    let first = match args.first {
        None => return Ok(board),
        Some(FirstMover::O) => Player::O,
        Some(FirstMover::X) => Player::X,
        Some(FirstMover::Random) => {
            let mut rng = match seed {
                Some(value) => StdRng::seed_from_u64(value),
                None => StdRng::seed_from_u64(rand::random::<u64>()),
            };
            random_mark(&mut rng)
        }
    };
    Ok(board.with_turn(first))
}
