//! Exhaustive tic-tac-toe solver
//!
//! This crate provides:
//! - An immutable 3x3 board model with winner and full-board queries
//! - Construction of the complete game tree reachable from any position
//! - Bottom-up minimax evaluation of every node in that tree
//! - Move selection, a game session type and JSON/text dumps of subtrees
//! - The `tictree` command-line front end
//!
//! ```
//! use tictree::tictactoe::{Board, GameTree, Score, evaluate_tree};
//!
//! let mut tree = GameTree::build(Board::from_string("OXO/X.X/.O.:X")?);
//! assert_eq!(evaluate_tree(&mut tree)?, Score::MaximizerWin);
//! # Ok::<(), tictree::Error>(())
//! ```

pub mod app;
pub mod cli;
pub mod error;
pub mod solver;
pub mod tictactoe;
pub mod utils;

pub use app::{EvaluationOrder, SolverConfig, TieBreak};
pub use error::{Error, Result};
pub use solver::{MoveEvaluation, Solver};
pub use tictactoe::{Board, Cell, GameTree, NodeId, Player, Score};
