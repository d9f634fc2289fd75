//! Tic-Tac-Toe board model, game tree and minimax evaluation

pub mod board;
pub mod evaluation;
pub mod game;
pub mod game_tree;
pub mod lines;
pub mod score;
pub mod snapshot;

pub use board::{Board, Cell, Player, SIZE};
pub use evaluation::{
    aggregate, evaluate_post_order, evaluate_subtree, evaluate_tree, evaluate_with,
};
pub use game::{Game, GameOutcome, Move};
pub use game_tree::{GameTree, Node, NodeId};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use score::Score;
pub use snapshot::{BoardSnapshot, render_tree};
