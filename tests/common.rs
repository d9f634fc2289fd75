//! Common helpers for the tictree integration tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use tictree::{
    Board, GameTree, NodeId, Score,
    tictactoe::{Player, evaluate_tree},
};

/// Build and evaluate the full tree under the board written as `text`
pub fn solved(text: &str) -> GameTree {
    let board = Board::from_string(text).expect("valid board string");
    let mut tree = GameTree::build(board);
    evaluate_tree(&mut tree).expect("evaluation succeeds");
    tree
}

/// Evaluated tree of every game from the empty board, O moving first.
///
/// Built once per test binary since it holds over half a million nodes.
pub fn full_tree() -> &'static GameTree {
    static TREE: OnceLock<GameTree> = OnceLock::new();
    TREE.get_or_init(|| {
        let mut tree = GameTree::build(Board::default());
        evaluate_tree(&mut tree).expect("evaluation succeeds");
        tree
    })
}

/// Minimax value expected at `id` given the values of its children
pub fn expected_value(tree: &GameTree, id: NodeId) -> Score {
    let board = tree.board(id);
    if tree.children(id).is_empty() {
        return board.winner().map_or(Score::Draw, Score::win_for);
    }

    let values = tree
        .children(id)
        .iter()
        .map(|&child| tree.value(child).expect("child evaluated"));
    let best = match board.turn() {
        Player::X => values.max(),
        Player::O => values.min(),
    };
    best.expect("non-leaf has children")
}
