//! Bottom-up minimax evaluation of a built game tree
//!
//! The default order flattens the tree, sorts nodes by depth (deepest first)
//! and scores each node once, so every child is scored before its parent even
//! when leaves sit at different depths. A recursive post-order walk is
//! available as an equivalent alternative.

use std::cmp::Reverse;

use tracing::{debug, instrument, trace};

use super::{GameTree, NodeId, Player, Score};
use crate::{
    app::EvaluationOrder,
    error::{Error, Result},
    utils::is_uniform,
};

/// Score every node of `tree` and return the root's value
pub fn evaluate_tree(tree: &mut GameTree) -> Result<Score> {
    let root = tree.root();
    evaluate_subtree(tree, root)
}

/// Score every node under `from` in depth-descending order
#[instrument(level = "debug", skip(tree), fields(nodes = tree.len()))]
pub fn evaluate_subtree(tree: &mut GameTree, from: NodeId) -> Result<Score> {
    let mut order = tree.flatten(from, 0);
    order.sort_by_key(|&(_, depth)| Reverse(depth));

    for &(id, _) in &order {
        analyze(tree, id)?;
    }

    let value = root_value(tree, from)?;
    debug!(%value, evaluated = order.len(), "evaluated tree");
    Ok(value)
}

/// Score every node with a recursive children-then-self walk
pub fn evaluate_post_order(tree: &mut GameTree) -> Result<Score> {
    let root = tree.root();
    visit_post_order(tree, root)?;
    root_value(tree, root)
}

fn visit_post_order(tree: &mut GameTree, id: NodeId) -> Result<()> {
    for index in 0..tree.children(id).len() {
        let child = tree.children(id)[index];
        visit_post_order(tree, child)?;
    }
    analyze(tree, id)
}

/// Evaluate with the requested traversal order
pub fn evaluate_with(tree: &mut GameTree, order: EvaluationOrder) -> Result<Score> {
    match order {
        EvaluationOrder::DepthSorted => evaluate_tree(tree),
        EvaluationOrder::PostOrder => evaluate_post_order(tree),
    }
}

fn root_value(tree: &GameTree, id: NodeId) -> Result<Score> {
    tree.value(id).ok_or_else(|| Error::EvaluationIncomplete {
        node: tree.board(id).encode(),
    })
}

/// Assign the value of a single node whose children are already scored
fn analyze(tree: &mut GameTree, id: NodeId) -> Result<()> {
    let node = tree.node(id);
    if node.value().is_some() {
        return Ok(());
    }

    let board = *node.board();
    let mut values = Vec::with_capacity(node.children().len());
    for &child in node.children() {
        let value = tree.value(child).ok_or_else(|| Error::UnevaluatedChild {
            node: board.encode(),
            child: tree.board(child).encode(),
        })?;
        values.push(value);
    }

    let value = if let Some(winner) = board.winner() {
        Some(Score::win_for(winner))
    } else if board.is_filled() {
        Some(Score::Draw)
    } else {
        aggregate(board.turn(), &values)
    };

    let value = value.ok_or_else(|| Error::EvaluationIncomplete {
        node: board.encode(),
    })?;
    trace!(board = %board.encode(), %value, "scored node");
    tree.set_value(id, value);
    Ok(())
}

/// Minimax aggregation of child values for the player to move.
///
/// Identical values are passed through; otherwise the mover takes the best
/// value present in their preference order. Returns `None` for no children.
pub fn aggregate(turn: Player, values: &[Score]) -> Option<Score> {
    let &first = values.first()?;
    if is_uniform(values) {
        return Some(first);
    }

    Score::preference_order(turn)
        .into_iter()
        .find(|score| values.contains(score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Board;

    #[test]
    fn aggregate_prefers_wins_for_the_mover() {
        let values = [Score::MinimizerWin, Score::Draw, Score::MaximizerWin];
        assert_eq!(aggregate(Player::X, &values), Some(Score::MaximizerWin));
        assert_eq!(aggregate(Player::O, &values), Some(Score::MinimizerWin));
    }

    #[test]
    fn aggregate_falls_back_to_draw() {
        let values = [Score::MinimizerWin, Score::Draw];
        assert_eq!(aggregate(Player::X, &values), Some(Score::Draw));

        let values = [Score::MaximizerWin, Score::Draw];
        assert_eq!(aggregate(Player::O, &values), Some(Score::Draw));
    }

    #[test]
    fn aggregate_passes_uniform_values_through() {
        let values = [Score::MinimizerWin; 4];
        assert_eq!(aggregate(Player::X, &values), Some(Score::MinimizerWin));
        assert_eq!(aggregate(Player::O, &[]), None);
    }

    #[test]
    fn aggregate_matches_plain_max_and_min() {
        let all = [Score::MinimizerWin, Score::Draw, Score::MaximizerWin];
        for mask in 1u8..8 {
            let values: Vec<_> = all
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, &s)| s)
                .collect();
            assert_eq!(aggregate(Player::X, &values), values.iter().copied().max());
            assert_eq!(aggregate(Player::O, &values), values.iter().copied().min());
        }
    }

    #[test]
    fn winning_move_is_found_for_the_minimizer() {
        let mut tree = GameTree::build(Board::from_string("OO./XX./X..:O").unwrap());
        assert_eq!(evaluate_tree(&mut tree).unwrap(), Score::MinimizerWin);
    }

    #[test]
    fn unexpanded_root_is_incomplete() {
        let mut tree = GameTree::new(Board::default());
        let err = evaluate_tree(&mut tree).unwrap_err();
        assert!(matches!(err, Error::EvaluationIncomplete { .. }));
    }

    #[test]
    fn out_of_order_analysis_reports_the_child() {
        let mut tree = GameTree::build(Board::from_string("OXO/X.X/.O.:X").unwrap());
        let root = tree.root();
        let err = analyze(&mut tree, root).unwrap_err();
        assert!(matches!(err, Error::UnevaluatedChild { .. }));
        assert_eq!(tree.value(root), None);
    }

    #[test]
    fn evaluating_twice_keeps_values() {
        let mut tree = GameTree::build(Board::from_string("OX./.X./...:O").unwrap());
        let first = evaluate_tree(&mut tree).unwrap();
        let snapshot: Vec<_> = tree.ids().map(|id| tree.value(id)).collect();
        let second = evaluate_tree(&mut tree).unwrap();
        assert_eq!(first, second);
        let again: Vec<_> = tree.ids().map(|id| tree.value(id)).collect();
        assert_eq!(snapshot, again);
    }

    #[test]
    fn orders_agree_on_a_midgame_position() {
        let board = Board::from_string("X../.O./...:X").unwrap();
        let mut sorted = GameTree::build(board);
        let mut post = GameTree::build(board);
        assert_eq!(
            evaluate_with(&mut sorted, EvaluationOrder::DepthSorted).unwrap(),
            evaluate_with(&mut post, EvaluationOrder::PostOrder).unwrap()
        );
        for id in sorted.ids() {
            assert_eq!(sorted.value(id), post.value(id));
        }
    }
}
