//! Move selection on top of the full game tree.
//!
//! A [`Solver`] builds and evaluates the tree for a position, then reads the
//! scored children of the root to pick the next move.

use std::time::Instant;

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    app::{SolverConfig, TieBreak},
    error::{Error, Result},
    tictactoe::{Board, GameTree, NodeId, Score, evaluate_with},
};

/// A candidate move and the value it leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveEvaluation {
    pub row: usize,
    pub col: usize,
    pub score: Score,
    #[serde(skip)]
    pub node: NodeId,
}

/// Builds, evaluates and picks moves
pub struct Solver {
    config: SolverConfig,
    rng: StdRng,
}

impl std::fmt::Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("config", &self.config)
            .finish()
    }
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        let rng = match config.seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Build the full tree under `board` and score every node
    #[instrument(level = "debug", skip(self, board), fields(board = %board.encode()))]
    pub fn solve(&self, board: Board) -> Result<GameTree> {
        let started = Instant::now();
        let mut tree = GameTree::build(board);
        let value = evaluate_with(&mut tree, self.config.order)?;
        debug!(
            nodes = tree.len(),
            %value,
            order = %self.config.order,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "solved position"
        );
        Ok(tree)
    }

    /// Every move from `id` with its value, in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnevaluatedChild`] if a child has not been scored.
    pub fn ranked_moves(tree: &GameTree, id: NodeId) -> Result<Vec<MoveEvaluation>> {
        let board = tree.board(id);
        tree.children(id)
            .iter()
            .map(|&child| {
                let child_board = tree.board(child);
                let score = tree.value(child).ok_or_else(|| Error::UnevaluatedChild {
                    node: board.encode(),
                    child: child_board.encode(),
                })?;
                let (row, col) =
                    board
                        .changed_cell(child_board)
                        .ok_or_else(|| Error::InvalidConfiguration {
                            message: format!(
                                "child {} of {} does not differ from its parent",
                                child_board.encode(),
                                board.encode()
                            ),
                        })?;
                Ok(MoveEvaluation {
                    row,
                    col,
                    score,
                    node: child,
                })
            })
            .collect()
    }

    /// The moves from `id` with the best value for the player to move
    pub fn best_moves(tree: &GameTree, id: NodeId) -> Result<Vec<MoveEvaluation>> {
        let moves = Self::ranked_moves(tree, id)?;
        let scores = moves.iter().map(|mv| mv.score);
        let best = if tree.board(id).turn().is_maximizer() {
            scores.max()
        } else {
            scores.min()
        };

        Ok(match best {
            Some(best) => moves.into_iter().filter(|mv| mv.score == best).collect(),
            None => Vec::new(),
        })
    }

    /// Pick one optimal move from `id`, `None` on a terminal position
    pub fn choose_move(&mut self, tree: &GameTree, id: NodeId) -> Result<Option<MoveEvaluation>> {
        let best = Self::best_moves(tree, id)?;
        let choice = match self.config.tie_break {
            TieBreak::First => best.first().copied(),
            TieBreak::Random => best.choose(&mut self.rng).copied(),
        };

        if let Some(mv) = choice {
            info!(
                row = mv.row,
                col = mv.col,
                score = %mv.score,
                candidates = best.len(),
                "chose move"
            );
        }
        Ok(choice)
    }

    /// Re-root `tree` on the root child whose board equals `board`.
    ///
    /// Returns `None` when no child matches, e.g. when `board` was not reached
    /// by a single move from the root.
    pub fn advance(tree: GameTree, board: &Board) -> Option<GameTree> {
        let root = tree.root();
        let child = tree
            .children(root)
            .iter()
            .copied()
            .find(|&child| tree.board(child) == board)?;
        Some(tree.into_subtree(child))
    }
}
