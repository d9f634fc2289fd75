//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while play continues
    pub fn of(board: &Board) -> Option<Self> {
        match board.winner() {
            Some(winner) => Some(GameOutcome::Win(winner)),
            None if board.is_filled() => Some(GameOutcome::Draw),
            None => None,
        }
    }
}

/// A game in progress with its history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    initial: Board,
    current: Board,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a game from `initial`, which may already be partly filled
    pub fn new(initial: Board) -> Self {
        Game {
            initial,
            current: initial,
            moves: Vec::new(),
            outcome: GameOutcome::of(&initial),
        }
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    /// Get current board state
    pub fn current(&self) -> &Board {
        &self.current
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play a move for the player to move
    ///
    /// # Errors
    ///
    /// Returns error if the game is over, the position is off the board, or
    /// the cell is occupied. The game is unchanged on error.
    pub fn play(&mut self, row: usize, col: usize) -> Result<Board, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.current.turn();
        let next = self.current.place(row, col)?;

        self.moves.push(Move { row, col, player });
        self.current = next;
        self.outcome = GameOutcome::of(&next);

        Ok(next)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_moves_and_alternates() {
        let mut game = Game::default();
        game.play(1, 1).unwrap();
        game.play(0, 0).unwrap();

        assert_eq!(
            game.moves(),
            &[
                Move {
                    row: 1,
                    col: 1,
                    player: Player::O
                },
                Move {
                    row: 0,
                    col: 0,
                    player: Player::X
                },
            ]
        );
        assert_eq!(game.current().turn(), Player::O);
        assert!(!game.is_over());
    }

    #[test]
    fn detects_win_and_blocks_further_play() {
        let mut game = Game::new(Board::from_string("OO./XX./...:O").unwrap());
        game.play(0, 2).unwrap();
        assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::O)));
        assert!(matches!(game.play(2, 2), Err(crate::Error::GameOver)));
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn detects_draw() {
        let mut game = Game::new(Board::from_string("XOX/XOO/OX.:X").unwrap());
        game.play(2, 2).unwrap();
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn invalid_input_leaves_game_unchanged() {
        let mut game = Game::new(Board::from_string("O........:X").unwrap());
        assert!(game.play(0, 0).is_err());
        assert!(game.play(0, 5).is_err());
        assert!(game.moves().is_empty());
        assert_eq!(game.current(), game.initial());
    }

    #[test]
    fn finished_start_position_is_over() {
        let game = Game::new(Board::from_string("XXX/OO./...").unwrap());
        assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::X)));
    }
}
