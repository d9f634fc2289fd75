//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Width and height of the board
pub const SIZE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    O,
    X,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::O => 'O',
            Cell::X => 'X',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::O => Some(Player::O),
            Cell::X => Some(Player::X),
            Cell::Empty => None,
        }
    }
}

/// A player in the game.
///
/// `X` maximizes the minimax value and `O` minimizes it. Games start with `O`
/// to move unless a board says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Player {
    #[default]
    O,
    X,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn is_maximizer(self) -> bool {
        self == Player::X
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// A 3x3 grid plus the player to move.
///
/// Boards are plain values: every branch in the game tree works on its own
/// copy, so a mutation never leaks into a sibling. Tree bookkeeping (parent,
/// children, value) lives in [`GameTree`](super::GameTree) nodes, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; SIZE * SIZE],
    turn: Player,
}

impl Board {
    /// Create an empty board with `turn` to move
    pub fn new(turn: Player) -> Self {
        Board {
            cells: [Cell::Empty; SIZE * SIZE],
            turn,
        }
    }

    /// Create a board from a grid of rows
    pub fn from_rows(rows: [[Cell; SIZE]; SIZE], turn: Player) -> Self {
        let mut cells = [Cell::Empty; SIZE * SIZE];
        for (i, row) in rows.iter().enumerate() {
            cells[i * SIZE..(i + 1) * SIZE].copy_from_slice(row);
        }
        Board { cells, turn }
    }

    /// Parse a board such as `"OXO/X.X/.O."` or `"OXOX.X.O.:X"`.
    ///
    /// Whitespace, `/` and `|` are ignored. An optional `:X` or `:O` suffix
    /// sets the player to move; without it `O` moves.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 cells are given, if any character is not
    /// a cell, or if the suffix is not a player.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let (board_part, turn) = match s.split_once(':') {
            Some((board, suffix)) => (board, suffix.parse::<Player>()?),
            None => (s, Player::default()),
        };

        let chars: Vec<char> = board_part
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();
        if chars.len() != SIZE * SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: SIZE * SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; SIZE * SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells, turn })
    }

    /// The player to move
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell; SIZE * SIZE] {
        &self.cells
    }

    /// The grid as rows
    pub fn rows(&self) -> [[Cell; SIZE]; SIZE] {
        let mut rows = [[Cell::Empty; SIZE]; SIZE];
        for (i, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[i * SIZE..(i + 1) * SIZE]);
        }
        rows
    }

    /// Get the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 3 or larger.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < SIZE && col < SIZE, "({row}, {col}) is off the board");
        self.cells[row * SIZE + col]
    }

    /// Return a copy with `(row, col)` set to `cell`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 3 or larger.
    #[must_use = "set returns a new board; the original is unchanged"]
    pub fn set(mut self, row: usize, col: usize, cell: Cell) -> Self {
        assert!(row < SIZE && col < SIZE, "({row}, {col}) is off the board");
        self.cells[row * SIZE + col] = cell;
        self
    }

    /// Return a copy with the other player to move
    #[must_use = "pass_turn returns a new board; the original is unchanged"]
    pub fn pass_turn(mut self) -> Self {
        self.turn = self.turn.opponent();
        self
    }

    /// Return a copy with `turn` to move
    #[must_use = "with_turn returns a new board; the original is unchanged"]
    pub fn with_turn(mut self, turn: Player) -> Self {
        self.turn = turn;
        self
    }

    /// Place the mark of the player to move at `(row, col)` and pass the turn.
    ///
    /// This is the checked entry point for moves coming from outside the
    /// tree builder.
    ///
    /// # Errors
    ///
    /// Returns error if the position is off the board, already occupied, or
    /// the game is already over.
    pub fn place(&self, row: usize, col: usize) -> Result<Board, crate::Error> {
        if row >= SIZE || col >= SIZE {
            return Err(crate::Error::InvalidPosition { row, col });
        }
        if self.is_terminal() {
            return Err(crate::Error::GameOver);
        }
        if self.get(row, col) != Cell::Empty {
            return Err(crate::Error::CellOccupied { row, col });
        }

        Ok(self.set(row, col, self.turn.to_cell()).pass_turn())
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check whether every cell is occupied
    pub fn is_filled(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_filled()
    }

    /// Empty coordinates in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| (i / SIZE, i % SIZE))
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Find the first position where two boards differ (for naming moves)
    pub fn changed_cell(&self, other: &Board) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .position(|(a, b)| a != b)
            .map(|i| (i / SIZE, i % SIZE))
    }

    /// Compact label, e.g. `OXOX.X.O.:X`
    pub fn encode(&self) -> String {
        format!(
            "{}:{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.turn.to_char()
        )
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const DELIMITER: &str = " | ";
        let spacer = "-".repeat(DELIMITER.len() * (SIZE - 1) + SIZE + 4);

        writeln!(f, "{spacer}")?;
        for row in self.rows() {
            let marks: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => " ".to_string(),
                    other => other.to_char().to_string(),
                })
                .collect();
            writeln!(f, "| {} |", marks.join(DELIMITER))?;
            writeln!(f, "{spacer}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::default();
        assert_eq!(board.turn(), Player::O);
        assert_eq!(board.empty_cells().count(), 9);
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_filled());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_from_rows_matches_get() {
        use Cell::{Empty as E, O, X};
        let board = Board::from_rows([[O, X, O], [X, E, X], [E, O, E]], Player::X);
        assert_eq!(board.get(0, 0), Cell::O);
        assert_eq!(board.get(0, 1), Cell::X);
        assert_eq!(board.get(1, 1), Cell::Empty);
        assert_eq!(board.get(2, 1), Cell::O);
        assert_eq!(board.turn(), Player::X);
        assert_eq!(board.rows()[1], [X, E, X]);
    }

    #[test]
    fn test_set_leaves_original_untouched() {
        let board = Board::default();
        let next = board.set(1, 1, Cell::X);
        assert_eq!(board.get(1, 1), Cell::Empty);
        assert_eq!(next.get(1, 1), Cell::X);
        assert_eq!(next.turn(), board.turn());
    }

    #[test]
    fn test_copy_keeps_grid_and_turn() {
        let board = Board::from_string("OX.......:X").unwrap();
        let copy = board;
        let moved = copy.set(2, 2, Cell::O);
        assert_eq!(copy, board);
        assert_ne!(moved, board);
        assert_eq!(moved.turn(), Player::X);
    }

    #[test]
    fn test_place_alternates_turns() {
        let board = Board::new(Player::O);
        let board = board.place(0, 0).unwrap();
        assert_eq!(board.get(0, 0), Cell::O);
        assert_eq!(board.turn(), Player::X);

        let board = board.place(1, 1).unwrap();
        assert_eq!(board.get(1, 1), Cell::X);
        assert_eq!(board.turn(), Player::O);
    }

    #[test]
    fn test_place_rejects_bad_input() {
        let board = Board::from_string("O........").unwrap();
        assert!(matches!(
            board.place(3, 0),
            Err(crate::Error::InvalidPosition { row: 3, col: 0 })
        ));
        assert!(matches!(
            board.place(0, 0),
            Err(crate::Error::CellOccupied { row: 0, col: 0 })
        ));

        let won = Board::from_string("XXX......").unwrap();
        assert!(matches!(won.place(1, 1), Err(crate::Error::GameOver)));
    }

    #[test]
    fn test_win_detection_horizontal() {
        let board = Board::from_string("XXX/.../...").unwrap();
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_win_detection_vertical() {
        let board = Board::from_string("O../O../O..").unwrap();
        assert_eq!(board.winner(), Some(Player::O));
    }

    #[test]
    fn test_win_detection_diagonal() {
        let down = Board::from_string("X../.X./..X").unwrap();
        assert_eq!(down.winner(), Some(Player::X));

        let up = Board::from_string("..O/.O./O..").unwrap();
        assert_eq!(up.winner(), Some(Player::O));
    }

    #[test]
    fn test_empty_line_is_not_a_win() {
        let board = Board::from_string("OX./.../XO.").unwrap();
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_string("XOX/XOO/OXX").unwrap();
        assert!(board.is_filled());
        assert_eq!(board.winner(), None);
        assert!(board.is_terminal());
    }

    #[test]
    fn test_winner_and_filled_are_idempotent() {
        let board = Board::from_string("XOX/OXO/OX.").unwrap();
        let first = (board.winner(), board.is_filled());
        for _ in 0..3 {
            assert_eq!((board.winner(), board.is_filled()), first);
        }
    }

    #[test]
    fn test_from_string_with_turn_suffix() {
        let board = Board::from_string("O........:X").unwrap();
        assert_eq!(board.turn(), Player::X);

        let default_turn = Board::from_string("O........").unwrap();
        assert_eq!(default_turn.turn(), Player::O);
    }

    #[test]
    fn test_from_string_rejects_garbage() {
        assert!(matches!(
            Board::from_string("XO"),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            Board::from_string("XO?......"),
            Err(crate::Error::InvalidCellCharacter {
                character: '?',
                position: 2,
                ..
            })
        ));
        assert!(matches!(
            Board::from_string(".........:Z"),
            Err(crate::Error::InvalidPlayerString { .. })
        ));
    }

    #[test]
    fn test_encode() {
        let board = Board::from_string("XO.......:X").unwrap();
        assert_eq!(board.encode(), "XO.......:X");
        assert_eq!(Board::default().encode(), ".........:O");
        assert_eq!(Board::from_string(&board.encode()).unwrap(), board);
    }

    #[test]
    fn test_changed_cell() {
        let board = Board::default();
        let next = board.place(2, 1).unwrap();
        assert_eq!(board.changed_cell(&next), Some((2, 1)));
        assert_eq!(board.changed_cell(&board), None);
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("OXO/X.X/.O.").unwrap();
        let expected = "\
-------------
| O | X | O |
-------------
| X |   | X |
-------------
|   | O |   |
-------------
";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_player_parsing() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!(" O ".parse::<Player>().unwrap(), Player::O);
        assert!("Z".parse::<Player>().is_err());
        assert!(Player::X.is_maximizer());
        assert!(!Player::O.is_maximizer());
    }
}
