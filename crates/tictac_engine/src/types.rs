//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (always moves first).
    #[serde(alias = "x")]
    X,
    /// Player O (moves second).
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Who is allowed to trigger the search procedure.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// Both sides are driven by the caller.
    HumanVsHuman,
    /// One side is played by the engine's search.
    #[default]
    HumanVsComputer,
}

impl GameMode {
    /// Returns the other mode.
    pub fn toggle(self) -> Self {
        match self {
            Self::HumanVsHuman => Self::HumanVsComputer,
            Self::HumanVsComputer => Self::HumanVsHuman,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Reasons a mark cannot be written to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Index is not in `0..9`.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),
    /// Square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Writes `player`'s mark into an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfRange`] for an index past the board and
    /// [`PlaceError::Occupied`] if the square already holds a mark. The
    /// board is unchanged on error.
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), PlaceError> {
        match self.squares.get_mut(index) {
            None => Err(PlaceError::OutOfRange(index)),
            Some(Square::Occupied(_)) => Err(PlaceError::Occupied(index)),
            Some(square) => {
                *square = Square::Occupied(player);
                Ok(())
            }
        }
    }

    /// Returns a copy of the board with `player` on an index known to be empty.
    pub(crate) fn with_mark(mut self, index: usize, player: Player) -> Self {
        self.squares[index] = Square::Occupied(player);
        self
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Empty indices in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELLS).filter(|&index| self.is_empty(index))
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&square| square == Square::Occupied(player))
            .count()
    }

    /// Number of non-empty squares.
    pub fn filled(&self) -> usize {
        CELLS - self.empty_cells().count()
    }

    /// The side to move if the board was reached by alternating play from
    /// an empty board.
    pub fn side_to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.squares[index] {
                    Square::Empty => (index + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Failure to read a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character that is neither a mark nor an empty marker.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidCell(#[error(not(source))] char),
    /// The text did not describe exactly nine cells.
    #[display("Board must have 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Reads nine cells: `X`/`O` (any case) for marks, `.`, `-` or `_` for
    /// empty. Whitespace and `|` are separators and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(CELLS);
        for c in s.chars() {
            let square = match c {
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                '|' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(BoardParseError::InvalidCell(other)),
            };
            squares.push(square);
        }

        let found = squares.len();
        let squares: [Square; CELLS] = squares
            .try_into()
            .map_err(|_| BoardParseError::WrongLength(found))?;
        Ok(Self { squares })
    }
}

/// Running score across completed games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl ScoreTally {
    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Drawn games recorded.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Total completed games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }

    pub(crate) fn record_tie(&mut self) {
        self.ties += 1;
    }
}
