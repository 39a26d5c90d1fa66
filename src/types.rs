//! Core vocabulary types: marks, cells, statuses, and move outcomes.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// The symbol a player places on a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Mark {
    /// Mark X (goes first).
    X,
    /// Mark O (goes second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Contribution of this mark to a line counter.
    pub(crate) fn signed_unit(self) -> i32 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
        }
    }
}

impl TryFrom<char> for Mark {
    type Error = EngineError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'X' => Ok(Mark::X),
            'O' => Ok(Mark::O),
            other => Err(EngineError::InvalidMark(other)),
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns true when no mark occupies the cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Occupied(mark) => Some(mark),
            Cell::Empty => None,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Mark X completed a line.
    XWon,
    /// Mark O completed a line.
    OWon,
    /// Board filled with no winner.
    Draw,
    /// Game was force-terminated before a natural conclusion.
    Finished,
}

impl GameStatus {
    /// Returns true once the game accepts no further moves.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the winning mark, if the game was won.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    /// The won-status for the given mark.
    pub(crate) fn for_winner(mark: Mark) -> Self {
        match mark {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
        }
    }
}

/// Outcome of a move submission.
///
/// These are expected branches of normal play, not failures. Callers
/// branch on the value; no operational outcome is an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The move was applied.
    Success,
    /// Target cell is occupied or out of range.
    InvalidMove,
    /// The player is registered but it is not their turn.
    NotYourTurn,
    /// The game already reached a terminal status.
    GameOver,
    /// The player is not registered in the game.
    InvalidPlayer,
    /// No game exists under the given id.
    GameNotFound,
}

impl MoveOutcome {
    /// Returns true when the move was applied.
    pub fn is_success(self) -> bool {
        self == MoveOutcome::Success
    }
}
