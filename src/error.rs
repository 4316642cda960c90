//! Engine error types.

use thiserror::Error;

/// Errors reported by the game engine.
///
/// `OutOfBounds` signals caller misuse (an index outside the grid) and is the
/// only kind a host should treat as a bug. The remaining variants are the
/// illegal-move family: ordinary rejected player actions that leave the match
/// untouched.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: i16, col: i16 },
    #[error("cell is already occupied")]
    CellOccupied,
    #[error("match is already over, no new moves are accepted")]
    MatchOver,
    #[error("it is not that mark's turn")]
    NotYourTurn,
}

impl GameError {
    /// True for rejected player actions (as opposed to caller misuse).
    pub fn is_illegal_move(&self) -> bool {
        !matches!(self, GameError::OutOfBounds { .. })
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
