//! Turn-based match data structures.

use crate::board::{Board, Mark, Pos};
use serde::{Deserialize, Serialize};

/// Match status. Transitions once from `InProgress` to a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    InProgress,
    Win(Mark),
    Draw,
}

/// State of one turn-based match. Caller-owned; the controller in
/// [`super::logic`] is the only mutator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnMatch {
    pub board: Board,
    /// Whose turn it is.
    pub current_mark: Mark,
    /// Who moved first this match (starter rotation lives in the session).
    pub starting_mark: Mark,
    /// Moves played so far.
    pub turn_count: u32,
    pub status: MatchStatus,
    /// Completed line positions, for highlight rendering on game over.
    pub winning_line: Option<Vec<Pos>>,
    /// Last move position for highlighting.
    pub last_move: Option<Pos>,
    /// Move history for display.
    pub move_history: Vec<(Pos, Mark)>,
}

impl TurnMatch {
    /// Create a fresh match on an empty board.
    pub fn new(rows: i16, cols: i16, starting_mark: Mark) -> Self {
        Self {
            board: Board::new(rows, cols),
            current_mark: starting_mark,
            starting_mark,
            turn_count: 0,
            status: MatchStatus::InProgress,
            winning_line: None,
            last_move: None,
            move_history: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != MatchStatus::InProgress
    }
}
