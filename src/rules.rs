//! Pure rule evaluators: win-line detection and path collision checks.
//!
//! No side effects and no mutation; both entry points are callable on their
//! own for testing.

use crate::board::{Board, Mark, Pos};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A completed win line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWin {
    pub mark: Mark,
    pub line: Vec<Pos>,
}

/// Scan the board for a complete line: a full row, full column, or (on square
/// boards) either diagonal where every cell holds the same mark.
///
/// The scan order is fixed: rows top to bottom, then columns left to right,
/// then the main diagonal, then the anti-diagonal. The first complete line is
/// returned, so the winning line is reproducible even if a single move
/// completes two lines at once.
pub fn evaluate_lines(board: &Board) -> Option<LineWin> {
    for line in candidate_lines(board) {
        if let Some(win) = check_line(board, &line) {
            return Some(win);
        }
    }
    None
}

fn check_line(board: &Board, line: &[Pos]) -> Option<LineWin> {
    let first = board.get(line[0]).ok()??;
    for &pos in &line[1..] {
        if board.get(pos).ok()? != Some(first) {
            return None;
        }
    }
    Some(LineWin {
        mark: first,
        line: line.to_vec(),
    })
}

/// All candidate win lines in canonical order.
fn candidate_lines(board: &Board) -> Vec<Vec<Pos>> {
    let (rows, cols) = (board.rows(), board.cols());
    let mut lines = Vec::new();
    for row in 0..rows {
        lines.push((0..cols).map(|col| Pos::new(row, col)).collect());
    }
    for col in 0..cols {
        lines.push((0..rows).map(|row| Pos::new(row, col)).collect());
    }
    // Diagonals only exist on square boards
    if rows == cols {
        lines.push((0..rows).map(|i| Pos::new(i, i)).collect());
        lines.push((0..rows).map(|i| Pos::new(i, rows - 1 - i)).collect());
    }
    lines
}

/// Why a tick-game step ended the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionCause {
    Wall,
    SelfHit,
}

/// Classify the collision (if any) of moving a path's head to `next`.
///
/// `growing` means the tail stays put this step, so the whole body blocks;
/// otherwise the tail cell vacates and is excluded, which allows tail-chasing.
pub fn check_collision(
    path: &VecDeque<Pos>,
    next: Pos,
    rows: i16,
    cols: i16,
    growing: bool,
) -> Option<CollisionCause> {
    if next.row < 0 || next.row >= rows || next.col < 0 || next.col >= cols {
        return Some(CollisionCause::Wall);
    }
    let blocking = if growing {
        path.len()
    } else {
        path.len().saturating_sub(1)
    };
    if path.iter().take(blocking).any(|&seg| seg == next) {
        return Some(CollisionCause::SelfHit);
    }
    None
}
