//! Turn-based match logic: move validation, win/draw evaluation.

use super::types::{MatchStatus, TurnMatch};
use crate::board::{Mark, Pos};
use crate::error::{GameError, Result};
use crate::rules::evaluate_lines;
use rand::seq::SliceRandom;
use rand::Rng;

/// What a successfully applied move did, for the host to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Mark placed; it is now `next`'s turn.
    Placed { next: Mark },
    /// Mark placed and it completed this line.
    Won { line: Vec<Pos> },
    /// Mark placed and the board filled up with no line.
    Draw,
}

/// Submit a move for `mark` at `pos`. One atomic state transition: on any
/// error the match is untouched.
pub fn submit_move(game: &mut TurnMatch, pos: Pos, mark: Mark) -> Result<MoveOutcome> {
    if game.is_over() {
        return Err(GameError::MatchOver);
    }
    if mark != game.current_mark {
        return Err(GameError::NotYourTurn);
    }
    if game.board.get(pos)?.is_some() {
        return Err(GameError::CellOccupied);
    }

    game.board.set(pos, Some(mark))?;
    game.move_history.push((pos, mark));
    game.last_move = Some(pos);
    game.turn_count += 1;

    if let Some(win) = evaluate_lines(&game.board) {
        game.status = MatchStatus::Win(win.mark);
        game.winning_line = Some(win.line.clone());
        return Ok(MoveOutcome::Won { line: win.line });
    }

    if game.turn_count == game.board.rows() as u32 * game.board.cols() as u32 {
        game.status = MatchStatus::Draw;
        return Ok(MoveOutcome::Draw);
    }

    game.current_mark = game.current_mark.opponent();
    Ok(MoveOutcome::Placed {
        next: game.current_mark,
    })
}

/// Pick a uniformly random empty cell, for a simple CPU opponent.
/// Returns `None` when the match is over or the board is full.
pub fn random_move<R: Rng>(game: &TurnMatch, rng: &mut R) -> Option<Pos> {
    if game.is_over() {
        return None;
    }
    game.board.empty_positions().choose(rng).copied()
}
