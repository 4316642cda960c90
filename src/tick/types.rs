//! Tick-based game data structures.
//!
//! A growing-path game: the snake eats food, grows, and speeds up. The host
//! owns the clock and calls [`super::logic::advance`] at its own cadence.

use crate::board::Pos;
use crate::rules::CollisionCause;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Suggested step interval before any level-ups, in milliseconds.
pub const BASE_TICK_MS: u64 = 160;
/// The interval never drops below this, no matter the level.
pub const MIN_TICK_MS: u64 = 60;
/// Growth events per level-up.
pub const LEVEL_UP_FOOD: u32 = 5;

/// Cardinal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (d_row, d_col) delta for this direction.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Game phase. `Won` and `GameOver` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickPhase {
    /// Created but not started; the clock should not run.
    Idle,
    Running,
    Paused,
    /// The path filled the whole board.
    Won,
    GameOver(CollisionCause),
}

/// Main tick-game state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickGame {
    pub rows: i16,
    pub cols: i16,
    /// Body segments, head at the front (index 0).
    pub snake: VecDeque<Pos>,
    /// Current movement direction.
    pub direction: Direction,
    /// Buffered next direction, applied at the next step.
    pub next_direction: Direction,
    /// Food position; `None` only once the board is full.
    pub food: Option<Pos>,
    pub score: u32,
    pub level: u32,
    /// Suggested interval between steps. Shrinks on level-up; advisory only,
    /// the host owns the actual clock.
    pub tick_interval_ms: u64,
    pub phase: TickPhase,
    /// Total steps taken.
    pub steps: u64,
    /// Consecutive growth steps without a plain move in between.
    pub streak: u32,
}

impl TickGame {
    /// Create a new game: 3-segment snake at the grid center moving right,
    /// food at a random free cell, phase `Idle`.
    pub fn new<R: Rng>(rows: i16, cols: i16, rng: &mut R) -> Self {
        assert!(
            rows >= 3 && cols >= 5,
            "grid too small for the initial snake"
        );
        let center = Pos::new(rows / 2, cols / 2);
        let snake: VecDeque<Pos> = (0..3).map(|i| Pos::new(center.row, center.col - i)).collect();

        let mut game = Self {
            rows,
            cols,
            snake,
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: None,
            score: 0,
            level: 1,
            tick_interval_ms: BASE_TICK_MS,
            phase: TickPhase::Idle,
            steps: 0,
            streak: 0,
        };
        game.food = spawn_food(&game, rng);
        game
    }

    pub fn head(&self) -> Pos {
        self.snake[0]
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, TickPhase::Won | TickPhase::GameOver(_))
    }
}

/// Pick a uniformly random free cell for food. `None` when the path covers
/// the whole grid.
pub fn spawn_food<R: Rng>(game: &TickGame, rng: &mut R) -> Option<Pos> {
    let mut free = Vec::new();
    for row in 0..game.rows {
        for col in 0..game.cols {
            let pos = Pos::new(row, col);
            if !game.snake.contains(&pos) {
                free.push(pos);
            }
        }
    }
    free.choose(rng).copied()
}
