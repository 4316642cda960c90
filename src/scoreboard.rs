//! Cumulative scoring across matches: win/draw counters and win streaks.

use crate::board::Mark;
use serde::{Deserialize, Serialize};

/// Per-session score totals. Lives across matches; reset only on an explicit
/// reset-all request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub wins_x: u32,
    pub wins_o: u32,
    pub draws: u32,
    pub streak_x: u32,
    pub streak_o: u32,
}

impl ScoreBoard {
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.wins_x,
            Mark::O => self.wins_o,
        }
    }

    pub fn streak(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.streak_x,
            Mark::O => self.streak_o,
        }
    }

    /// Record a won match: winner's counter and streak go up, the opponent's
    /// streak resets.
    pub fn record_win(&mut self, winner: Mark) {
        match winner {
            Mark::X => {
                self.wins_x += 1;
                self.streak_x += 1;
                self.streak_o = 0;
            }
            Mark::O => {
                self.wins_o += 1;
                self.streak_o += 1;
                self.streak_x = 0;
            }
        }
    }

    /// Record a drawn match: both streaks reset.
    pub fn record_draw(&mut self) {
        self.draws += 1;
        self.streak_x = 0;
        self.streak_o = 0;
    }

    pub fn reset(&mut self) {
        *self = ScoreBoard::default();
    }
}
