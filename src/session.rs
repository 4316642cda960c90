//! Host-facing session facades.
//!
//! A session owns one active game plus the trackers that outlive it: the
//! scoreboard, the achievement set, and (for the arcade game) the persisted
//! high score. One logical session per player surface; sessions are never
//! shared.

use crate::achievements::Achievements;
use crate::board::{Board, Mark, Pos};
use crate::error::Result;
use crate::persistence::{load_high_score, save_high_score, ScoreStore};
use crate::scoreboard::ScoreBoard;
use crate::tick::{self, Direction, StepResult, TickGame, TickPhase};
use crate::turn::{submit_move, MatchStatus, MoveOutcome, TurnMatch};
use rand::Rng;

/// Session around the turn-based match: scoreboard, badges, and the
/// starter-rotation policy.
#[derive(Debug, Clone)]
pub struct MatchSession {
    pub game: TurnMatch,
    pub scoreboard: ScoreBoard,
    pub achievements: Achievements,
    /// Alternate the starting mark after every completed match.
    pub swap_starter: bool,
    /// Optional display names, reported with unlocked achievements.
    pub player_x: Option<String>,
    pub player_o: Option<String>,
    rows: i16,
    cols: i16,
}

impl MatchSession {
    pub fn new(rows: i16, cols: i16) -> Self {
        Self {
            game: TurnMatch::new(rows, cols, Mark::X),
            scoreboard: ScoreBoard::default(),
            achievements: Achievements::default(),
            swap_starter: true,
            player_x: None,
            player_o: None,
            rows,
            cols,
        }
    }

    fn player_name(&self, mark: Mark) -> Option<&str> {
        match mark {
            Mark::X => self.player_x.as_deref(),
            Mark::O => self.player_o.as_deref(),
        }
    }

    fn corners(&self) -> [Pos; 4] {
        [
            Pos::new(0, 0),
            Pos::new(0, self.cols - 1),
            Pos::new(self.rows - 1, 0),
            Pos::new(self.rows - 1, self.cols - 1),
        ]
    }

    /// Submit a move and, on a terminal outcome, update the scoreboard and
    /// re-evaluate achievements. Streaks update before badge predicates run.
    pub fn submit_move(&mut self, pos: Pos, mark: Mark) -> Result<MoveOutcome> {
        let outcome = submit_move(&mut self.game, pos, mark)?;
        match &outcome {
            MoveOutcome::Won { line } => {
                self.scoreboard.record_win(mark);
                let corners = self.corners();
                let name = match mark {
                    Mark::X => self.player_x.as_deref(),
                    Mark::O => self.player_o.as_deref(),
                };
                self.achievements.on_match_won(
                    mark,
                    line,
                    self.game.turn_count,
                    self.scoreboard.streak(mark),
                    &corners,
                    name,
                );
            }
            MoveOutcome::Draw => self.scoreboard.record_draw(),
            MoveOutcome::Placed { .. } => {}
        }
        Ok(outcome)
    }

    /// Start a fresh match. The starting mark swaps only when the previous
    /// match actually completed (abandoned matches keep the starter).
    /// `reset_all` additionally clears the scoreboard and achievements and
    /// restores X as the starter.
    pub fn new_match(&mut self, reset_all: bool) {
        let mut starter = self.game.starting_mark;
        if self.swap_starter && self.game.is_over() {
            starter = starter.opponent();
        }
        if reset_all {
            self.scoreboard.reset();
            self.achievements.reset();
            starter = Mark::X;
        }
        self.game = TurnMatch::new(self.rows, self.cols, starter);
    }

    // Query surface for the host.

    pub fn board(&self) -> &Board {
        &self.game.board
    }

    pub fn status(&self) -> MatchStatus {
        self.game.status
    }

    pub fn scoreboard(&self) -> &ScoreBoard {
        &self.scoreboard
    }

    pub fn achievements(&self) -> &Achievements {
        &self.achievements
    }
}

/// Session around the tick-based game: badges plus the persisted high score.
///
/// The random generator and the score store are injected, so hosts and tests
/// control both determinism and storage.
pub struct ArcadeSession<R: Rng, S: ScoreStore> {
    pub game: TickGame,
    pub achievements: Achievements,
    pub high_score: u32,
    pub player_name: Option<String>,
    store: S,
    rng: R,
    rows: i16,
    cols: i16,
}

impl<R: Rng, S: ScoreStore> ArcadeSession<R, S> {
    /// Create a session and load the persisted high score.
    pub fn new(rows: i16, cols: i16, mut rng: R, store: S) -> Self {
        let game = TickGame::new(rows, cols, &mut rng);
        let high_score = load_high_score(&store);
        Self {
            game,
            achievements: Achievements::default(),
            high_score,
            player_name: None,
            store,
            rng,
            rows,
            cols,
        }
    }

    pub fn start(&mut self) {
        tick::start(&mut self.game);
    }

    pub fn toggle_pause(&mut self) {
        tick::toggle_pause(&mut self.game);
    }

    pub fn set_direction(&mut self, dir: Direction) -> bool {
        tick::set_direction(&mut self.game, dir)
    }

    /// Advance one step, feed growth events to the achievement tracker, and
    /// persist a new high score best-effort.
    pub fn advance(&mut self) -> StepResult {
        let result = tick::advance(&mut self.game, &mut self.rng);
        if matches!(result, StepResult::Ate { .. } | StepResult::Won) {
            self.achievements
                .on_food_eaten(self.game.score, self.player_name.as_deref());
            if self.game.score > self.high_score {
                self.high_score = self.game.score;
                save_high_score(&mut self.store, self.high_score);
            }
        }
        result
    }

    /// Start a fresh run. The high score and achievements survive unless
    /// `reset_all` clears them.
    pub fn new_game(&mut self, reset_all: bool) {
        if reset_all {
            self.achievements.reset();
            self.high_score = 0;
        }
        self.game = TickGame::new(self.rows, self.cols, &mut self.rng);
    }

    pub fn phase(&self) -> TickPhase {
        self.game.phase
    }

    pub fn achievements(&self) -> &Achievements {
        &self.achievements
    }
}
