//! gridplay - Grid Game Engine Library
//!
//! A game-state engine for two kinds of grid games: a turn-based win-line
//! match (submit moves, detect win/draw lines) and a tick-based growing-path
//! game (a host-driven clock advances the snake). The engine keeps cumulative
//! scores, unlockable achievements, and a best-effort persisted high score.
//!
//! The UI/host layer is out of scope: the engine renders nothing, never
//! blocks, and is driven entirely through the session facades in [`session`].

pub mod achievements;
pub mod board;
pub mod error;
pub mod persistence;
pub mod rules;
pub mod scoreboard;
pub mod session;
pub mod tick;
pub mod turn;

pub use achievements::{AchievementCategory, AchievementId, Achievements};
pub use board::{Board, Cell, Mark, Pos};
pub use error::{GameError, Result};
pub use persistence::{FileStore, MemoryStore, ScoreStore};
pub use rules::CollisionCause;
pub use scoreboard::ScoreBoard;
pub use session::{ArcadeSession, MatchSession};
pub use tick::{Direction, StepResult, TickGame, TickPhase};
pub use turn::{MatchStatus, MoveOutcome, TurnMatch};
