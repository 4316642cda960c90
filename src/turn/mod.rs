//! Turn-based controller: a grid match advanced by discrete player moves.

pub mod logic;
pub mod types;

pub use logic::{random_move, submit_move, MoveOutcome};
pub use types::{MatchStatus, TurnMatch};
