//! Tick-based controller: a growing-path game advanced by a host-driven clock.

pub mod logic;
pub mod types;

pub use logic::{advance, set_direction, start, toggle_pause, StepResult};
pub use types::{Direction, TickGame, TickPhase};
