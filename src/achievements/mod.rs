//! Achievement system module.
//!
//! Tracks monotonic, unlockable badges derived from match history and arcade
//! scores. Once unlocked, an achievement is never revoked; the set is cleared
//! only by an explicit reset-all request.

pub mod data;
pub mod types;

pub use data::{achievement_def, ALL_ACHIEVEMENTS};
pub use types::{AchievementCategory, AchievementId, Achievements};
