//! Achievement types and unlock predicates.

use crate::board::{Mark, Pos};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Achievement categories for organization in a browser UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementCategory {
    Match,
    Arcade,
}

impl AchievementCategory {
    /// All categories in display order.
    pub const ALL: [AchievementCategory; 2] =
        [AchievementCategory::Match, AchievementCategory::Arcade];

    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Match => "Match",
            AchievementCategory::Arcade => "Arcade",
        }
    }
}

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    // Match achievements
    FirstWin,
    ThreePeat,       // 3 consecutive wins by the same participant
    CornerStrategy,  // winning line touches 2+ corners within the first 5 turns
    // Arcade achievements - score thresholds
    AppetiteI,   // score 5
    AppetiteII,  // score 10
    AppetiteIII, // score 20
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub secret: bool,
    pub icon: &'static str,
}

/// Record of an unlocked achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    pub unlocked_at: i64,
    pub player_name: Option<String>,
}

/// Unlockable-badge state for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Achievements {
    /// Map of unlocked achievements.
    pub unlocked: HashMap<AchievementId, UnlockedAchievement>,
}

impl Achievements {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(&id)
    }

    /// Unlock an achievement. Returns true if newly unlocked; unlocking is
    /// monotonic, so repeats return false and change nothing.
    pub fn unlock(&mut self, id: AchievementId, player_name: Option<String>) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.insert(
            id,
            UnlockedAchievement {
                unlocked_at: chrono::Utc::now().timestamp(),
                player_name,
            },
        );
        true
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Forget everything. Only the explicit reset-all path calls this.
    pub fn reset(&mut self) {
        self.unlocked.clear();
    }

    // =========================================================================
    // Event handlers (called from the sessions)
    // =========================================================================

    /// Called after a won match, once the scoreboard streaks are updated.
    ///
    /// `streak` is the winner's current streak, `corners` the board's four
    /// corner positions.
    pub fn on_match_won(
        &mut self,
        _winner: Mark,
        winning_line: &[Pos],
        turn_count: u32,
        streak: u32,
        corners: &[Pos; 4],
        player_name: Option<&str>,
    ) {
        let name = player_name.map(|s| s.to_string());
        self.unlock(AchievementId::FirstWin, name.clone());
        if streak >= 3 {
            self.unlock(AchievementId::ThreePeat, name.clone());
        }
        let corner_hits = winning_line
            .iter()
            .filter(|pos| corners.contains(pos))
            .count();
        if corner_hits >= 2 && turn_count <= 5 {
            self.unlock(AchievementId::CornerStrategy, name);
        }
    }

    /// Called after every growth event in the arcade game.
    pub fn on_food_eaten(&mut self, score: u32, player_name: Option<&str>) {
        let name = player_name.map(|s| s.to_string());
        if score >= 5 {
            self.unlock(AchievementId::AppetiteI, name.clone());
        }
        if score >= 10 {
            self.unlock(AchievementId::AppetiteII, name.clone());
        }
        if score >= 20 {
            self.unlock(AchievementId::AppetiteIII, name);
        }
    }
}
