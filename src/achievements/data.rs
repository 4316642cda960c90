//! Static achievement definitions.

use super::types::{AchievementCategory, AchievementDef, AchievementId};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // Match achievements
    AchievementDef {
        id: AchievementId::FirstWin,
        name: "First Win",
        description: "Win your first match",
        category: AchievementCategory::Match,
        secret: false,
        icon: "🎉",
    },
    AchievementDef {
        id: AchievementId::ThreePeat,
        name: "Three-peat",
        description: "Win 3 matches in a row",
        category: AchievementCategory::Match,
        secret: false,
        icon: "🥇",
    },
    AchievementDef {
        id: AchievementId::CornerStrategy,
        name: "Corner Strategy",
        description: "Win through two corners within the first 5 turns",
        category: AchievementCategory::Match,
        secret: true,
        icon: "🧠",
    },
    // Arcade achievements
    AchievementDef {
        id: AchievementId::AppetiteI,
        name: "Appetite I",
        description: "Reach a score of 5",
        category: AchievementCategory::Arcade,
        secret: false,
        icon: "🍎",
    },
    AchievementDef {
        id: AchievementId::AppetiteII,
        name: "Appetite II",
        description: "Reach a score of 10",
        category: AchievementCategory::Arcade,
        secret: false,
        icon: "🍎",
    },
    AchievementDef {
        id: AchievementId::AppetiteIII,
        name: "Appetite III",
        description: "Reach a score of 20",
        category: AchievementCategory::Arcade,
        secret: false,
        icon: "🏆",
    },
];

/// Look up the static definition for an achievement.
pub fn achievement_def(id: AchievementId) -> &'static AchievementDef {
    ALL_ACHIEVEMENTS
        .iter()
        .find(|def| def.id == id)
        .expect("every AchievementId has a definition")
}
