//! Display metadata for each badge kind

use crate::domain::BadgeKind;

/// Icon and description shown next to a badge
#[derive(Debug, Clone, Copy)]
pub struct BadgeMeta {
    pub icon: &'static str,
    pub description: &'static str,
}

/// Metadata for a badge kind
pub fn badge_meta(kind: &BadgeKind) -> BadgeMeta {
    match kind {
        BadgeKind::LevelUp(_) => BadgeMeta {
            icon: "⭐",
            description: "Leveled up by earning XP",
        },
        BadgeKind::Streak(_) => BadgeMeta {
            icon: "🔥",
            description: "Kept a multi-day learning streak alive",
        },
        BadgeKind::QuizAPlus(_) => BadgeMeta {
            icon: "🎖️",
            description: "Scored A+ on a quiz",
        },
        BadgeKind::GameHighScore(_) => BadgeMeta {
            icon: "🧮",
            description: "High score in a mini game",
        },
        BadgeKind::TopPerformer => BadgeMeta {
            icon: "🏆",
            description: "Top of the class leaderboard",
        },
        BadgeKind::Legacy(_) => BadgeMeta {
            icon: "🎗️",
            description: "Earned in an earlier version of Brainiac",
        },
    }
}
