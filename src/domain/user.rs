use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::badge::{Badge, BadgeKind};
use super::lesson::{LessonCatalog, LessonProgress, LessonStatus};
use crate::engine::leveling;

/// Daily learning streak state.
///
/// `count` grows only on the first activity of a calendar day that directly
/// follows `last_active_date`; a skipped day resets it to 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub count: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active_date: Option<NaiveDate>,
}

/// Mini-game counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayStats {
    pub games_played: u64,
    pub high_score: u64,
}

/// One learner's full gamification record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// First-seen order; breaks leaderboard ties deterministically.
    /// Blobs that predate this field get one assigned on load.
    #[serde(default)]
    pub seq: u64,

    /// Accumulated experience points; the level is derived, never stored
    #[serde(default)]
    pub xp: u64,

    #[serde(default)]
    pub badges: Vec<Badge>,

    #[serde(default)]
    pub streak: Streak,

    #[serde(default)]
    pub stats: PlayStats,

    /// One entry per catalog lesson, in catalog order
    #[serde(default)]
    pub learning_path: Vec<LessonProgress>,

    /// Last lesson the learner opened (drives the "continue" affordance)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_opened: Option<String>,
}

impl UserRecord {
    /// Create a fresh record seeded from the catalog
    pub fn seeded(seq: u64, catalog: &LessonCatalog) -> Self {
        Self {
            seq,
            xp: 0,
            badges: Vec::new(),
            streak: Streak::default(),
            stats: PlayStats::default(),
            learning_path: catalog.seed_progress(),
            last_opened: None,
        }
    }

    /// Level derived from XP: `1 + floor(xp / 100)`
    pub fn level(&self) -> u32 {
        leveling::level_for_xp(self.xp)
    }

    pub fn has_badge(&self, kind: &BadgeKind) -> bool {
        self.badges.iter().any(|b| &b.kind == kind)
    }

    pub fn progress(&self, lesson_id: &str) -> Option<&LessonProgress> {
        self.learning_path.iter().find(|p| p.lesson_id == lesson_id)
    }

    pub fn progress_mut(&mut self, lesson_id: &str) -> Option<&mut LessonProgress> {
        self.learning_path
            .iter_mut()
            .find(|p| p.lesson_id == lesson_id)
    }

    /// Number of completed lessons on the path
    pub fn completed_count(&self) -> usize {
        self.learning_path
            .iter()
            .filter(|p| p.status == LessonStatus::Completed)
            .count()
    }
}

/// Read-only projection of a user record, as rendered by portals
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub user_id: String,
    pub xp: u64,
    pub level: u32,
    pub badges: Vec<Badge>,
    pub streak: Streak,
    pub learning_path: Vec<LessonProgress>,
    pub stats: PlayStats,
    pub last_opened: Option<String>,
}

impl UserSummary {
    pub fn of(user_id: &str, record: &UserRecord) -> Self {
        Self {
            user_id: user_id.to_string(),
            xp: record.xp,
            level: record.level(),
            badges: record.badges.clone(),
            streak: record.streak.clone(),
            learning_path: record.learning_path.clone(),
            stats: record.stats,
            last_opened: record.last_opened.clone(),
        }
    }
}
