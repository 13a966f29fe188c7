use serde::{Deserialize, Serialize};

use super::badge::Badge;

/// A change notification emitted by the engine, once per mutation, in
/// mutation order. Delivery is synchronous and in-process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum GamificationEvent {
    XpChanged {
        user_id: String,
        amount: u64,
        new_total: u64,
        reason: String,
    },
    BadgeAwarded {
        user_id: String,
        badge: Badge,
    },
    StreakChanged {
        user_id: String,
        count: u32,
    },
    LessonCompleted {
        user_id: String,
        lesson_id: String,
        score: u64,
        total_possible: u64,
    },
    GameRecorded {
        user_id: String,
        game_id: String,
        score: u64,
    },
    LessonCreated {
        lesson_id: String,
    },
}

impl GamificationEvent {
    /// Short event name, matching the serialized `type` tag
    pub fn name(&self) -> &'static str {
        match self {
            GamificationEvent::XpChanged { .. } => "xp-changed",
            GamificationEvent::BadgeAwarded { .. } => "badge-awarded",
            GamificationEvent::StreakChanged { .. } => "streak-changed",
            GamificationEvent::LessonCompleted { .. } => "lesson-completed",
            GamificationEvent::GameRecorded { .. } => "game-recorded",
            GamificationEvent::LessonCreated { .. } => "lesson-created",
        }
    }
}

/// Observer interface for engine notifications.
///
/// Sinks are invoked synchronously from within the mutating operation;
/// they must not call back into the engine.
pub trait EventSink {
    fn on_event(&mut self, event: &GamificationEvent);
}
