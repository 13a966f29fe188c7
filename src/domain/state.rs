use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lesson::LessonCatalog;
use super::user::UserRecord;
use crate::catalog;

/// One leaderboard row; at most ten are kept, sorted by XP descending
/// with first-seen order breaking ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub xp: u64,
}

/// A queued teacher assignment of a lesson to a group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub lesson_id: String,
    pub group: String,
    pub at: DateTime<Utc>,
}

/// The whole persisted world: every learner, the shared catalog, the
/// derived leaderboard and the assignment queue.
///
/// Saved and loaded as a single blob; the store falls back to this
/// default when nothing was persisted yet or the blob is unparsable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineState {
    #[serde(default)]
    pub users: BTreeMap<String, UserRecord>,

    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,

    #[serde(default = "catalog::default_catalog")]
    pub catalog: LessonCatalog,

    #[serde(default)]
    pub assignments: Vec<Assignment>,

    /// Next first-seen sequence number to hand out
    #[serde(default = "default_next_seq")]
    pub next_seq: u64,
}

fn default_next_seq() -> u64 {
    1
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            leaderboard: Vec::new(),
            catalog: catalog::default_catalog(),
            assignments: Vec::new(),
            next_seq: 1,
        }
    }
}
