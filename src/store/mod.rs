//! Persistence: the whole engine state is one blob behind a [`StateStore`].
//!
//! Loading never fails: missing or unparsable content falls back to the
//! seeded default state. Saving overwrites the entire blob.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use anyhow::Result;

use crate::domain::{EngineState, LessonProgress};

/// Key-value style store for the engine state blob
pub trait StateStore {
    /// Load the persisted state, or the default if nothing usable exists
    fn load(&self) -> EngineState;

    /// Overwrite the persisted state
    fn save(&self, state: &EngineState) -> Result<()>;
}

/// Best-effort backfill applied to every loaded state.
///
/// - Copies the legacy per-lesson `score` field into `best_score` /
///   `last_score` where those are absent.
/// - Appends locked progress entries for catalog lessons a user predates.
/// - Hands out first-seen sequence numbers to records from blobs that
///   predate them, and repairs the sequence counter.
pub(crate) fn migrate(state: &mut EngineState) {
    let mut max_seq = 0;
    for user in state.users.values_mut() {
        for progress in &mut user.learning_path {
            if let Some(score) = progress.score {
                if progress.best_score.is_none() {
                    progress.best_score = Some(score);
                }
                if progress.last_score.is_none() {
                    progress.last_score = Some(score);
                }
            }
        }
        for lesson in state.catalog.iter() {
            if user.progress(&lesson.id).is_none() {
                user.learning_path.push(LessonProgress::locked(&lesson.id));
            }
        }
        max_seq = max_seq.max(user.seq);
    }
    for user in state.users.values_mut() {
        if user.seq == 0 {
            max_seq += 1;
            user.seq = max_seq;
        }
    }
    if state.next_seq <= max_seq {
        state.next_seq = max_seq + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRecord;

    #[test]
    fn migrate_backfills_legacy_scores() {
        let mut state = EngineState::default();
        let mut user = UserRecord::seeded(1, &state.catalog);
        user.learning_path[0].score = Some(2);
        state.users.insert("guest".into(), user);
        state.next_seq = 2;

        migrate(&mut state);

        let progress = &state.users["guest"].learning_path[0];
        assert_eq!(progress.best_score, Some(2));
        assert_eq!(progress.last_score, Some(2));
    }

    #[test]
    fn migrate_appends_missing_lessons() {
        let mut state = EngineState::default();
        let mut user = UserRecord::seeded(1, &state.catalog);
        user.learning_path.truncate(2);
        state.users.insert("guest".into(), user);
        state.next_seq = 2;

        migrate(&mut state);

        assert_eq!(
            state.users["guest"].learning_path.len(),
            state.catalog.len()
        );
    }

    #[test]
    fn migrate_repairs_sequence_numbers() {
        let mut state = EngineState::default();
        state
            .users
            .insert("old".into(), UserRecord::seeded(0, &state.catalog));
        state
            .users
            .insert("new".into(), UserRecord::seeded(5, &state.catalog));
        state.next_seq = 1;

        migrate(&mut state);

        assert!(state.users["old"].seq > 5);
        assert!(state.next_seq > state.users["old"].seq);
    }
}
