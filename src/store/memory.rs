//! In-memory state store for tests and ephemeral sessions

use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::domain::EngineState;

use super::{StateStore, migrate};

/// Stores the blob in a shared slot instead of on disk.
///
/// Clones share the slot, so a test can keep a handle and inspect what the
/// engine persisted.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<EngineState>>>,
}

impl MemoryStore {
    /// The last saved state, if any
    pub fn snapshot(&self) -> Option<EngineState> {
        self.slot.lock().expect("store lock").clone()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> EngineState {
        let mut state = self
            .slot
            .lock()
            .expect("store lock")
            .clone()
            .unwrap_or_default();
        migrate(&mut state);
        state
    }

    fn save(&self, state: &EngineState) -> Result<()> {
        *self.slot.lock().expect("store lock") = Some(state.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load() {
        let store = MemoryStore::default();
        let mut state = EngineState::default();
        state.next_seq = 7;
        store.save(&state).unwrap();
        assert_eq!(store.load().next_seq, 7);
    }

    #[test]
    fn clones_share_the_slot() {
        let store = MemoryStore::default();
        let handle = store.clone();
        store.save(&EngineState::default()).unwrap();
        assert!(handle.snapshot().is_some());
    }
}
