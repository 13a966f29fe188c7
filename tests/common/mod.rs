//! Shared test utilities for engine integration tests

use std::sync::{Arc, Mutex};

use brainiac::engine::Engine;
use brainiac::store::MemoryStore;
use brainiac::{EventSink, GamificationEvent};

/// Event sink that records everything the engine emits
#[derive(Default, Clone)]
pub struct Recorder {
    events: Arc<Mutex<Vec<GamificationEvent>>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<GamificationEvent> {
        self.events.lock().expect("recorder lock").clone()
    }

    /// Event names in emission order
    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(|e| e.name()).collect()
    }

    pub fn clear(&self) {
        self.events.lock().expect("recorder lock").clear();
    }
}

impl EventSink for Recorder {
    fn on_event(&mut self, event: &GamificationEvent) {
        self.events
            .lock()
            .expect("recorder lock")
            .push(event.clone());
    }
}

/// Engine over a fresh in-memory store, with a recorder subscribed and a
/// handle onto the store for persistence assertions.
pub fn test_engine() -> (Engine, MemoryStore, Recorder) {
    let store = MemoryStore::default();
    let mut engine = Engine::new(Box::new(store.clone()));
    let recorder = Recorder::default();
    engine.subscribe(Box::new(recorder.clone()));
    (engine, store, recorder)
}
