//! Shared world state for drag-and-drop BDD scenarios.

use std::sync::{Arc, Mutex};

use rstest::fixture;
use ticketboard::board::{
    domain::Column,
    ports::{SyncIntent, SyncIntentSink},
    services::{BoardStore, DragController, DragReport},
};

/// Sink that keeps every intent it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    intents: Mutex<Vec<SyncIntent>>,
}

impl RecordingSink {
    /// Returns the intents received so far.
    pub fn intents(&self) -> Vec<SyncIntent> {
        self.intents
            .lock()
            .map(|intents| intents.clone())
            .unwrap_or_default()
    }
}

impl SyncIntentSink for RecordingSink {
    fn emit(&self, intent: SyncIntent) {
        if let Ok(mut intents) = self.intents.lock() {
            intents.push(intent);
        }
    }
}

/// Scenario world for drag-and-drop behaviour tests.
pub struct BoardWorld {
    /// Board under test.
    pub store: BoardStore,
    /// Controller driving the drag session.
    pub controller: DragController,
    /// Intents emitted by the controller.
    pub sink: Arc<RecordingSink>,
    /// Outcome of the last drag event.
    pub last_report: Option<DragReport>,
}

impl BoardWorld {
    /// Creates a world with an empty default board.
    ///
    /// # Panics
    ///
    /// Panics if the default column set is rejected by the store.
    #[must_use]
    pub fn new() -> Self {
        let sink = Arc::new(RecordingSink::default());
        let shared: Arc<dyn SyncIntentSink> = Arc::clone(&sink) as Arc<dyn SyncIntentSink>;
        Self {
            store: BoardStore::new(Column::defaults()).expect("default columns are valid"),
            controller: DragController::default().with_sync(shared),
            sink,
            last_report: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
