//! Hook through which committed task changes reach the helpdesk.
//!
//! The board applies changes optimistically and then emits an intent. How and
//! when the intent is delivered (and whether it is retried) is up to the sink.

use crate::board::domain::Task;

/// Why a task needs to be pushed to the helpdesk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncReason {
    /// The task was dropped after a drag session.
    Dropped,
    /// The task's text or participants were edited.
    Edited,
}

/// Request to mirror a task's committed state to the helpdesk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncIntent {
    /// Snapshot of the task after the local commit.
    pub task: Task,
    /// What caused the intent.
    pub reason: SyncReason,
}

impl SyncIntent {
    /// Creates an intent for `task`.
    #[must_use]
    pub const fn new(task: Task, reason: SyncReason) -> Self {
        Self { task, reason }
    }
}

/// Receives sync intents.
///
/// Implementations must not block; delivery happens in the background.
pub trait SyncIntentSink: Send + Sync {
    /// Hands an intent to the background synchronizer.
    fn emit(&self, intent: SyncIntent);
}
