//! Drag session state machine.
//!
//! The controller is a flat two-state machine, `Idle` and `Active`. It turns
//! pickup, hover, release and cancel events into reorder-engine calls,
//! commits the results to the store passed in, and produces an announcement
//! for each event from the snapshot as it was before the commit.

use super::{BoardStore, Narrator, narrator::NarrationError};
use crate::board::{
    domain::{ColumnId, DragEntity, DragKind, Draggable, reorder},
    ports::{SyncIntent, SyncIntentSink, SyncReason},
};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// An in-progress drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    active: Draggable,
    kind: DragKind,
    origin_column: Option<ColumnId>,
}

impl DragSession {
    /// Returns the dragged payload.
    #[must_use]
    pub const fn active(&self) -> &Draggable {
        &self.active
    }

    /// Returns the kind of the dragged entity.
    #[must_use]
    pub const fn kind(&self) -> DragKind {
        self.kind
    }

    /// Returns the column a dragged task was picked up from.
    #[must_use]
    pub const fn origin_column(&self) -> Option<&ColumnId> {
        self.origin_column.as_ref()
    }
}

/// Controller state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A task or column is being dragged.
    Active(DragSession),
}

/// Outcome of one input event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragReport {
    /// Announcement for assistive technology, if any.
    pub announcement: Option<String>,
    /// Whether the board was mutated.
    pub changed: bool,
}

/// Translates drag input events into board mutations.
pub struct DragController {
    state: DragState,
    narrator: Narrator,
    sync: Option<Arc<dyn SyncIntentSink>>,
}

impl std::fmt::Debug for DragController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragController")
            .field("state", &self.state)
            .field("narrator", &self.narrator)
            .field("sync", &self.sync.is_some())
            .finish()
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(Narrator::default())
    }
}

impl DragController {
    /// Creates an idle controller without a sync hook.
    #[must_use]
    pub const fn new(narrator: Narrator) -> Self {
        Self {
            state: DragState::Idle,
            narrator,
            sync: None,
        }
    }

    /// Emits a sync intent for every task dropped on a target.
    #[must_use]
    pub fn with_sync(mut self, sink: Arc<dyn SyncIntentSink>) -> Self {
        self.sync = Some(sink);
        self
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns `true` while a drag session is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, DragState::Active(_))
    }

    /// Starts a drag session.
    ///
    /// Ignored when a session is already active, when the payload has no
    /// metadata, or when the entity is not on the board. Hidden seed tasks
    /// cannot be picked up.
    pub fn pick_up(&mut self, store: &mut BoardStore, active: &Draggable) -> DragReport {
        if self.is_active() {
            trace!(active = active.id(), "ignoring pickup during an active drag");
            return DragReport::default();
        }
        let Some(entity) = active.entity() else {
            trace!(active = active.id(), "ignoring pickup without drag metadata");
            return DragReport::default();
        };
        let origin_column = match &entity {
            DragEntity::Task(id) => match store.task(id) {
                Some(task) if task.is_visible() => Some(task.column_id().clone()),
                Some(_) => {
                    trace!(active = active.id(), "ignoring pickup of a hidden seed task");
                    return DragReport::default();
                }
                None => return DragReport::default(),
            },
            DragEntity::Column(_) => None,
        };
        if !store.set_active_drag_entity(&entity) {
            return DragReport::default();
        }

        let announcement = Self::announce(self.narrator.picked_up(store.view(), active));
        debug!(active = active.id(), kind = %entity.kind(), "drag started");
        self.state = DragState::Active(DragSession {
            active: active.clone(),
            kind: entity.kind(),
            origin_column,
        });
        DragReport {
            announcement,
            changed: false,
        }
    }

    /// Handles a hover-target change during a drag.
    ///
    /// Tasks are repositioned live; hover commits are kept even if the drag
    /// is later cancelled.
    pub fn hover(&mut self, store: &mut BoardStore, over: Option<&Draggable>) -> DragReport {
        let DragState::Active(session) = &self.state else {
            return DragReport::default();
        };
        let announcement = Self::announce(self.narrator.moved_over(
            store.view(),
            &session.active,
            session.origin_column.as_ref(),
            over,
        ));
        let changed = reorder::plan_drag_over(store.view(), &session.active, over)
            .is_some_and(|planned| store.commit(planned));
        DragReport {
            announcement,
            changed,
        }
    }

    /// Ends a drag over `over`, or cancels it when there is no target.
    ///
    /// Always returns the controller to `Idle`. A dropped task is handed to
    /// the sync hook after the local commit.
    pub fn release(&mut self, store: &mut BoardStore, over: Option<&Draggable>) -> DragReport {
        let DragState::Active(session) = std::mem::take(&mut self.state) else {
            return DragReport::default();
        };
        store.clear_active_drag_entity();

        let Some(over) = over else {
            debug!(active = session.active.id(), "drag released outside any target");
            return DragReport {
                announcement: Self::announce(self.narrator.cancelled(session.kind)),
                changed: false,
            };
        };

        let announcement = Self::announce(self.narrator.dropped(
            store.view(),
            &session.active,
            session.origin_column.as_ref(),
            Some(over),
        ));
        let changed = reorder::plan_drag_end(store.view(), &session.active, Some(over))
            .is_some_and(|planned| store.commit(planned));

        if session.kind == DragKind::Task && over.kind().is_some() {
            self.emit_sync(store, &session);
        }
        debug!(active = session.active.id(), over = over.id(), changed, "drag ended");
        DragReport {
            announcement,
            changed,
        }
    }

    /// Abandons the current drag session without mutating the board.
    pub fn cancel(&mut self, store: &mut BoardStore) -> DragReport {
        let DragState::Active(session) = std::mem::take(&mut self.state) else {
            return DragReport::default();
        };
        store.clear_active_drag_entity();
        debug!(active = session.active.id(), "drag cancelled");
        DragReport {
            announcement: Self::announce(self.narrator.cancelled(session.kind)),
            changed: false,
        }
    }

    fn emit_sync(&self, store: &BoardStore, session: &DragSession) {
        let Some(sink) = &self.sync else {
            return;
        };
        let Some(DragEntity::Task(id)) = session.active.entity() else {
            return;
        };
        match store.task(&id) {
            Some(task) => sink.emit(SyncIntent::new(task.clone(), SyncReason::Dropped)),
            None => trace!(task = %id, "dropped task vanished before sync"),
        }
    }

    fn announce(rendered: Result<Option<String>, NarrationError>) -> Option<String> {
        rendered.unwrap_or_else(|error| {
            warn!(%error, "failed to render drag announcement");
            None
        })
    }
}
