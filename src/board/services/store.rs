//! Board state store with synchronous change notification.

use crate::board::domain::{
    BoardError, BoardView, Column, ColumnId, DragEntity, Reorder, Task, TaskEdit, TaskId,
    reorder,
};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info, warn};

/// Change notifications delivered to subscribers after each commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// The task sequence was replaced by a load.
    Loaded,
    /// Task order or column membership changed.
    TasksReordered,
    /// Column order changed.
    ColumnsReordered,
    /// A task was removed.
    TaskDeleted(TaskId),
    /// A task's text or participants changed.
    TaskUpdated(TaskId),
    /// The actively dragged task or column changed.
    ActiveDragChanged,
}

/// Handle returned by [`BoardStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&BoardEvent) + Send>;

/// Holds the canonical task and column sequences.
///
/// All mutations are synchronous and notify subscribers before returning.
/// The store never talks to the helpdesk; callers decide when to sync.
pub struct BoardStore {
    tasks: Vec<Task>,
    columns: Vec<Column>,
    active_task: Option<TaskId>,
    active_column: Option<ColumnId>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardStore")
            .field("tasks", &self.tasks)
            .field("columns", &self.columns)
            .field("active_task", &self.active_task)
            .field("active_column", &self.active_column)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl BoardStore {
    /// Creates an empty board with the given columns.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoColumns`] for an empty column set or
    /// [`BoardError::DuplicateColumn`] when two columns share an id.
    pub fn new(columns: Vec<Column>) -> Result<Self, BoardError> {
        if columns.is_empty() {
            return Err(BoardError::NoColumns);
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = columns.iter().find(|column| !seen.insert(column.id())) {
            return Err(BoardError::DuplicateColumn(duplicate.id().clone()));
        }

        Ok(Self {
            tasks: Vec::new(),
            columns,
            active_task: None,
            active_column: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Replaces the task sequence.
    ///
    /// The active drag task is kept only if it is still present.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownColumn`] when a task references a column
    /// that is not on the board, or [`BoardError::DuplicateTask`] when two
    /// tasks share an id. The current tasks are left untouched on error.
    pub fn load(&mut self, tasks: Vec<Task>) -> Result<(), BoardError> {
        let mut seen = HashSet::new();
        for task in &tasks {
            if self.view().column(task.column_id()).is_none() {
                return Err(BoardError::UnknownColumn {
                    task: task.id().clone(),
                    column: task.column_id().clone(),
                });
            }
            if !seen.insert(task.id()) {
                return Err(BoardError::DuplicateTask(task.id().clone()));
            }
        }

        info!(count = tasks.len(), "loaded board tasks");
        self.tasks = tasks;
        let active_missing = self
            .active_task
            .as_ref()
            .is_some_and(|id| self.view().task(id).is_none());
        if active_missing {
            self.active_task = None;
        }
        self.notify(&BoardEvent::Loaded);
        Ok(())
    }

    /// Returns a read-only view of the current sequences.
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(&self.tasks, &self.columns)
    }

    /// Returns the global task sequence.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the column sequence in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.view().task(id)
    }

    /// Returns the task currently being dragged.
    #[must_use]
    pub fn active_task(&self) -> Option<&Task> {
        self.active_task.as_ref().and_then(|id| self.task(id))
    }

    /// Returns the column currently being dragged.
    #[must_use]
    pub fn active_column(&self) -> Option<&Column> {
        self.active_column
            .as_ref()
            .and_then(|id| self.view().column(id))
    }

    /// Moves column `source` to the index currently held by `target`.
    ///
    /// Returns `false` without notifying when the ids are equal or unknown.
    pub fn move_column(&mut self, source: &ColumnId, target: &ColumnId) -> bool {
        match reorder::reorder_columns(&self.columns, source, target) {
            Some(columns) => self.commit(Reorder::Columns(columns)),
            None => false,
        }
    }

    /// Moves task `task` relative to the hovered entity `over_id`.
    ///
    /// `over_is_column` selects between hovering a task and hovering an empty
    /// column area. Returns `false` when nothing changed.
    pub fn move_task(&mut self, task: &TaskId, over_id: &str, over_is_column: bool) -> bool {
        if task.as_str() == over_id {
            return false;
        }
        let next = if over_is_column {
            reorder::reorder_task_over_column(
                &self.tasks,
                &self.columns,
                task,
                &ColumnId::new(over_id),
            )
        } else {
            reorder::reorder_task_over_task(&self.tasks, task, &TaskId::new(over_id))
        };
        match next {
            Some(tasks) => self.commit(Reorder::Tasks(tasks)),
            None => false,
        }
    }

    /// Commits a reorder computed against the current snapshot.
    ///
    /// A reorder that would change the number of entities or leave a task
    /// pointing at an unknown column is rejected. Returns `true` when the
    /// reorder was applied.
    pub fn commit(&mut self, reorder: Reorder) -> bool {
        match reorder {
            Reorder::Tasks(tasks) => {
                let consistent = tasks.len() == self.tasks.len()
                    && tasks
                        .iter()
                        .all(|task| self.view().column(task.column_id()).is_some());
                if !consistent {
                    warn!("rejected task reorder that breaks board invariants");
                    return false;
                }
                self.tasks = tasks;
                debug!("committed task reorder");
                self.notify(&BoardEvent::TasksReordered);
            }
            Reorder::Columns(columns) => {
                if columns.len() != self.columns.len() {
                    warn!("rejected column reorder that changes the column count");
                    return false;
                }
                self.columns = columns;
                debug!("committed column reorder");
                self.notify(&BoardEvent::ColumnsReordered);
            }
        }
        true
    }

    /// Records the entity being dragged.
    ///
    /// Returns `false` when the entity is not on the board.
    pub fn set_active_drag_entity(&mut self, entity: &DragEntity) -> bool {
        match entity {
            DragEntity::Task(id) => {
                if self.task(id).is_none() {
                    return false;
                }
                self.active_task = Some(id.clone());
            }
            DragEntity::Column(id) => {
                if self.view().column(id).is_none() {
                    return false;
                }
                self.active_column = Some(id.clone());
            }
        }
        self.notify(&BoardEvent::ActiveDragChanged);
        true
    }

    /// Forgets the dragged task and column.
    pub fn clear_active_drag_entity(&mut self) {
        if self.active_task.is_none() && self.active_column.is_none() {
            return;
        }
        self.active_task = None;
        self.active_column = None;
        self.notify(&BoardEvent::ActiveDragChanged);
    }

    /// Removes a task. Deleting an absent task is a no-op.
    ///
    /// Returns `true` when a task was removed.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        if self.tasks.len() == before {
            return false;
        }
        if self.active_task.as_ref() == Some(id) {
            self.active_task = None;
        }
        debug!(task = %id, "deleted task");
        self.notify(&BoardEvent::TaskDeleted(id.clone()));
        true
    }

    /// Applies an edit to a task's text and participants.
    ///
    /// Returns a snapshot of the edited task for synchronization.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTask`] when the task is not on the board.
    pub fn update_task(&mut self, edit: TaskEdit) -> Result<Task, BoardError> {
        let id = edit.id().clone();
        let task = self
            .tasks
            .iter_mut()
            .find(|task| *task.id() == id)
            .ok_or_else(|| BoardError::UnknownTask(id.clone()))?;
        task.apply(edit);
        let snapshot = task.clone();
        self.notify(&BoardEvent::TaskUpdated(id));
        Ok(snapshot)
    }

    /// Registers a callback invoked after every committed change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&BoardEvent) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(candidate, _)| *candidate != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self, event: &BoardEvent) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(event);
        }
    }
}
