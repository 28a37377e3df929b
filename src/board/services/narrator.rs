//! Screen-reader announcements for drag sessions.
//!
//! Announcements are rendered from `minijinja` templates so a deployment can
//! localise them. Templates are compiled once, when the narrator is built.
//! Positions are one-based and always computed from the snapshot handed in,
//! never cached between events.

use crate::board::domain::{BoardView, ColumnId, DragKind, Draggable, Task, TaskId};
use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::warn;

/// Templates for each announcement.
///
/// Available variables: `task` (task label), `column` (column title),
/// `target` (hovered column title), `position`, `total`, and `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrationTemplates {
    /// A column was picked up.
    pub column_picked_up: String,
    /// A task was picked up.
    pub task_picked_up: String,
    /// A dragged column hovers another column.
    pub column_moved_over: String,
    /// A dragged task hovers a task in its origin column.
    pub task_moved_within_column: String,
    /// A dragged task hovers a task in another column.
    pub task_moved_to_column: String,
    /// A dragged task hovers an empty column area.
    pub task_moved_onto_column: String,
    /// A column was dropped.
    pub column_dropped: String,
    /// A task was dropped on a task in its origin column.
    pub task_dropped_within_column: String,
    /// A task was dropped on a task in another column.
    pub task_dropped_to_column: String,
    /// A task was dropped on an empty column area.
    pub task_dropped_onto_column: String,
    /// A drag session was cancelled.
    pub cancelled: String,
}

impl Default for NarrationTemplates {
    fn default() -> Self {
        Self {
            column_picked_up:
                "Picked up Column {{ column }} at position: {{ position }} of {{ total }}".to_owned(),
            task_picked_up: concat!(
                "Picked up Task {{ task }} at position: {{ position }} of {{ total }} ",
                "in column {{ column }}"
            )
            .to_owned(),
            column_moved_over: concat!(
                "Column {{ column }} was moved over {{ target }} ",
                "at position {{ position }} of {{ total }}"
            )
            .to_owned(),
            task_moved_within_column:
                "Task was moved over position {{ position }} of {{ total }} in column {{ column }}"
                    .to_owned(),
            task_moved_to_column: concat!(
                "Task {{ task }} was moved over column {{ column }} ",
                "in position {{ position }} of {{ total }}"
            )
            .to_owned(),
            task_moved_onto_column: "Task {{ task }} was moved over column {{ column }}".to_owned(),
            column_dropped:
                "Column {{ column }} was dropped into position {{ position }} of {{ total }}"
                    .to_owned(),
            task_dropped_within_column: concat!(
                "Task was dropped into position {{ position }} of {{ total }} ",
                "in column {{ column }}"
            )
            .to_owned(),
            task_dropped_to_column: concat!(
                "Task was dropped into column {{ column }} ",
                "in position {{ position }} of {{ total }}"
            )
            .to_owned(),
            task_dropped_onto_column: "Task was dropped into column {{ column }}".to_owned(),
            cancelled: "Dragging {{ kind }} cancelled.".to_owned(),
        }
    }
}

impl NarrationTemplates {
    fn named(&self) -> [(&'static str, &str); 11] {
        [
            ("column_picked_up", &self.column_picked_up),
            ("task_picked_up", &self.task_picked_up),
            ("column_moved_over", &self.column_moved_over),
            ("task_moved_within_column", &self.task_moved_within_column),
            ("task_moved_to_column", &self.task_moved_to_column),
            ("task_moved_onto_column", &self.task_moved_onto_column),
            ("column_dropped", &self.column_dropped),
            ("task_dropped_within_column", &self.task_dropped_within_column),
            ("task_dropped_to_column", &self.task_dropped_to_column),
            ("task_dropped_onto_column", &self.task_dropped_onto_column),
            ("cancelled", &self.cancelled),
        ]
    }
}

/// Errors raised while compiling or rendering announcements.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NarrationError {
    /// A template failed to compile.
    #[error("invalid narration template '{name}': {reason}")]
    InvalidTemplate {
        /// Template field name.
        name: &'static str,
        /// Compiler message.
        reason: String,
    },

    /// A template failed to render.
    #[error("failed to render narration template '{name}': {reason}")]
    Render {
        /// Template field name.
        name: &'static str,
        /// Renderer message.
        reason: String,
    },
}

/// Which phase of a drag an announcement describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Hover,
    Drop,
}

/// Derives announcements for drag lifecycle events.
pub struct Narrator {
    templates: NarrationTemplates,
    environment: Environment<'static>,
}

impl fmt::Debug for Narrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Narrator")
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}

impl Default for Narrator {
    fn default() -> Self {
        Self::new(NarrationTemplates::default()).unwrap_or_else(|error| {
            warn!(%error, "stock narration templates failed to compile");
            Self {
                templates: NarrationTemplates::default(),
                environment: Environment::new(),
            }
        })
    }
}

impl Narrator {
    /// Creates a narrator after checking that every template compiles.
    ///
    /// # Errors
    ///
    /// Returns [`NarrationError::InvalidTemplate`] naming the first template
    /// with a syntax error.
    pub fn new(templates: NarrationTemplates) -> Result<Self, NarrationError> {
        let mut environment = Environment::new();
        for (name, source) in templates.named() {
            environment
                .add_template_owned(name, source.to_owned())
                .map_err(|error| NarrationError::InvalidTemplate {
                    name,
                    reason: error.to_string(),
                })?;
        }
        Ok(Self {
            templates,
            environment,
        })
    }

    /// Announces a pickup.
    ///
    /// Returns `Ok(None)` for payloads without metadata or unknown entities.
    ///
    /// # Errors
    ///
    /// Returns [`NarrationError::Render`] when the template fails to render.
    pub fn picked_up(
        &self,
        board: BoardView<'_>,
        active: &Draggable,
    ) -> Result<Option<String>, NarrationError> {
        match active.kind() {
            Some(DragKind::Column) => {
                let id = ColumnId::new(active.id());
                let (Some(column), Some(position)) = (board.column(&id), board.column_position(&id))
                else {
                    return Ok(None);
                };
                self.render(
                    "column_picked_up",
                    context! {
                        column => column.title(),
                        position => position.index,
                        total => position.total,
                    },
                )
            }
            Some(DragKind::Task) => {
                let id = TaskId::new(active.id());
                let Some(task) = board.task(&id) else {
                    return Ok(None);
                };
                let (Some(column), Some(position)) = (
                    board.column(task.column_id()),
                    board.task_position(&id, task.column_id()),
                ) else {
                    return Ok(None);
                };
                self.render(
                    "task_picked_up",
                    context! {
                        task => task.label(),
                        column => column.title(),
                        position => position.index,
                        total => position.total,
                    },
                )
            }
            None => Ok(None),
        }
    }

    /// Announces a hover-target change.
    ///
    /// `origin` is the column the dragged task was picked up from; it decides
    /// between the "within column" and "to another column" wording.
    ///
    /// # Errors
    ///
    /// Returns [`NarrationError::Render`] when the template fails to render.
    pub fn moved_over(
        &self,
        board: BoardView<'_>,
        active: &Draggable,
        origin: Option<&ColumnId>,
        over: Option<&Draggable>,
    ) -> Result<Option<String>, NarrationError> {
        self.describe(Phase::Hover, board, active, origin, over)
    }

    /// Announces a drop.
    ///
    /// # Errors
    ///
    /// Returns [`NarrationError::Render`] when the template fails to render.
    pub fn dropped(
        &self,
        board: BoardView<'_>,
        active: &Draggable,
        origin: Option<&ColumnId>,
        over: Option<&Draggable>,
    ) -> Result<Option<String>, NarrationError> {
        self.describe(Phase::Drop, board, active, origin, over)
    }

    /// Announces a cancelled drag of a `kind` entity.
    ///
    /// # Errors
    ///
    /// Returns [`NarrationError::Render`] when the template fails to render.
    pub fn cancelled(&self, kind: DragKind) -> Result<Option<String>, NarrationError> {
        self.render("cancelled", context! { kind => kind.as_str() })
    }

    fn describe(
        &self,
        phase: Phase,
        board: BoardView<'_>,
        active: &Draggable,
        origin: Option<&ColumnId>,
        over: Option<&Draggable>,
    ) -> Result<Option<String>, NarrationError> {
        let Some(over) = over else {
            return Ok(None);
        };
        match (active.kind(), over.kind()) {
            (Some(DragKind::Column), Some(DragKind::Column)) => {
                self.describe_column(phase, board, active, over)
            }
            (Some(DragKind::Task), Some(DragKind::Task)) => {
                self.describe_task_over_task(phase, board, active, origin, over)
            }
            (Some(DragKind::Task), Some(DragKind::Column)) => {
                self.describe_task_over_column(phase, board, active, over)
            }
            _ => Ok(None),
        }
    }

    fn describe_column(
        &self,
        phase: Phase,
        board: BoardView<'_>,
        active: &Draggable,
        over: &Draggable,
    ) -> Result<Option<String>, NarrationError> {
        let target_id = ColumnId::new(over.id());
        let (Some(column), Some(target), Some(position)) = (
            board.column(&ColumnId::new(active.id())),
            board.column(&target_id),
            board.column_position(&target_id),
        ) else {
            return Ok(None);
        };
        let name = match phase {
            Phase::Hover => "column_moved_over",
            Phase::Drop => "column_dropped",
        };
        self.render(
            name,
            context! {
                column => column.title(),
                target => target.title(),
                position => position.index,
                total => position.total,
            },
        )
    }

    fn describe_task_over_task(
        &self,
        phase: Phase,
        board: BoardView<'_>,
        active: &Draggable,
        origin: Option<&ColumnId>,
        over: &Draggable,
    ) -> Result<Option<String>, NarrationError> {
        let over_id = TaskId::new(over.id());
        let Some(over_task) = board.task(&over_id) else {
            return Ok(None);
        };
        let (Some(column), Some(position)) = (
            board.column(over_task.column_id()),
            board.task_position(&over_id, over_task.column_id()),
        ) else {
            return Ok(None);
        };
        let label = board
            .task(&TaskId::new(active.id()))
            .map(Task::label)
            .unwrap_or_default();

        let across = origin != Some(column.id());
        let name = match (phase, across) {
            (Phase::Hover, false) => "task_moved_within_column",
            (Phase::Hover, true) => "task_moved_to_column",
            (Phase::Drop, false) => "task_dropped_within_column",
            (Phase::Drop, true) => "task_dropped_to_column",
        };
        self.render(
            name,
            context! {
                task => label,
                column => column.title(),
                position => position.index,
                total => position.total,
            },
        )
    }

    fn describe_task_over_column(
        &self,
        phase: Phase,
        board: BoardView<'_>,
        active: &Draggable,
        over: &Draggable,
    ) -> Result<Option<String>, NarrationError> {
        let Some(column) = board.column(&ColumnId::new(over.id())) else {
            return Ok(None);
        };
        let label = board
            .task(&TaskId::new(active.id()))
            .map(Task::label)
            .unwrap_or_default();
        let name = match phase {
            Phase::Hover => "task_moved_onto_column",
            Phase::Drop => "task_dropped_onto_column",
        };
        self.render(
            name,
            context! { task => label, column => column.title() },
        )
    }

    fn render(
        &self,
        name: &'static str,
        context: minijinja::Value,
    ) -> Result<Option<String>, NarrationError> {
        self.environment
            .get_template(name)
            .and_then(|template| template.render(context))
            .map(Some)
            .map_err(|error| NarrationError::Render {
                name,
                reason: error.to_string(),
            })
    }
}
