//! Drag payload descriptors exchanged with the input layer.

use super::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of entity carried by a drag payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragKind {
    /// A task card.
    Task,
    /// A whole column.
    Column,
}

impl DragKind {
    /// Returns the capitalised name used in announcements.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::Column => "Column",
        }
    }
}

impl fmt::Display for DragKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that is dragged or hovered over.
///
/// Task and column identifiers share one namespace on the input side, so the
/// raw identifier is kept as a string. `kind` is `None` when the input layer
/// did not attach recognised drag metadata; such payloads are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Draggable {
    id: String,
    kind: Option<DragKind>,
}

impl Draggable {
    /// Describes a task card.
    #[must_use]
    pub fn task(id: &TaskId) -> Self {
        Self {
            id: id.as_str().to_owned(),
            kind: Some(DragKind::Task),
        }
    }

    /// Describes a column.
    #[must_use]
    pub fn column(id: &ColumnId) -> Self {
        Self {
            id: id.as_str().to_owned(),
            kind: Some(DragKind::Column),
        }
    }

    /// Describes a payload without recognised metadata.
    #[must_use]
    pub fn unrecognized(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: None,
        }
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the declared kind, if any.
    #[must_use]
    pub const fn kind(&self) -> Option<DragKind> {
        self.kind
    }

    /// Returns the typed entity when the payload carries metadata.
    #[must_use]
    pub fn entity(&self) -> Option<DragEntity> {
        match self.kind? {
            DragKind::Task => Some(DragEntity::Task(TaskId::new(self.id.as_str()))),
            DragKind::Column => Some(DragEntity::Column(ColumnId::new(self.id.as_str()))),
        }
    }
}

impl From<&DragEntity> for Draggable {
    fn from(entity: &DragEntity) -> Self {
        match entity {
            DragEntity::Task(id) => Self::task(id),
            DragEntity::Column(id) => Self::column(id),
        }
    }
}

/// A typed reference to a task or a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragEntity {
    /// A task reference.
    Task(TaskId),
    /// A column reference.
    Column(ColumnId),
}

impl DragEntity {
    /// Returns the kind of the referenced entity.
    #[must_use]
    pub const fn kind(&self) -> DragKind {
        match self {
            Self::Task(_) => DragKind::Task,
            Self::Column(_) => DragKind::Column,
        }
    }
}
