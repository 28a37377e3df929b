//! Task records and edits.

use super::{ColumnId, ParticipantRole, TaskId, User, plain_text};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric ticket status as reported by the helpdesk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketStatus(u8);

impl TicketStatus {
    /// A newly opened ticket.
    pub const NEW: Self = Self(1);
    /// A ticket assigned to someone.
    pub const ASSIGNED: Self = Self(2);
    /// A ticket scheduled for work.
    pub const PLANNED: Self = Self(3);
    /// A ticket waiting on something external.
    pub const PENDING: Self = Self(4);
    /// A ticket whose resolution was proposed.
    pub const SOLVED: Self = Self(5);
    /// A ticket that is closed.
    pub const CLOSED: Self = Self(6);

    /// Creates a status from its helpdesk code.
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Returns the helpdesk code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Returns the display label for known codes.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self.0 {
            1 => Some("New"),
            2 => Some("Processing (assigned)"),
            3 => Some("Processing (planned)"),
            4 => Some("Pending"),
            5 => Some("Solved"),
            6 => Some("Closed"),
            _ => None,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "status {}", self.0),
        }
    }
}

/// A unit of work shown as a card in exactly one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    column_id: ColumnId,
    name: String,
    description: String,
    status: TicketStatus,
    visible: bool,
    applicants: Vec<User>,
    observers: Vec<User>,
    attributed_to: Vec<User>,
}

impl Task {
    /// Creates a visible task with empty text and no participants.
    #[must_use]
    pub const fn new(id: TaskId, column_id: ColumnId, status: TicketStatus) -> Self {
        Self {
            id,
            column_id,
            name: String::new(),
            description: String::new(),
            status,
            visible: true,
            applicants: Vec::new(),
            observers: Vec::new(),
            attributed_to: Vec::new(),
        }
    }

    /// Creates the hidden seed task that keeps `column` droppable when empty.
    #[must_use]
    pub fn placeholder(column: &ColumnId, status: TicketStatus) -> Self {
        let mut task = Self::new(TaskId::placeholder(column), column.clone(), status);
        task.visible = false;
        task
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the rich-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replaces the users holding `role`.
    #[must_use]
    pub fn with_participants(
        mut self,
        role: ParticipantRole,
        users: impl IntoIterator<Item = User>,
    ) -> Self {
        *self.participants_mut(role) = users.into_iter().collect();
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the column the task belongs to.
    #[must_use]
    pub const fn column_id(&self) -> &ColumnId {
        &self.column_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rich-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the helpdesk status the task was loaded with.
    #[must_use]
    pub const fn status(&self) -> TicketStatus {
        self.status
    }

    /// Returns `false` for hidden seed tasks.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` for hidden seed tasks that are never synchronized.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        !self.visible
    }

    /// Returns the users holding `role`.
    #[must_use]
    pub fn participants(&self, role: ParticipantRole) -> &[User] {
        match role {
            ParticipantRole::Requester => &self.applicants,
            ParticipantRole::Assignee => &self.attributed_to,
            ParticipantRole::Observer => &self.observers,
        }
    }

    /// Returns a short plain-text label for announcements.
    ///
    /// Uses the name when present, otherwise the description with markup
    /// removed.
    #[must_use]
    pub fn label(&self) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            plain_text(&self.description)
        } else {
            name.to_owned()
        }
    }

    pub(crate) fn reassign(&mut self, column_id: ColumnId) {
        self.column_id = column_id;
    }

    pub(crate) fn apply(&mut self, edit: TaskEdit) {
        if let Some(name) = edit.name {
            self.name = name;
        }
        if let Some(description) = edit.description {
            self.description = description;
        }
        for (role, users) in edit.participants {
            *self.participants_mut(role) = users;
        }
    }

    fn participants_mut(&mut self, role: ParticipantRole) -> &mut Vec<User> {
        match role {
            ParticipantRole::Requester => &mut self.applicants,
            ParticipantRole::Assignee => &mut self.attributed_to,
            ParticipantRole::Observer => &mut self.observers,
        }
    }
}

/// Changes to a task's text and participants.
///
/// An edit never touches the column or the position of the task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEdit {
    id: TaskId,
    name: Option<String>,
    description: Option<String>,
    participants: Vec<(ParticipantRole, Vec<User>)>,
}

impl TaskEdit {
    /// Starts an empty edit of task `id`.
    #[must_use]
    pub const fn new(id: TaskId) -> Self {
        Self {
            id,
            name: None,
            description: None,
            participants: Vec::new(),
        }
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the users holding `role`.
    #[must_use]
    pub fn with_participants(
        mut self,
        role: ParticipantRole,
        users: impl IntoIterator<Item = User>,
    ) -> Self {
        self.participants.retain(|(existing, _)| *existing != role);
        self.participants.push((role, users.into_iter().collect()));
        self
    }

    /// Returns the identifier of the edited task.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }
}
