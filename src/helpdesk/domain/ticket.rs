//! Ticket records exchanged with the ticket store.

use crate::board::domain::{ParticipantRole, TaskId, TicketStatus, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's relation to a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantLink {
    /// Related user.
    pub user_id: UserId,
    /// Role of the relation.
    pub role: ParticipantRole,
}

impl ParticipantLink {
    /// Creates a link.
    #[must_use]
    pub const fn new(user_id: UserId, role: ParticipantRole) -> Self {
        Self { user_id, role }
    }
}

/// A ticket as listed by the ticket store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    /// Ticket identifier, reused as the task identifier.
    pub id: TaskId,
    /// Ticket title.
    pub name: String,
    /// Rich-text ticket body.
    pub content: String,
    /// Current ticket status.
    pub status: TicketStatus,
    /// Users related to the ticket.
    #[serde(default)]
    pub participants: Vec<ParticipantLink>,
}

impl TicketRecord {
    /// Creates a ticket without participants.
    #[must_use]
    pub fn new(
        id: impl Into<TaskId>,
        name: impl Into<String>,
        content: impl Into<String>,
        status: TicketStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
            status,
            participants: Vec::new(),
        }
    }

    /// Adds a participant relation.
    #[must_use]
    pub fn with_participant(mut self, user_id: UserId, role: ParticipantRole) -> Self {
        self.participants.push(ParticipantLink::new(user_id, role));
        self
    }
}

/// Fields written back when a task changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketUpdate {
    /// New ticket title.
    pub name: String,
    /// New ticket status.
    pub status: TicketStatus,
    /// New rich-text body.
    pub content: String,
    /// Time of the local change.
    pub modified_at: DateTime<Utc>,
}
