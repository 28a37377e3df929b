//! Ticket store port.

use super::HelpdeskResult;
use crate::board::domain::{ParticipantRole, TaskId, UserId};
use crate::helpdesk::domain::{ParticipantLink, SessionToken, TicketRecord, TicketUpdate};
use async_trait::async_trait;

/// Ticket persistence contract of the helpdesk.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Lists all tickets visible to the session, with their participants.
    ///
    /// # Errors
    ///
    /// Returns [`super::HelpdeskError::Unauthorized`] when the session is
    /// rejected.
    async fn list_tickets(&self, session: &SessionToken) -> HelpdeskResult<Vec<TicketRecord>>;

    /// Writes a ticket's name, status and content.
    ///
    /// # Errors
    ///
    /// Returns [`super::HelpdeskError::NotFound`] when the ticket does not
    /// exist.
    async fn update_ticket(
        &self,
        session: &SessionToken,
        ticket: &TaskId,
        update: &TicketUpdate,
    ) -> HelpdeskResult<()>;

    /// Lists the user relations of a ticket.
    ///
    /// # Errors
    ///
    /// Returns [`super::HelpdeskError::NotFound`] when the ticket does not
    /// exist.
    async fn list_participants(
        &self,
        session: &SessionToken,
        ticket: &TaskId,
    ) -> HelpdeskResult<Vec<ParticipantLink>>;

    /// Relates a user to a ticket in `role`.
    ///
    /// # Errors
    ///
    /// Returns [`super::HelpdeskError::Rejected`] when the relation cannot be
    /// created.
    async fn add_participant(
        &self,
        session: &SessionToken,
        ticket: &TaskId,
        user: UserId,
        role: ParticipantRole,
    ) -> HelpdeskResult<()>;

    /// Removes a user's `role` relation from a ticket.
    ///
    /// # Errors
    ///
    /// Returns [`super::HelpdeskError::NotFound`] when no such relation
    /// exists.
    async fn remove_participant(
        &self,
        session: &SessionToken,
        ticket: &TaskId,
        user: UserId,
        role: ParticipantRole,
    ) -> HelpdeskResult<()>;
}
