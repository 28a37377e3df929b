//! In-memory ticket store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::domain::{ParticipantRole, TaskId, UserId};
use crate::helpdesk::{
    domain::{ParticipantLink, SessionToken, TicketRecord, TicketUpdate},
    ports::{HelpdeskError, HelpdeskResult, TicketStore},
};

/// Thread-safe in-memory ticket store.
///
/// Records every update it receives so tests can assert on what was pushed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTicketStore {
    state: Arc<RwLock<InMemoryTicketState>>,
    accepted_session: Option<SessionToken>,
}

#[derive(Debug, Default)]
struct InMemoryTicketState {
    tickets: Vec<TicketRecord>,
    links: Vec<(TaskId, ParticipantLink)>,
    updates: Vec<(TaskId, TicketUpdate)>,
}

impl InMemoryTicketStore {
    /// Creates an empty store that accepts any session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects every call whose session differs from `session`.
    #[must_use]
    pub fn requiring_session(mut self, session: SessionToken) -> Self {
        self.accepted_session = Some(session);
        self
    }

    /// Adds a ticket; its participants become relations.
    ///
    /// # Errors
    ///
    /// Returns [`HelpdeskError::Rejected`] when the ticket id is taken.
    pub fn insert_ticket(&self, mut record: TicketRecord) -> HelpdeskResult<()> {
        let mut state = self.write()?;
        if state.tickets.iter().any(|ticket| ticket.id == record.id) {
            return Err(HelpdeskError::Rejected(format!(
                "duplicate ticket {}",
                record.id
            )));
        }
        for link in record.participants.drain(..) {
            state.links.push((record.id.clone(), link));
        }
        state.tickets.push(record);
        Ok(())
    }

    /// Returns a stored ticket with its current participants.
    ///
    /// # Errors
    ///
    /// Returns [`HelpdeskError::Transport`] when the state lock is poisoned.
    pub fn ticket(&self, id: &TaskId) -> HelpdeskResult<Option<TicketRecord>> {
        let state = self.read()?;
        Ok(state
            .tickets
            .iter()
            .find(|ticket| ticket.id == *id)
            .map(|ticket| with_links(&state, ticket)))
    }

    /// Returns every update received, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`HelpdeskError::Transport`] when the state lock is poisoned.
    pub fn updates(&self) -> HelpdeskResult<Vec<(TaskId, TicketUpdate)>> {
        Ok(self.read()?.updates.clone())
    }

    fn authorize(&self, session: &SessionToken) -> HelpdeskResult<()> {
        match &self.accepted_session {
            Some(accepted) if accepted != session => Err(HelpdeskError::Unauthorized),
            _ => Ok(()),
        }
    }

    fn read(&self) -> HelpdeskResult<RwLockReadGuard<'_, InMemoryTicketState>> {
        self.state
            .read()
            .map_err(|err| HelpdeskError::transport(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> HelpdeskResult<RwLockWriteGuard<'_, InMemoryTicketState>> {
        self.state
            .write()
            .map_err(|err| HelpdeskError::transport(std::io::Error::other(err.to_string())))
    }
}

fn with_links(state: &InMemoryTicketState, ticket: &TicketRecord) -> TicketRecord {
    let mut record = ticket.clone();
    record.participants = links_of(state, &ticket.id);
    record
}

fn links_of(state: &InMemoryTicketState, ticket: &TaskId) -> Vec<ParticipantLink> {
    state
        .links
        .iter()
        .filter(|(owner, _)| owner == ticket)
        .map(|(_, link)| *link)
        .collect()
}

fn ensure_ticket(state: &InMemoryTicketState, ticket: &TaskId) -> HelpdeskResult<()> {
    if state.tickets.iter().any(|candidate| candidate.id == *ticket) {
        Ok(())
    } else {
        Err(HelpdeskError::NotFound(format!("ticket {ticket}")))
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn list_tickets(&self, session: &SessionToken) -> HelpdeskResult<Vec<TicketRecord>> {
        self.authorize(session)?;
        let state = self.read()?;
        Ok(state
            .tickets
            .iter()
            .map(|ticket| with_links(&state, ticket))
            .collect())
    }

    async fn update_ticket(
        &self,
        session: &SessionToken,
        ticket: &TaskId,
        update: &TicketUpdate,
    ) -> HelpdeskResult<()> {
        self.authorize(session)?;
        let mut state = self.write()?;
        let record = state
            .tickets
            .iter_mut()
            .find(|candidate| candidate.id == *ticket)
            .ok_or_else(|| HelpdeskError::NotFound(format!("ticket {ticket}")))?;
        record.name.clone_from(&update.name);
        record.content.clone_from(&update.content);
        record.status = update.status;
        state.updates.push((ticket.clone(), update.clone()));
        Ok(())
    }

    async fn list_participants(
        &self,
        session: &SessionToken,
        ticket: &TaskId,
    ) -> HelpdeskResult<Vec<ParticipantLink>> {
        self.authorize(session)?;
        let state = self.read()?;
        ensure_ticket(&state, ticket)?;
        Ok(links_of(&state, ticket))
    }

    async fn add_participant(
        &self,
        session: &SessionToken,
        ticket: &TaskId,
        user: UserId,
        role: ParticipantRole,
    ) -> HelpdeskResult<()> {
        self.authorize(session)?;
        let mut state = self.write()?;
        ensure_ticket(&state, ticket)?;
        let link = ParticipantLink::new(user, role);
        if state
            .links
            .iter()
            .any(|(owner, existing)| owner == ticket && *existing == link)
        {
            return Err(HelpdeskError::Rejected(format!(
                "user {user} is already {role} of ticket {ticket}"
            )));
        }
        state.links.push((ticket.clone(), link));
        Ok(())
    }

    async fn remove_participant(
        &self,
        session: &SessionToken,
        ticket: &TaskId,
        user: UserId,
        role: ParticipantRole,
    ) -> HelpdeskResult<()> {
        self.authorize(session)?;
        let mut state = self.write()?;
        let link = ParticipantLink::new(user, role);
        let before = state.links.len();
        state
            .links
            .retain(|(owner, existing)| !(owner == ticket && *existing == link));
        if state.links.len() == before {
            return Err(HelpdeskError::NotFound(format!(
                "user {user} is not {role} of ticket {ticket}"
            )));
        }
        Ok(())
    }
}
