//! Service that loads tickets into the board and pushes task changes back.

use crate::board::{
    domain::{BoardError, Column, ColumnId, ParticipantRole, Task, TicketStatus, User, UserId},
    services::BoardStore,
};
use crate::helpdesk::{
    domain::{ParticipantLink, SessionToken, StatusMap, TicketUpdate},
    ports::{HelpdeskError, HelpdeskResult, SessionProvider, TicketStore, UserDirectory},
};
use mockable::Clock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for helpdesk synchronization.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No session credential is available.
    #[error("no helpdesk session, sign in first")]
    SessionMissing,
    /// The helpdesk rejected the session; the credential was cleared.
    #[error("helpdesk session expired, sign in again")]
    SessionExpired,
    /// A helpdesk call failed.
    #[error(transparent)]
    Helpdesk(#[from] HelpdeskError),
    /// Loaded tasks could not be committed to the board.
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Result type for synchronization operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Mirrors helpdesk tickets into board tasks and back.
#[derive(Clone)]
pub struct BoardSyncService<T, U, S, C>
where
    T: TicketStore,
    U: UserDirectory,
    S: SessionProvider,
    C: Clock + Send + Sync,
{
    tickets: Arc<T>,
    users: Arc<U>,
    session: Arc<S>,
    clock: Arc<C>,
    statuses: StatusMap,
    seed_placeholders: bool,
}

impl<T, U, S, C> BoardSyncService<T, U, S, C>
where
    T: TicketStore,
    U: UserDirectory,
    S: SessionProvider,
    C: Clock + Send + Sync,
{
    /// Creates a service using the default status table and placeholder
    /// seeding.
    #[must_use]
    pub fn new(tickets: Arc<T>, users: Arc<U>, session: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            tickets,
            users,
            session,
            clock,
            statuses: StatusMap::default(),
            seed_placeholders: true,
        }
    }

    /// Replaces the status table.
    #[must_use]
    pub fn with_status_map(mut self, statuses: StatusMap) -> Self {
        self.statuses = statuses;
        self
    }

    /// Enables or disables hidden seed tasks on load.
    #[must_use]
    pub const fn with_placeholders(mut self, enabled: bool) -> Self {
        self.seed_placeholders = enabled;
        self
    }

    /// Builds the board task sequence from the helpdesk's tickets.
    ///
    /// Seed tasks for every column come first when seeding is enabled,
    /// followed by tickets in listing order. Participants are resolved
    /// through the user directory once per user.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::SessionMissing`] without a session,
    /// [`SyncError::SessionExpired`] when the helpdesk rejects it, and
    /// [`SyncError::Helpdesk`] for other failures.
    pub async fn fetch_tasks(&self, columns: &[Column]) -> SyncResult<Vec<Task>> {
        let session = self.token()?;
        let records = self.guard(self.tickets.list_tickets(&session).await)?;

        let mut tasks: Vec<Task> = if self.seed_placeholders {
            columns
                .iter()
                .map(|column| {
                    let status = self
                        .statuses
                        .status_for(column.id())
                        .unwrap_or(TicketStatus::NEW);
                    Task::placeholder(column.id(), status)
                })
                .collect()
        } else {
            Vec::new()
        };

        let mut cache = HashMap::new();
        let ticket_count = records.len();
        for record in records {
            let column = self.column_for(record.status, columns)?;
            let participants = self
                .resolve_participants(&session, &record.participants, &mut cache)
                .await?;
            let mut task = Task::new(record.id, column, record.status)
                .with_name(record.name)
                .with_description(record.content);
            for role in ParticipantRole::ALL {
                task = task.with_participants(
                    role,
                    participants
                        .iter()
                        .filter(|(candidate, _)| *candidate == role)
                        .map(|(_, user)| user.clone()),
                );
            }
            tasks.push(task);
        }

        info!(tickets = ticket_count, "fetched helpdesk tickets");
        Ok(tasks)
    }

    /// Reloads `store` from the helpdesk.
    ///
    /// Returns the number of tasks loaded, seed tasks included.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::fetch_tasks`], or [`SyncError::Board`]
    /// when the store rejects the loaded tasks.
    pub async fn refresh(&self, store: &mut BoardStore) -> SyncResult<usize> {
        let tasks = self.fetch_tasks(store.columns()).await?;
        let count = tasks.len();
        store.load(tasks)?;
        Ok(count)
    }

    /// Writes a task's column, text and participants back to its ticket.
    ///
    /// The status comes from the task's column. Participant relations that
    /// are no longer on the task are removed and missing ones are added; a
    /// failing relation call is logged and the remaining calls still run.
    /// Seed tasks are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::SessionMissing`] without a session,
    /// [`SyncError::SessionExpired`] when the helpdesk rejects it, and
    /// [`SyncError::Helpdesk`] when the ticket update or the relation listing
    /// fails.
    pub async fn push_task(&self, task: &Task) -> SyncResult<()> {
        if task.is_placeholder() {
            debug!(task = %task.id(), "skipping sync of seed task");
            return Ok(());
        }
        let session = self.token()?;
        let update = TicketUpdate {
            name: task.name().to_owned(),
            status: self
                .statuses
                .status_for(task.column_id())
                .unwrap_or(task.status()),
            content: task.description().to_owned(),
            modified_at: self.clock.utc(),
        };
        self.guard(
            self.tickets
                .update_ticket(&session, task.id(), &update)
                .await,
        )?;
        self.reconcile_participants(&session, task).await?;
        debug!(task = %task.id(), status = %update.status, "pushed task to helpdesk");
        Ok(())
    }

    /// Lists the users available to the participant pickers.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::SessionMissing`] without a session,
    /// [`SyncError::SessionExpired`] when the helpdesk rejects it, and
    /// [`SyncError::Helpdesk`] for other failures.
    pub async fn list_users(&self) -> SyncResult<Vec<User>> {
        let session = self.token()?;
        self.guard(self.users.list_users(&session).await)
    }

    async fn reconcile_participants(&self, session: &SessionToken, task: &Task) -> SyncResult<()> {
        let existing = self.guard(self.tickets.list_participants(session, task.id()).await)?;

        let mut desired = HashSet::new();
        let desired_links: Vec<ParticipantLink> = ParticipantRole::ALL
            .into_iter()
            .flat_map(|role| {
                task.participants(role)
                    .iter()
                    .map(move |user| ParticipantLink::new(user.id, role))
            })
            .filter(|link| desired.insert(*link))
            .collect();

        for link in existing.iter().filter(|link| !desired.contains(*link)) {
            let removed = self
                .tickets
                .remove_participant(session, task.id(), link.user_id, link.role)
                .await;
            self.tolerate(removed, task, "remove participant")?;
        }
        for link in desired_links.iter().filter(|link| !existing.contains(*link)) {
            let added = self
                .tickets
                .add_participant(session, task.id(), link.user_id, link.role)
                .await;
            self.tolerate(added, task, "add participant")?;
        }
        Ok(())
    }

    async fn resolve_participants(
        &self,
        session: &SessionToken,
        links: &[ParticipantLink],
        cache: &mut HashMap<UserId, User>,
    ) -> SyncResult<Vec<(ParticipantRole, User)>> {
        let mut resolved = Vec::with_capacity(links.len());
        for link in links {
            if let Some(user) = cache.get(&link.user_id) {
                resolved.push((link.role, user.clone()));
                continue;
            }
            match self.users.get_user(session, link.user_id).await {
                Ok(user) => {
                    cache.insert(link.user_id, user.clone());
                    resolved.push((link.role, user));
                }
                Err(HelpdeskError::NotFound(_)) => {
                    warn!(user = %link.user_id, "skipping participant missing from directory");
                }
                Err(error) => return Err(self.classify(error)),
            }
        }
        Ok(resolved)
    }

    fn column_for(&self, status: TicketStatus, columns: &[Column]) -> SyncResult<ColumnId> {
        self.statuses
            .column_for(status)
            .filter(|mapped| columns.iter().any(|column| column.id() == *mapped))
            .or_else(|| columns.first().map(Column::id))
            .cloned()
            .ok_or(SyncError::Board(BoardError::NoColumns))
    }

    fn token(&self) -> SyncResult<SessionToken> {
        self.session.token().ok_or(SyncError::SessionMissing)
    }

    fn guard<V>(&self, result: HelpdeskResult<V>) -> SyncResult<V> {
        result.map_err(|error| self.classify(error))
    }

    fn tolerate(&self, result: HelpdeskResult<()>, task: &Task, action: &str) -> SyncResult<()> {
        match result {
            Ok(()) => Ok(()),
            Err(error) if error.is_unauthorized() => Err(self.classify(error)),
            Err(error) => {
                warn!(task = %task.id(), %error, action, "participant sync failed");
                Ok(())
            }
        }
    }

    fn classify(&self, error: HelpdeskError) -> SyncError {
        if error.is_unauthorized() {
            warn!("helpdesk rejected the session, clearing credential");
            self.session.invalidate();
            SyncError::SessionExpired
        } else {
            SyncError::Helpdesk(error)
        }
    }
}
