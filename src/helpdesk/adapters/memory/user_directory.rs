//! In-memory user directory.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::board::domain::{User, UserId};
use crate::helpdesk::{
    domain::SessionToken,
    ports::{HelpdeskError, HelpdeskResult, UserDirectory},
};

/// Read-only directory over a fixed user set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<BTreeMap<UserId, User>>,
    accepted_session: Option<SessionToken>,
}

impl InMemoryUserDirectory {
    /// Creates a directory holding `users`.
    #[must_use]
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Arc::new(users.into_iter().map(|user| (user.id, user)).collect()),
            accepted_session: None,
        }
    }

    /// Rejects every call whose session differs from `session`.
    #[must_use]
    pub fn requiring_session(mut self, session: SessionToken) -> Self {
        self.accepted_session = Some(session);
        self
    }

    fn authorize(&self, session: &SessionToken) -> HelpdeskResult<()> {
        match &self.accepted_session {
            Some(accepted) if accepted != session => Err(HelpdeskError::Unauthorized),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn list_users(&self, session: &SessionToken) -> HelpdeskResult<Vec<User>> {
        self.authorize(session)?;
        Ok(self.users.values().cloned().collect())
    }

    async fn get_user(&self, session: &SessionToken, id: UserId) -> HelpdeskResult<User> {
        self.authorize(session)?;
        self.users
            .get(&id)
            .cloned()
            .ok_or_else(|| HelpdeskError::NotFound(format!("user {id}")))
    }
}
