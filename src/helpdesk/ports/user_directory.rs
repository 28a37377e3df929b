//! User directory port.

use super::HelpdeskResult;
use crate::board::domain::{User, UserId};
use crate::helpdesk::domain::SessionToken;
use async_trait::async_trait;

/// Read access to helpdesk users.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Lists every user.
    ///
    /// # Errors
    ///
    /// Returns [`super::HelpdeskError::Unauthorized`] when the session is
    /// rejected.
    async fn list_users(&self, session: &SessionToken) -> HelpdeskResult<Vec<User>>;

    /// Fetches one user.
    ///
    /// # Errors
    ///
    /// Returns [`super::HelpdeskError::NotFound`] when the user does not
    /// exist.
    async fn get_user(&self, session: &SessionToken, id: UserId) -> HelpdeskResult<User>;
}
