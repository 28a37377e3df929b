//! Session provider port.

use crate::helpdesk::domain::SessionToken;

/// Supplies the session credential for helpdesk calls.
pub trait SessionProvider: Send + Sync {
    /// Returns the current token, or `None` when signed out.
    fn token(&self) -> Option<SessionToken>;

    /// Drops the current credential after the helpdesk rejected it.
    ///
    /// Callers must then re-authenticate; board state is unaffected.
    fn invalidate(&self);
}
