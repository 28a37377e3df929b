//! In-memory session provider.

use std::sync::{Arc, RwLock};

use crate::helpdesk::{domain::SessionToken, ports::SessionProvider};

/// Thread-safe session holder.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionProvider {
    token: Arc<RwLock<Option<SessionToken>>>,
}

impl InMemorySessionProvider {
    /// Creates a provider signed in with `token`.
    #[must_use]
    pub fn signed_in(token: SessionToken) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token))),
        }
    }

    /// Creates a provider without a credential.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Stores a fresh credential after re-authentication.
    pub fn sign_in(&self, token: SessionToken) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token);
        }
    }
}

impl SessionProvider for InMemorySessionProvider {
    fn token(&self) -> Option<SessionToken> {
        self.token.read().ok().and_then(|slot| slot.clone())
    }

    fn invalidate(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }
}
