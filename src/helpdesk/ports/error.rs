//! Errors shared by the helpdesk ports.

use std::sync::Arc;
use thiserror::Error;

/// Result type for helpdesk port operations.
pub type HelpdeskResult<T> = Result<T, HelpdeskError>;

/// Errors returned by helpdesk port implementations.
#[derive(Debug, Clone, Error)]
pub enum HelpdeskError {
    /// The session credential was rejected (HTTP 401).
    #[error("session rejected by the helpdesk")]
    Unauthorized,

    /// The referenced ticket, user or relation does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The helpdesk refused the request.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// Transport-layer failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl HelpdeskError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns `true` when the session must be re-established.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
