//! Port contracts for the helpdesk collaborators.
//!
//! Ports define transport-agnostic interfaces used by the sync service.

pub mod error;
pub mod session;
pub mod ticket_store;
pub mod user_directory;

pub use error::{HelpdeskError, HelpdeskResult};
pub use session::SessionProvider;
pub use ticket_store::TicketStore;
pub use user_directory::UserDirectory;
