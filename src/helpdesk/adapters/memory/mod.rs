//! In-memory helpdesk collaborators for tests and offline use.

mod session;
mod ticket_store;
mod user_directory;

pub use session::InMemorySessionProvider;
pub use ticket_store::InMemoryTicketStore;
pub use user_directory::InMemoryUserDirectory;
